//! Property tests for search filtering and form validation over generated
//! project names, queries and blank inputs.

mod common;

use common::*;
use proptest::prelude::*;

// Names mixing ASCII, accented letters and whitespace so case folding is exercised.
fn arb_name() -> impl Strategy<Value = String> {
    "[a-zA-ZáéíóúñÑÁÉ0-9 ]{0,16}"
}

fn arb_blank() -> impl Strategy<Value = String> {
    "[ \t\n\r]{0,6}"
}

fn store_with(names: &[String]) -> ProjectStore {
    let mut store = ProjectStore::new();
    for name in names {
        store.insert(NewProject::new(name.clone(), "d"));
    }
    store
}

proptest! {
    /// Property: suggestions are exactly the case-insensitive name matches, in order
    #[test]
    fn prop_filter_is_exact_matching_subset(
        names in prop::collection::vec(arb_name(), 0..12),
        query in "[a-zA-ZáéíñÑ0-9 ]{0,4}",
    ) {
        let store = store_with(&names);
        let found = filter_projects(&store, &query);

        if query.trim().is_empty() {
            prop_assert!(found.is_empty());
        } else {
            let needle = query.to_lowercase();
            let expected: Vec<Project> = store
                .iter()
                .filter(|p| p.name.to_lowercase().contains(&needle))
                .cloned()
                .collect();
            prop_assert_eq!(found, expected);
        }
    }

    /// Property: a blank query never yields suggestions
    #[test]
    fn prop_blank_query_yields_nothing(
        names in prop::collection::vec(arb_name(), 0..12),
        query in arb_blank(),
    ) {
        let store = store_with(&names);
        prop_assert!(filter_projects(&store, &query).is_empty());
    }

    /// Property: a blank name or description never changes the collection
    #[test]
    fn prop_blank_field_never_creates(
        blank in arb_blank(),
        filled in "[a-zA-Z]{1,8}",
        blank_name in any::<bool>(),
        both_blank in any::<bool>(),
    ) {
        let (name, description) = match (both_blank, blank_name) {
            (true, _) => (blank.clone(), blank.clone()),
            (false, true) => (blank.clone(), filled.clone()),
            (false, false) => (filled.clone(), blank.clone()),
        };
        let mut state = seeded_state();
        let mut form = filled_form(&name, &description);

        prop_assert!(!submit_to(&mut state, &mut form));
        prop_assert_eq!(state.projects.len(), 2);
        prop_assert!(!state.toast.is_visible());

        let keys: Vec<&str> = form.errors().keys().map(|field| field.key()).collect();
        let expected = match (both_blank, blank_name) {
            (true, _) => vec!["name", "description"],
            (false, true) => vec!["name"],
            (false, false) => vec!["description"],
        };
        prop_assert_eq!(keys, expected);
        prop_assert_eq!(form.name(), name.as_str());
        prop_assert_eq!(form.description(), description.as_str());
    }
}
