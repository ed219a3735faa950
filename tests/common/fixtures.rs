use projboard::core::{AppState, FormState, NewProject, ProjectStore};

/// Root state holding the two sample projects ("Proyecto 1", "Proyecto 2").
pub fn seeded_state() -> AppState {
    AppState::new(ProjectStore::seeded())
}

/// A form with both inputs set to the given values.
pub fn filled_form(name: &str, description: &str) -> FormState {
    let mut form = FormState::default();
    form.set_name(name);
    form.set_description(description);
    form
}

/// Runs a form submission through the root the way the dashboard does:
/// a valid form creates the project, an invalid one leaves the state alone.
pub fn submit_to(state: &mut AppState, form: &mut FormState) -> bool {
    match form.submit() {
        Ok(new_project) => {
            state.handle_create_project(new_project);
            true
        }
        Err(_) => false,
    }
}

pub fn make_new_project(n: usize) -> NewProject {
    NewProject::new(format!("Extra {n}"), format!("Descripción {n}"))
}
