use super::{Project, ProjectId};

/// Projects whose name contains `query`, ignoring case, in collection order.
/// A blank query matches nothing.
pub fn filter_projects<'a, I>(projects: I, query: &str) -> Vec<Project>
where
    I: IntoIterator<Item = &'a Project>,
{
    if query.trim().is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    projects
        .into_iter()
        .filter(|project| project.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Search box state. `suggestions` is a cache of [`filter_projects`] and is
/// recomputed whenever the query or the collection changes.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    query: String,
    suggestions: Vec<Project>,
    selected: Option<ProjectId>,
}

impl SearchState {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[Project] {
        &self.suggestions
    }

    pub fn selected(&self) -> Option<ProjectId> {
        self.selected
    }

    pub fn set_query(&mut self, query: impl Into<String>, projects: &[Project]) {
        self.query = query.into();
        self.selected = None;
        self.refresh(projects);
    }

    pub fn refresh(&mut self, projects: &[Project]) {
        self.suggestions = filter_projects(projects, &self.query);
        tracing::debug!(
            query = %self.query,
            matches = self.suggestions.len(),
            "search suggestions updated"
        );
    }

    /// Picks a suggestion: the input takes the project's name and the
    /// dropdown closes until the query is edited again.
    pub fn select(&mut self, id: ProjectId, projects: &[Project]) {
        let Some(project) = projects.iter().find(|p| p.id == id) else {
            return;
        };
        self.query = project.name.clone();
        self.selected = Some(id);
        self.refresh(projects);
    }

    pub fn dropdown_visible(&self) -> bool {
        self.selected.is_none() && !self.suggestions.is_empty()
    }
}
