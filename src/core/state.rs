use super::{DismissTicket, NewProject, ProjectStore, Toast};

/// Root state: the canonical project collection and the success toast.
/// Children only change it through [`AppState::handle_create_project`].
#[derive(Debug, Clone)]
pub struct AppState {
    pub projects: ProjectStore,
    pub toast: Toast,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ProjectStore::seeded())
    }
}

impl AppState {
    pub fn new(projects: ProjectStore) -> Self {
        Self {
            projects,
            toast: Toast::default(),
        }
    }

    /// Appends the project and shows the toast. The caller arms the dismiss
    /// timer with the returned ticket.
    pub fn handle_create_project(&mut self, new_project: NewProject) -> DismissTicket {
        let project = self.projects.insert(new_project);
        tracing::info!(id = %project.id, name = %project.name, "project created");
        self.toast.show()
    }

    pub fn dismiss_toast(&mut self, ticket: DismissTicket) {
        if self.toast.dismiss(ticket) {
            tracing::debug!("toast dismissed");
        }
    }
}
