mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from projboard for tests
pub use projboard::core::{
    AppState, DISMISS_AFTER, Field, FieldError, FormState, NewProject, Project, ProjectId,
    ProjectStore, SUCCESS_MESSAGE, SearchState, filter_projects,
};
