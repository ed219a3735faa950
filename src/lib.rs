pub mod core;

pub use crate::core::{
    AppState, DismissTicket, Field, FieldError, FormState, NewProject, Project, ProjectId,
    ProjectStore, SearchState, Toast, ValidationErrors,
};

#[cfg(feature = "gui")]
pub mod gui;
