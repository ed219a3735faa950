mod form;
mod notification;
mod project;
mod search;
mod state;

pub use form::{Field, FieldError, FormErrors, FormState, ValidationErrors};
pub use notification::{DISMISS_AFTER, DismissTicket, SUCCESS_MESSAGE, Toast, expire};
pub use project::{NewProject, Project, ProjectId, ProjectStore};
pub use search::{SearchState, filter_projects};
pub use state::AppState;
