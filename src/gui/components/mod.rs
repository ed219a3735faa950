mod create_project_form;
mod dashboard;
mod search_bar;

use std::fmt;

use iced::{Element, Task};

use crate::core::AppState;

pub use create_project_form::{CreateProjectForm, CreateProjectFormMessage, CreateProjectFormParent};
pub use dashboard::{DashboardMessage, DashboardParent, DashboardScreen};
pub use search_bar::{SearchBar, SearchBarMessage};

/// A message either handled by the component itself or bubbled up to its
/// owner, which plays the role of a callback.
pub enum ComponentMessage<C: Component> {
    Local(C::Message),
    Parent(C::ParentMessage),
}

impl<C: Component> Clone for ComponentMessage<C> {
    fn clone(&self) -> Self {
        match self {
            Self::Local(msg) => Self::Local(msg.clone()),
            Self::Parent(msg) => Self::Parent(msg.clone()),
        }
    }
}

impl<C: Component> fmt::Debug for ComponentMessage<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(msg) => f.debug_tuple("Local").field(msg).finish(),
            Self::Parent(msg) => f.debug_tuple("Parent").field(msg).finish(),
        }
    }
}

pub trait Component: Sized {
    type Message: fmt::Debug + Clone;
    type ParentMessage: fmt::Debug + Clone;
    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ComponentMessage<Self>>;
    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ComponentMessage<Self>>;
}
