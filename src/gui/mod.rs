mod app;
mod components;
mod config;
mod message;
mod widgets;

pub use app::ProjectsApp;
pub use components::{
    Component, ComponentMessage, CreateProjectForm, CreateProjectFormMessage,
    CreateProjectFormParent, DashboardMessage, DashboardParent, DashboardScreen, SearchBar,
    SearchBarMessage,
};
pub use config::{AppConfig, ThemeChoice};
pub use message::Message;
