use iced::{Element, Task, Theme};

use super::{
    AppConfig, Message,
    components::{Component, ComponentMessage, DashboardParent, DashboardScreen},
    widgets::{NavItem, layout},
};
use crate::core::{AppState, expire};

pub struct ProjectsApp {
    state: AppState,
    dashboard: DashboardScreen,
    theme: Theme,
}

impl ProjectsApp {
    pub fn new(config: AppConfig) -> (Self, Task<Message>) {
        (
            Self {
                state: config.initial_state(),
                dashboard: DashboardScreen::default(),
                theme: config.theme.into(),
            },
            Task::none(),
        )
    }

    pub fn run(config: AppConfig) -> iced::Result {
        iced::application(move || Self::new(config.clone()), Self::update, Self::view)
            .title(Self::title)
            .theme(Self::theme)
            .window_size((1024.0, 768.0))
            .run()
    }

    fn title(&self) -> String {
        "Gestión de Proyectos".to_string()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Dashboard(ComponentMessage::Local(msg)) => self
                .dashboard
                .update(msg, &mut self.state)
                .map(Message::Dashboard),
            Message::Dashboard(ComponentMessage::Parent(DashboardParent::CreateProject(
                new_project,
            ))) => {
                let ticket = self.state.handle_create_project(new_project);
                self.dashboard.projects_changed(&self.state);
                Task::perform(expire(ticket), Message::ToastExpired)
            }
            Message::ToastExpired(ticket) => {
                self.state.dismiss_toast(ticket);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        layout(
            self.dashboard.view(&self.state).map(Message::Dashboard),
            NavItem::Dashboard,
            self.state.toast.is_visible(),
        )
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::NewProject,
        gui::{DashboardMessage, SearchBarMessage},
    };

    fn app() -> ProjectsApp {
        ProjectsApp::new(AppConfig::default()).0
    }

    fn create(app: &mut ProjectsApp, name: &str, description: &str) {
        let _ = app.update(Message::Dashboard(ComponentMessage::Parent(
            DashboardParent::CreateProject(NewProject::new(name, description)),
        )));
    }

    #[test]
    fn create_event_appends_and_shows_toast() {
        let mut app = app();
        assert!(!app.state.toast.is_visible());

        create(&mut app, "X", "Y");

        assert_eq!(app.state.projects.len(), 3);
        assert_eq!(app.state.projects.as_slice()[2].name, "X");
        assert!(app.state.toast.is_visible());
    }

    #[test]
    fn create_event_refreshes_open_search() {
        let mut app = app();
        let _ = app.update(Message::Dashboard(ComponentMessage::Local(
            DashboardMessage::Search(ComponentMessage::Local(SearchBarMessage::QueryChanged(
                "proyecto".to_string(),
            ))),
        )));
        assert_eq!(app.dashboard.search().state().suggestions().len(), 2);

        create(&mut app, "Proyecto nuevo", "d");
        assert_eq!(app.dashboard.search().state().suggestions().len(), 3);
    }

    #[test]
    fn unseeded_config_starts_empty() {
        let (app, _) = ProjectsApp::new(AppConfig {
            seed: false,
            ..AppConfig::default()
        });
        assert!(app.state.projects.is_empty());
        assert_eq!(app.theme, Theme::Dark);
    }
}
