use iced::{
    Element, Length, Task,
    widget::{column, scrollable, text},
};

use crate::{
    core::{AppState, NewProject},
    gui::{
        components::{
            Component, ComponentMessage, CreateProjectForm, CreateProjectFormParent, SearchBar,
        },
        widgets::project_list,
    },
};

#[derive(Debug, Default)]
pub struct DashboardScreen {
    search: SearchBar,
    form: CreateProjectForm,
}

#[derive(Debug, Clone)]
pub enum DashboardMessage {
    Search(ComponentMessage<SearchBar>),
    Form(ComponentMessage<CreateProjectForm>),
}

#[derive(Debug, Clone)]
pub enum DashboardParent {
    CreateProject(NewProject),
}

impl DashboardScreen {
    pub fn search(&self) -> &SearchBar {
        &self.search
    }

    pub fn form(&self) -> &CreateProjectForm {
        &self.form
    }

    /// Recomputes derived views after the root collection changed.
    pub fn projects_changed(&mut self, state: &AppState) {
        self.search.refresh(state);
    }
}

impl Component for DashboardScreen {
    type Message = DashboardMessage;
    type ParentMessage = DashboardParent;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ComponentMessage<Self>> {
        let content = column![
            text("Dashboard").size(24),
            self.search
                .view(state)
                .map(DashboardMessage::Search)
                .map(ComponentMessage::Local),
            self.form
                .view(state)
                .map(DashboardMessage::Form)
                .map(ComponentMessage::Local),
            scrollable(project_list(
                state.projects.as_slice(),
                self.search.state().selected(),
            ))
            .height(Length::Fill),
        ]
        .spacing(16)
        .padding(16);

        content.into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ComponentMessage<Self>> {
        match message {
            DashboardMessage::Search(ComponentMessage::Local(msg)) => self
                .search
                .update(msg, state)
                .map(DashboardMessage::Search)
                .map(ComponentMessage::Local),
            DashboardMessage::Search(ComponentMessage::Parent(never)) => match never {},
            DashboardMessage::Form(ComponentMessage::Local(msg)) => self
                .form
                .update(msg, state)
                .map(DashboardMessage::Form)
                .map(ComponentMessage::Local),
            DashboardMessage::Form(ComponentMessage::Parent(
                CreateProjectFormParent::CreateProject(new_project),
            )) => Task::done(ComponentMessage::Parent(DashboardParent::CreateProject(
                new_project,
            ))),
        }
    }
}
