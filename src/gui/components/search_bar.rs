use std::convert::Infallible;

use iced::{
    Element, Length, Task,
    widget::{Column, button, column, container, text, text_input},
};
use iced_widget::container::bordered_box;

use crate::{
    core::{AppState, ProjectId, SearchState},
    gui::components::{Component, ComponentMessage},
};

#[derive(Debug, Clone, Default)]
pub struct SearchBar {
    search: SearchState,
}

#[derive(Debug, Clone)]
pub enum SearchBarMessage {
    QueryChanged(String),
    Select(ProjectId),
}

impl SearchBar {
    pub fn state(&self) -> &SearchState {
        &self.search
    }

    pub fn refresh(&mut self, state: &AppState) {
        self.search.refresh(state.projects.as_slice());
    }
}

impl Component for SearchBar {
    type Message = SearchBarMessage;
    type ParentMessage = Infallible;

    fn view<'a>(&'a self, _state: &'a AppState) -> Element<'a, ComponentMessage<Self>> {
        let input = text_input("Buscar proyectos...", self.search.query())
            .on_input(|query| ComponentMessage::Local(SearchBarMessage::QueryChanged(query)))
            .padding(8);

        let mut content = column![input].spacing(4);
        if self.search.dropdown_visible() {
            let items = self.search.suggestions().iter().map(
                |project| -> Element<'a, ComponentMessage<Self>> {
                    button(text(project.name.as_str()))
                        .style(button::text)
                        .width(Length::Fill)
                        .on_press(ComponentMessage::Local(SearchBarMessage::Select(project.id)))
                        .into()
                },
            );
            content = content.push(
                container(Column::with_children(items))
                    .style(bordered_box)
                    .width(Length::Fill),
            );
        }
        content.into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ComponentMessage<Self>> {
        match message {
            SearchBarMessage::QueryChanged(query) => {
                self.search.set_query(query, state.projects.as_slice());
            }
            SearchBarMessage::Select(id) => {
                self.search.select(id, state.projects.as_slice());
            }
        }
        Task::none()
    }
}
