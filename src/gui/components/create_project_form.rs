use iced::{
    Element, Length, Task,
    widget::{Column, button, column, text, text_editor, text_input},
};

use crate::{
    core::{AppState, Field, FormState, NewProject},
    gui::components::{Component, ComponentMessage},
};

#[derive(Debug, Default)]
pub struct CreateProjectForm {
    form: FormState,
    description: text_editor::Content,
}

#[derive(Debug, Clone)]
pub enum CreateProjectFormMessage {
    NameChanged(String),
    DescriptionAction(text_editor::Action),
    Submit,
}

#[derive(Debug, Clone)]
pub enum CreateProjectFormParent {
    CreateProject(NewProject),
}

impl CreateProjectForm {
    pub fn state(&self) -> &FormState {
        &self.form
    }

    fn error_text<'a>(&'a self, field: Field) -> Option<Element<'a, ComponentMessage<Self>>> {
        self.form
            .error(field)
            .map(|error| text(error.to_string()).style(text::danger).into())
    }

    fn name_field(&self) -> Column<'_, ComponentMessage<Self>> {
        // Enter in the name submits; the description keeps Enter for new lines
        let input = text_input("", self.form.name())
            .on_input(|name| ComponentMessage::Local(CreateProjectFormMessage::NameChanged(name)))
            .on_submit(ComponentMessage::Local(CreateProjectFormMessage::Submit))
            .padding(8)
            .width(Length::Fill);

        let mut col = column![text("Nombre del Proyecto:"), input].spacing(6);
        if let Some(error) = self.error_text(Field::Name) {
            col = col.push(error);
        }
        col
    }

    fn description_field(&self) -> Column<'_, ComponentMessage<Self>> {
        let editor = text_editor(&self.description)
            .on_action(|action| {
                ComponentMessage::Local(CreateProjectFormMessage::DescriptionAction(action))
            })
            .padding(8)
            .height(Length::Fixed(96.0));

        let mut col = column![text("Descripción:"), editor].spacing(6);
        if let Some(error) = self.error_text(Field::Description) {
            col = col.push(error);
        }
        col
    }
}

impl Component for CreateProjectForm {
    type Message = CreateProjectFormMessage;
    type ParentMessage = CreateProjectFormParent;

    fn view<'a>(&'a self, _state: &'a AppState) -> Element<'a, ComponentMessage<Self>> {
        column![
            self.name_field(),
            self.description_field(),
            button("Crear Proyecto")
                .padding([8, 16])
                .on_press(ComponentMessage::Local(CreateProjectFormMessage::Submit)),
        ]
        .spacing(16)
        .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ComponentMessage<Self>> {
        match message {
            CreateProjectFormMessage::NameChanged(name) => {
                self.form.set_name(name);
                Task::none()
            }
            CreateProjectFormMessage::DescriptionAction(action) => {
                self.description.perform(action);
                self.form.set_description(self.description.text());
                Task::none()
            }
            CreateProjectFormMessage::Submit => match self.form.submit() {
                Ok(new_project) => {
                    self.description = text_editor::Content::new();
                    Task::done(ComponentMessage::Parent(
                        CreateProjectFormParent::CreateProject(new_project),
                    ))
                }
                Err(_) => Task::none(),
            },
        }
    }
}
