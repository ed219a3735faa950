use iced::{
    Color, Element, Length, Theme, border,
    widget::{Column, column, container, container::Style, keyed_column, row, stack, text},
};
use iced_widget::container::bordered_box;

use crate::core::{Project, ProjectId, SUCCESS_MESSAGE};

/// Sidebar entries. Only shown, never navigated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Dashboard,
    Projects,
    Tasks,
    Team,
}

impl NavItem {
    pub const ALL: [NavItem; 4] = [
        NavItem::Dashboard,
        NavItem::Projects,
        NavItem::Tasks,
        NavItem::Team,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NavItem::Dashboard => "Dashboard",
            NavItem::Projects => "Proyectos",
            NavItem::Tasks => "Tareas",
            NavItem::Team => "Equipo",
        }
    }

    fn style(self, active: Self) -> impl Fn(&Theme) -> Style {
        move |theme: &Theme| {
            let style = bordered_box(theme).border(border::width(0));
            // active entry gets a darkened background
            if self == active {
                let mut color_rgba = theme.palette().background.into_rgba8();
                color_rgba[0] /= 2;
                color_rgba[1] /= 2;
                color_rgba[2] /= 2;
                style.background(Color::from_rgb8(color_rgba[0], color_rgba[1], color_rgba[2]))
            } else {
                style.background(theme.palette().background)
            }
        }
    }
}

fn header<'a, Message: 'a>() -> Element<'a, Message> {
    container(text("Gestión de Proyectos").size(28))
        .style(container::dark)
        .padding(16)
        .width(Length::Fill)
        .into()
}

fn sidebar<'a, Message: 'a>(active: NavItem) -> Element<'a, Message> {
    let items = NavItem::ALL.into_iter().map(|item| -> Element<'a, Message> {
        container(text(item.label()))
            .style(item.style(active))
            .padding(10)
            .width(Length::Fill)
            .into()
    });
    container(Column::with_children(items).spacing(4))
        .style(bordered_box)
        .padding(16)
        .width(Length::Fixed(256.0))
        .height(Length::Fill)
        .into()
}

fn card_style(highlighted: bool) -> impl Fn(&Theme) -> Style {
    move |theme: &Theme| {
        let style = bordered_box(theme).border(border::rounded(4));
        if highlighted {
            style.border(border::rounded(4).color(theme.palette().primary).width(2))
        } else {
            style
        }
    }
}

pub fn project_card<'a, Message: 'a>(
    project: &'a Project,
    highlighted: bool,
) -> Element<'a, Message> {
    container(
        column![
            text(project.name.as_str()).size(20),
            text(project.description.as_str()),
        ]
        .spacing(8),
    )
    .style(card_style(highlighted))
    .padding(16)
    .width(Length::Fill)
    .into()
}

/// Cards keyed by project id, so widget state follows the project rather
/// than its position.
pub fn project_list<'a, Message: 'a>(
    projects: &'a [Project],
    highlighted: Option<ProjectId>,
) -> Element<'a, Message> {
    keyed_column(projects.iter().map(|project| {
        (
            project.id.get(),
            project_card(project, highlighted == Some(project.id)),
        )
    }))
    .spacing(16)
    .into()
}

fn toast_style(theme: &Theme) -> Style {
    let palette = theme.extended_palette();
    Style {
        text_color: Some(palette.success.base.text),
        background: Some(palette.success.base.color.into()),
        border: border::rounded(4),
        ..Style::default()
    }
}

fn toast<'a, Message: 'a>() -> Element<'a, Message> {
    container(text(SUCCESS_MESSAGE))
        .style(toast_style)
        .padding(16)
        .into()
}

/// Page chrome: sidebar, header, the main content and the success toast in
/// the bottom-right corner.
pub fn layout<'a, Message>(
    main_content: impl Into<Element<'a, Message>>,
    active: NavItem,
    show_toast: bool,
) -> Element<'a, Message>
where
    Message: 'a,
{
    let page = row![
        sidebar(active),
        column![header(), container(main_content.into()).height(Length::Fill)]
            .width(Length::Fill),
    ];

    let mut layers = stack![page];
    if show_toast {
        layers = layers.push(
            container(toast())
                .align_right(Length::Fill)
                .align_bottom(Length::Fill)
                .padding(16),
        );
    }
    layers.width(Length::Fill).height(Length::Fill).into()
}
