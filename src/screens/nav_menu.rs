use iced::{widget::{button, column}, Alignment, Element, Length, Renderer, Theme};
use iced::widget::{text, vertical_space, Container, Row};
use iced_font_awesome::fa_icon_solid;
use crate::app::{App, Message, Screen};

fn icon_button_content<'a>(
    icon_element: impl Into<Element<'a, Message, Theme, Renderer>>,
    label: &'a str,
) -> Row<'a, Message> {
    Row::new()
        .align_y(Alignment::Center)
        .spacing(5)
        .push(icon_element)
        .push(text(label))
}

fn nav_button<'a>(app: &'a App, icon: &'a str, label: &'a str, screen: Screen, message: Message) -> Element<'a, Message> {
    let content = icon_button_content(
        fa_icon_solid(icon).style(move |_| text::base(&app.theme)),
        label,
    );
    let style = if app.current_screen == screen { button::primary } else { button::secondary };
    button(content)
        .on_press(message)
        .style(style)
        .width(Length::Fill)
        .into()
}

pub fn nav_menu(app: &App) -> Container<Message> {
    let content = column![
        nav_button(app, "house", "Home", Screen::Home, Message::GoToHome),
        nav_button(app, "chalkboard-user", "Instructor", Screen::Instructors, Message::GoToInstructors),
        nav_button(app, "book", "Subjects", Screen::Subjects, Message::GoToSubjects),
        nav_button(app, "building-columns", "Department", Screen::Departments, Message::GoToDepartments),
        nav_button(app, "calendar-days", "Timetable", Screen::Timetable, Message::GoToTimetable),
        vertical_space(),
        nav_button(app, "gear", "Settings", Screen::Settings, Message::GoToSettings),
    ]
        .spacing(10);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(10)
}
