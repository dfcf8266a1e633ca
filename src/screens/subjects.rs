use iced::widget::{column, text, Container};
use iced::Length;
use crate::app::{App, Message};

pub fn subjects_screen(_app: &App) -> Container<Message> {
    Container::new(column![
        text("Subjects").size(30),
        text("Add, edit, and organize subjects for different courses."),
    ].spacing(10))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(40)
}
