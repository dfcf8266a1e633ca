use iced::widget::{column, text, Container};
use iced::Length;
use crate::app::{App, Message};

// Generation runs on the scheduling service; there is no client-side call for it yet.
pub fn timetable_screen(_app: &App) -> Container<Message> {
    Container::new(column![
        text("Timetable").size(30),
        text("Timetables are generated by the scheduling service from the instructors, departments and subjects entered here."),
    ].spacing(10))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(40)
}
