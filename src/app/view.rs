use iced::Length;
use iced::widget::{column, text, Column, Container, Row};
use crate::app::state::Screen;
use crate::screens::{departments_screen, home_screen, instructors_screen, nav_menu, settings_screen, subjects_screen, timetable_screen};
use super::{App, Message};

impl App {
    pub fn view(&self) -> Column<Message> {
        let header = Container::new(column![
            text("WEEKLY TIMETABLE GENERATOR").size(28),
            text("Create Timetable with a click").size(16),
        ])
            .width(Length::Fill)
            .padding([10, 20]);

        let body = Row::new()
            .spacing(20)
            .push(
                // Sidebar
                Container::new(nav_menu(self))
                    .width(Length::Fixed(200.0))
                    .height(Length::Fill)
                    .padding(10)
            )
            .push(
                match &self.current_screen {
                    Screen::Home => home_screen(self),
                    Screen::Instructors => instructors_screen(self),
                    Screen::Subjects => subjects_screen(self),
                    Screen::Departments => departments_screen(self),
                    Screen::Timetable => timetable_screen(self),
                    Screen::Settings => settings_screen(self),
                }
                    .width(Length::Fill),
            );

        Column::new()
            .push(header)
            .push(body)
    }
}
