use iced::widget::container::bordered_box;
use iced::widget::{text, Column, Container, Row};
use iced::{Alignment, Length};
use crate::app::{App, Message};

/// Column titles with their `FillPortion` weights.
pub fn header<'a>(columns: &[(&'static str, u16)]) -> Row<'a, Message> {
    columns.iter().fold(Row::new().spacing(10).padding(5), |row, (title, portion)| {
        row.push(text(*title).size(18).width(Length::FillPortion(*portion)))
    })
}

pub fn framed<'a>(app: &'a App, row: Row<'a, Message>) -> Container<'a, Message> {
    Container::new(row.spacing(10).padding(5).align_y(Alignment::Center))
        .style(move |_| bordered_box(&app.theme))
        .width(Length::Fill)
}

pub fn error_line(error: Option<&String>) -> Column<'_, Message> {
    match error {
        Some(e) => Column::new().push(text(e).style(text::danger)),
        None => Column::new(),
    }
}
