use iced::widget::{button, row, text, text_input, Column, Container, Row, Scrollable};
use iced::{Alignment, Center, Length};
use crate::app::state::{Department, DepartmentField};
use crate::app::{App, Message};
use crate::editor::{EditorMessage, RowView};
use super::table;

fn department(msg: EditorMessage<Department>) -> Message {
    Message::Department(msg)
}

fn actions(dept: &Department) -> Row<'static, Message> {
    row![
        button("Edit").on_press(department(EditorMessage::StartEditing(dept.clone()))),
        button("Delete")
            .style(button::danger)
            .on_press(department(EditorMessage::Delete(dept.dept_name.clone()))),
    ]
        .spacing(10)
}

pub fn departments_screen(app: &App) -> Container<Message> {
    let editor = &app.departments;

    let add_row = row![
        text_input("New Department Name", &editor.new_form.dept_name)
            .on_input(|v| department(EditorMessage::NewFieldChanged(DepartmentField::Name, v)))
            .on_submit(department(EditorMessage::SubmitNew))
            .padding(10),
        button("Add").on_press(department(EditorMessage::SubmitNew)),
    ]
        .spacing(10)
        .align_y(Alignment::Center);

    let mut rows = Column::new()
        .spacing(5)
        .push(table::header(&[("Department", 3), ("Actions", 2)]));

    for view in editor.rows() {
        let cells = match view {
            RowView::Record(dept) => Row::new()
                .push(text(&dept.dept_name).width(Length::FillPortion(3)))
                .push(actions(dept).width(Length::FillPortion(2))),
            RowView::Editing(dept) => Row::new()
                .push(
                    text_input("", &editor.edit_form.dept_name)
                        .on_input(|v| department(EditorMessage::EditFieldChanged(DepartmentField::Name, v)))
                        .on_submit(department(EditorMessage::SubmitEdited))
                        .width(Length::FillPortion(3)),
                )
                .push(
                    row![
                        button("Save").on_press(department(EditorMessage::SubmitEdited)),
                        button("Cancel")
                            .style(button::secondary)
                            .on_press(department(EditorMessage::CancelEditing)),
                        button("Delete")
                            .style(button::danger)
                            .on_press(department(EditorMessage::Delete(dept.dept_name.clone()))),
                    ]
                        .spacing(10)
                        .width(Length::FillPortion(2)),
                ),
            RowView::Placeholder(note) => Row::new()
                .push(text(note).width(Length::Fill).align_x(Center)),
        };
        rows = rows.push(table::framed(app, cells));
    }

    let content = Column::new()
        .spacing(15)
        .push(text("Departments").size(30))
        .push(add_row)
        .push(table::error_line(editor.error_message.as_ref()))
        .push(Scrollable::new(rows).height(Length::Fill));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(20)
        .max_width(700.0)
}
