use iced::widget::container::bordered_box;
use iced::widget::{button, row, text, text_input, Column, Container, Row, Scrollable};
use iced::Length;
use crate::app::state::{Instructor, InstructorField};
use crate::app::{App, Message};
use crate::editor::{EditorMessage, RowView};
use super::table;

fn instructor(msg: EditorMessage<Instructor>) -> Message {
    Message::Instructor(msg)
}

/// Add/edit panel. While editing, the id input is read-only.
fn form_panel(app: &App) -> Container<Message> {
    let editor = &app.instructors;
    let editing = editor.editing.is_some();
    let form = if editing { &editor.edit_form } else { &editor.new_form };
    let field_changed: fn(InstructorField, String) -> EditorMessage<Instructor> =
        if editing { EditorMessage::EditFieldChanged } else { EditorMessage::NewFieldChanged };
    let submit = if editing { EditorMessage::SubmitEdited } else { EditorMessage::SubmitNew };

    let mut id_input = text_input("Enter Instructor ID Number", &form.id_number).padding(8);
    if !editing {
        id_input = id_input.on_input(move |v| instructor(field_changed(InstructorField::IdNumber, v)));
    }

    let panel = Column::new()
        .spacing(10)
        .push(id_input)
        .push(
            text_input("Enter Instructor Name", &form.name)
                .on_input(move |v| instructor(field_changed(InstructorField::Name, v)))
                .padding(8),
        )
        .push(
            text_input("Enter Department", &form.dept)
                .on_input(move |v| instructor(field_changed(InstructorField::Dept, v)))
                .padding(8),
        )
        .push(
            row![
                button(if editing { "Update" } else { "Save" })
                    .style(button::success)
                    .on_press(instructor(submit)),
                button("Cancel")
                    .style(button::danger)
                    .on_press(instructor(EditorMessage::ToggleForm(false))),
            ]
                .spacing(10),
        );

    Container::new(panel)
        .style(move |_| bordered_box(&app.theme))
        .padding(15)
        .width(Length::Fill)
}

fn record_row(record: &Instructor, editing: bool) -> Row<'_, Message> {
    let name = if editing { format!("{} (editing)", record.name) } else { record.name.clone() };
    Row::new()
        .push(text(&record.id_number).width(Length::FillPortion(2)))
        .push(text(name).width(Length::FillPortion(3)))
        .push(text(&record.dept).width(Length::FillPortion(2)))
        .push(
            row![
                button("Edit").on_press(instructor(EditorMessage::StartEditing(record.clone()))),
                button("Delete")
                    .style(button::danger)
                    .on_press(instructor(EditorMessage::Delete(record.id_number.clone()))),
            ]
                .spacing(10)
                .width(Length::FillPortion(2)),
        )
}

pub fn instructors_screen(app: &App) -> Container<Message> {
    let editor = &app.instructors;

    let mut content = Column::new()
        .spacing(15)
        .push(text("Instructors").size(30))
        .push(button("Add Instructor").on_press(instructor(EditorMessage::ToggleForm(true))));

    if editor.show_form || editor.editing.is_some() {
        content = content.push(form_panel(app));
    }

    let mut rows = Column::new()
        .spacing(5)
        .push(table::header(&[("ID", 2), ("Name", 3), ("Department", 2), ("Actions", 2)]));

    for view in editor.rows() {
        let cells = match view {
            RowView::Record(record) => record_row(record, false),
            RowView::Editing(record) => record_row(record, true),
            RowView::Placeholder(note) => Row::new().push(text(note)),
        };
        rows = rows.push(table::framed(app, cells));
    }

    content = content
        .push(table::error_line(editor.error_message.as_ref()))
        .push(Scrollable::new(rows).height(Length::Fill));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(20)
}
