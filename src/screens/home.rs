use iced::widget::container::bordered_box;
use iced::widget::{button, column, pick_list, row, text, Container};
use iced::{Alignment, Length};
use crate::app::{App, Message};
use crate::upload::UploadTarget;

fn backend_status(app: &App) -> String {
    match &app.backend_greeting {
        None => format!("Connecting to {}...", app.api.base_url()),
        Some(Ok(message)) => message.clone(),
        Some(Err(_)) => format!("Backend unreachable at {}", app.api.base_url()),
    }
}

pub fn home_screen(app: &App) -> Container<Message> {
    let upload = column![
        text(format!("Upload {}", app.upload.target)).size(24),
        pick_list(UploadTarget::ALL, Some(app.upload.target), Message::UploadTargetSelected)
            .placeholder("What are you uploading?"),
        row![
            button("Choose file").on_press(Message::ChooseUploadFile),
            text(app.upload.file_label()),
        ]
            .spacing(10)
            .align_y(Alignment::Center),
        button("Upload").on_press(Message::UploadPressed),
    ]
        .spacing(15);

    let content = column![
        text("Home").size(30),
        text(backend_status(app)),
        Container::new(upload)
            .style(move |_| bordered_box(&app.theme))
            .padding(20)
            .width(Length::Fill),
    ]
        .spacing(20);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(40)
}
