use iced::{widget::{column, text, Container}, Length, Center, Theme};
use iced::widget::{button, pick_list, row, text_input};
use crate::app::{App, Message};
use crate::config::theme_to_str;

pub fn settings_screen(app: &App) -> Container<Message> {
    let current_name = theme_to_str(&app.theme);
    let theme_names: Vec<&'static str> = Theme::ALL.iter().map(theme_to_str).collect();

    let timeout = match app.config.request_timeout_secs {
        Some(secs) => format!("Request timeout: {} s", secs),
        None => "Request timeout: none".to_string(),
    };

    let mut content = column![
        text("Settings").size(30),
        text("Theme"),
        pick_list(theme_names, Some(current_name), Message::ThemeSelected)
            .placeholder("Choose a theme"),
        text("Backend URL"),
        row![
            text_input("http://localhost:8001", &app.backend_url_input)
                .on_input(Message::BackendUrlChanged)
                .on_submit(Message::ApplyBackendUrl)
                .width(Length::Fixed(400.0)),
            button("Apply").on_press(Message::ApplyBackendUrl),
        ]
            .spacing(10),
        text(timeout),
    ]
        .spacing(15)
        .align_x(Center);

    if let Some(error) = &app.settings_error {
        content = content.push(text(error).style(text::danger));
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(40)
}
