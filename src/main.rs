mod api;
mod app;
mod config;
mod editor;
mod screens;
mod upload;

use app::App;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("timetable_desk=info,warn")),
        )
        .init();

    iced::application("Weekly Timetable Generator", App::update, App::view)
        .theme(|app: &App| app.theme.clone())
        .window_size(iced::Size::new(1200.0, 800.0))
        .run_with(App::new)
}
