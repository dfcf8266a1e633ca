use iced::Task;
use tokio::task;
use tracing::{error, info};
use crate::api::{validate_base_url, Api};
use crate::app::state::Screen;
use crate::config::{load_config, save_config, theme_from_str, Config};
use crate::editor::{EditorMessage, Request, Resource, ResourceEditor};
use crate::upload::{Alert, AlertLevel, UploadWidget};
use super::{App, Message};

impl App {
    pub fn new() -> (Self, Task<Message>) {
        let app = Self::with_config(load_config());
        info!(backend = app.api.base_url(), "starting");
        let greeting = app.load_greeting();
        (app, greeting)
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            current_screen: Screen::default(),
            theme: config.theme(),
            api: Api::new(config.backend_url.clone(), config.request_timeout()),
            backend_url_input: config.backend_url.clone(),
            config,
            backend_greeting: None,
            upload: UploadWidget::default(),
            departments: ResourceEditor::default(),
            instructors: ResourceEditor::default(),
            settings_error: None,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::GoToHome => {
                self.current_screen = Screen::Home;
                Task::none()
            }
            Message::GoToInstructors => {
                self.current_screen = Screen::Instructors;
                self.update(Message::Instructor(EditorMessage::Load))
            }
            Message::GoToSubjects => {
                self.current_screen = Screen::Subjects;
                Task::none()
            }
            Message::GoToDepartments => {
                self.current_screen = Screen::Departments;
                self.update(Message::Department(EditorMessage::Load))
            }
            Message::GoToTimetable => {
                self.current_screen = Screen::Timetable;
                Task::none()
            }
            Message::GoToSettings => {
                self.current_screen = Screen::Settings;
                self.backend_url_input = self.config.backend_url.clone();
                self.settings_error = None;
                Task::none()
            }
            Message::GreetingLoaded(result) => {
                if let Err(e) = &result {
                    error!(backend = self.api.base_url(), error = %e, "backend did not answer");
                }
                self.backend_greeting = Some(result);
                Task::none()
            }
            Message::Department(msg) => match self.departments.update(msg) {
                Some(request) => self.perform(request, Message::Department),
                None => Task::none(),
            },
            Message::Instructor(msg) => match self.instructors.update(msg) {
                Some(request) => self.perform(request, Message::Instructor),
                None => Task::none(),
            },
            Message::UploadTargetSelected(target) => {
                self.upload.target = target;
                Task::none()
            }
            Message::ChooseUploadFile => Task::perform(
                async {
                    task::spawn_blocking(|| {
                        rfd::FileDialog::new()
                            .set_title("Choose a file to upload")
                            .pick_file()
                    })
                    .await
                    .unwrap_or_else(|join_err| {
                        error!(error = ?join_err, "file picker task failed");
                        None
                    })
                },
                Message::UploadFileChosen,
            ),
            Message::UploadFileChosen(picked) => {
                self.upload.select(picked);
                Task::none()
            }
            Message::UploadPressed => match self.upload.submit() {
                Ok(request) => {
                    let api = self.api.clone();
                    Task::perform(
                        async move {
                            api.upload(request.target, &request.path)
                                .await
                                .map_err(|e| e.to_string())
                        },
                        Message::UploadFinished,
                    )
                }
                Err(alert) => show_alert(alert),
            },
            Message::UploadFinished(result) => show_alert(self.upload.finished(result)),
            Message::AlertClosed => Task::none(),
            Message::ThemeSelected(name) => {
                if let Some(theme) = theme_from_str(name) {
                    self.theme = theme;
                    self.config.theme_name = name.to_string();
                    self.persist_config();
                }
                Task::none()
            }
            Message::BackendUrlChanged(v) => {
                self.backend_url_input = v;
                Task::none()
            }
            Message::ApplyBackendUrl => {
                let candidate = self.backend_url_input.trim().to_string();
                if let Err(e) = validate_base_url(&candidate) {
                    self.settings_error = Some(e.to_string());
                    return Task::none();
                }
                self.settings_error = None;
                self.config.backend_url = candidate;
                self.api = Api::new(self.config.backend_url.clone(), self.config.request_timeout());
                self.persist_config();
                info!(backend = self.api.base_url(), "backend changed");
                self.backend_greeting = None;
                self.load_greeting()
            }
        }
    }

    fn perform<R: Resource>(&self, request: Request<R>, wrap: fn(EditorMessage<R>) -> Message) -> Task<Message> {
        let api = self.api.clone();
        match request.write() {
            None => Task::perform(
                async move { api.list::<R>().await.map_err(|e| e.to_string()) },
                move |result| wrap(EditorMessage::Loaded(result)),
            ),
            Some(write) => Task::perform(
                async move { api.write(request).await.map_err(|e| e.to_string()) },
                move |result| wrap(EditorMessage::Written(write, result)),
            ),
        }
    }

    fn load_greeting(&self) -> Task<Message> {
        let api = self.api.clone();
        Task::perform(
            async move { api.greeting().await.map_err(|e| e.to_string()) },
            Message::GreetingLoaded,
        )
    }

    fn persist_config(&mut self) {
        if let Err(e) = save_config(&self.config) {
            error!(error = %e, "failed to save settings");
            self.settings_error = Some(format!("Failed to save settings: {}", e));
        }
    }
}

fn show_alert(alert: Alert) -> Task<Message> {
    Task::perform(
        async move {
            let shown = task::spawn_blocking(move || {
                rfd::MessageDialog::new()
                    .set_title("Weekly Timetable Generator")
                    .set_description(alert.description)
                    .set_level(match alert.level {
                        AlertLevel::Info => rfd::MessageLevel::Info,
                        AlertLevel::Warning => rfd::MessageLevel::Warning,
                        AlertLevel::Error => rfd::MessageLevel::Error,
                    })
                    .set_buttons(rfd::MessageButtons::Ok)
                    .show();
            })
            .await;
            if let Err(join_err) = shown {
                error!(error = ?join_err, "alert dialog task failed");
            }
        },
        |_| Message::AlertClosed,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{Department, DepartmentField};
    use crate::config::DEFAULT_BACKEND_URL;

    #[test]
    fn navigation_switches_screens() {
        let mut app = App::with_config(Config::default());
        assert_eq!(app.current_screen, Screen::Home);
        let _ = app.update(Message::GoToDepartments);
        assert_eq!(app.current_screen, Screen::Departments);
        let _ = app.update(Message::GoToSubjects);
        assert_eq!(app.current_screen, Screen::Subjects);
    }

    #[test]
    fn editor_messages_reach_their_editor() {
        let mut app = App::with_config(Config::default());
        let _ = app.update(Message::Department(EditorMessage::NewFieldChanged(DepartmentField::Name, "CS".into())));
        let _ = app.update(Message::Department(EditorMessage::Loaded(Ok(vec![Department { dept_name: "EE".into() }]))));
        assert_eq!(app.departments.new_form.dept_name, "CS");
        assert_eq!(app.departments.records.len(), 1);
        assert!(app.instructors.records.is_empty());
    }

    #[test]
    fn rejected_backend_url_is_not_applied() {
        let mut app = App::with_config(Config::default());
        let _ = app.update(Message::BackendUrlChanged("   ".into()));
        let _ = app.update(Message::ApplyBackendUrl);
        assert!(app.settings_error.is_some());
        assert_eq!(app.config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(app.api.base_url(), DEFAULT_BACKEND_URL);
    }

    #[test]
    fn failed_greeting_is_kept_for_display() {
        let mut app = App::with_config(Config::default());
        let _ = app.update(Message::GreetingLoaded(Err("connection refused".into())));
        assert_eq!(app.backend_greeting, Some(Err("connection refused".to_string())));
    }
}
