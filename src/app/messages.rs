use std::path::PathBuf;
use crate::app::state::{Department, Instructor};
use crate::editor::EditorMessage;
use crate::upload::UploadTarget;

#[derive(Debug, Clone)]
pub enum Message {
    GoToHome,
    GoToInstructors,
    GoToSubjects,
    GoToDepartments,
    GoToTimetable,
    GoToSettings,
    GreetingLoaded(Result<String, String>),
    //
    Department(EditorMessage<Department>),
    Instructor(EditorMessage<Instructor>),
    // Upload
    UploadTargetSelected(UploadTarget),
    ChooseUploadFile,
    UploadFileChosen(Option<PathBuf>),
    UploadPressed,
    UploadFinished(Result<String, String>),
    AlertClosed,
    // Settings
    ThemeSelected(&'static str),
    BackendUrlChanged(String),
    ApplyBackendUrl,
}
