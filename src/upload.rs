use std::fmt;
use std::path::PathBuf;
use tracing::error;

/// Ingestion endpoint a spreadsheet is posted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadTarget {
    #[default]
    Instructors,
    Departments,
    Subjects,
}

impl UploadTarget {
    pub const ALL: &'static [UploadTarget] = &[
        UploadTarget::Instructors,
        UploadTarget::Departments,
        UploadTarget::Subjects,
    ];

    pub fn endpoint(self) -> &'static str {
        match self {
            UploadTarget::Instructors => "upload",
            UploadTarget::Departments => "upload_departments",
            UploadTarget::Subjects => "upload_subjects",
        }
    }
}

impl fmt::Display for UploadTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", match self {
            UploadTarget::Instructors => "Instructor Data",
            UploadTarget::Departments => "Department Data",
            UploadTarget::Subjects => "Subject Data",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Info,
    Warning,
    Error,
}

/// Blocking message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub level: AlertLevel,
    pub description: String,
}

impl Alert {
    fn new(level: AlertLevel, description: impl Into<String>) -> Self {
        Self { level, description: description.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub target: UploadTarget,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default)]
pub struct UploadWidget {
    pub target: UploadTarget,
    pub file: Option<PathBuf>,
}

impl UploadWidget {
    /// A cancelled picker keeps the previous selection.
    pub fn select(&mut self, picked: Option<PathBuf>) {
        if let Some(path) = picked {
            self.file = Some(path);
        }
    }

    pub fn file_label(&self) -> String {
        self.file
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "No file chosen".to_string())
    }

    pub fn submit(&self) -> Result<UploadRequest, Alert> {
        match &self.file {
            Some(path) => Ok(UploadRequest { target: self.target, path: path.clone() }),
            None => Err(Alert::new(AlertLevel::Warning, "Please choose a file first.")),
        }
    }

    pub fn finished(&self, result: Result<String, String>) -> Alert {
        match result {
            Ok(message) => Alert::new(AlertLevel::Info, format!("File uploaded successfully: {}", message)),
            Err(e) => {
                error!(endpoint = self.target.endpoint(), error = %e, "error uploading file");
                Alert::new(AlertLevel::Error, "Error uploading file, please try again.")
            }
        }
    }
}
