use iced::Theme;
use serde::{Deserialize, Serialize};
use crate::api::Api;
use crate::config::Config;
use crate::editor::{Resource, ResourceEditor};
use crate::upload::UploadWidget;

pub struct App {
    pub current_screen: Screen,
    pub theme: Theme,
    pub config: Config,
    pub api: Api,
    /// `None` until the first reply from `GET /` arrives.
    pub backend_greeting: Option<Result<String, String>>,
    pub upload: UploadWidget,
    pub departments: ResourceEditor<Department>,
    pub instructors: ResourceEditor<Instructor>,
    // Settings
    pub backend_url_input: String,
    pub settings_error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Instructors,
    Subjects,
    Departments,
    Timetable,
    Settings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub dept_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentForm {
    pub dept_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartmentField {
    Name,
}

impl Resource for Department {
    type Field = DepartmentField;
    type Form = DepartmentForm;

    const COLLECTION: &'static str = "departments";
    const NOUN: &'static str = "department";
    const EMPTY_PLACEHOLDER: Option<&'static str> = Some("No departments found.");
    const KEY_FIELD: DepartmentField = DepartmentField::Name;
    const KEY_EDITABLE: bool = true;

    fn key(&self) -> &str {
        &self.dept_name
    }

    fn to_form(&self) -> DepartmentForm {
        DepartmentForm { dept_name: self.dept_name.clone() }
    }

    fn set_field(form: &mut DepartmentForm, field: DepartmentField, value: String) {
        match field {
            DepartmentField::Name => form.dept_name = value,
        }
    }

    fn from_form(form: &DepartmentForm) -> Option<Self> {
        if form.dept_name.trim().is_empty() {
            return None;
        }
        Some(Department { dept_name: form.dept_name.clone() })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    pub id_number: String,
    pub name: String,
    pub dept: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstructorForm {
    pub id_number: String,
    pub name: String,
    pub dept: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructorField {
    IdNumber,
    Name,
    Dept,
}

impl Resource for Instructor {
    type Field = InstructorField;
    type Form = InstructorForm;

    // The backend serves this collection under the singular name.
    const COLLECTION: &'static str = "instructor";
    const NOUN: &'static str = "instructor";
    const EMPTY_PLACEHOLDER: Option<&'static str> = None;
    const KEY_FIELD: InstructorField = InstructorField::IdNumber;
    const KEY_EDITABLE: bool = false;

    fn key(&self) -> &str {
        &self.id_number
    }

    fn to_form(&self) -> InstructorForm {
        InstructorForm {
            id_number: self.id_number.clone(),
            name: self.name.clone(),
            dept: self.dept.clone(),
        }
    }

    fn set_field(form: &mut InstructorForm, field: InstructorField, value: String) {
        match field {
            InstructorField::IdNumber => form.id_number = value,
            InstructorField::Name => form.name = value,
            InstructorField::Dept => form.dept = value,
        }
    }

    fn from_form(form: &InstructorForm) -> Option<Self> {
        let blank = [&form.id_number, &form.name, &form.dept]
            .iter()
            .any(|v| v.trim().is_empty());
        if blank {
            return None;
        }
        Some(Instructor {
            id_number: form.id_number.clone(),
            name: form.name.clone(),
            dept: form.dept.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instructor_deserializes_backend_shape() {
        let body = r#"[{"id_number":"I-7","name":"Grace Hopper","dept":"CS"}]"#;
        let parsed: Vec<Instructor> = serde_json::from_str(body).unwrap();
        assert_eq!(parsed[0].key(), "I-7");
        assert_eq!(parsed[0].name, "Grace Hopper");
    }

    #[test]
    fn department_update_body_carries_new_name() {
        let form = DepartmentForm { dept_name: "Physics".into() };
        let record = Department::from_form(&form).unwrap();
        assert_eq!(serde_json::to_value(&record).unwrap(), serde_json::json!({ "dept_name": "Physics" }));
    }
}
