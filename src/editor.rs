use std::fmt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error};

/// A backend-owned record that can be listed, created, updated and deleted
/// through one REST collection.
pub trait Resource:
    Clone + fmt::Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    type Field: Copy + fmt::Debug + PartialEq + Send + Sync + 'static;
    type Form: Default + Clone + fmt::Debug + PartialEq + Send + Sync + 'static;

    /// Path segment of the collection, e.g. `departments`.
    const COLLECTION: &'static str;
    const NOUN: &'static str;
    /// Row shown instead of an empty body. `None` renders the header only.
    const EMPTY_PLACEHOLDER: Option<&'static str>;
    const KEY_FIELD: Self::Field;
    /// Whether the key may change through an update (a rename).
    const KEY_EDITABLE: bool;

    fn key(&self) -> &str;
    fn to_form(&self) -> Self::Form;
    fn set_field(form: &mut Self::Form, field: Self::Field, value: String);
    /// Builds a record from the form, or `None` if a required field is blank after trimming.
    fn from_form(form: &Self::Form) -> Option<Self>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Write {
    Create,
    Update,
    Delete,
}

impl fmt::Display for Write {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", match self {
            Write::Create => "add",
            Write::Update => "update",
            Write::Delete => "delete",
        })
    }
}

/// A backend call the editor wants issued.
#[derive(Debug, Clone, PartialEq)]
pub enum Request<R> {
    List,
    Create(R),
    Update { key: String, record: R },
    Delete(String),
}

impl<R> Request<R> {
    pub fn write(&self) -> Option<Write> {
        match self {
            Request::List => None,
            Request::Create(_) => Some(Write::Create),
            Request::Update { .. } => Some(Write::Update),
            Request::Delete(_) => Some(Write::Delete),
        }
    }
}

#[derive(Debug, Clone)]
pub enum EditorMessage<R: Resource> {
    Load,
    Loaded(Result<Vec<R>, String>),
    ToggleForm(bool),
    NewFieldChanged(R::Field, String),
    SubmitNew,
    StartEditing(R),
    EditFieldChanged(R::Field, String),
    SubmitEdited,
    CancelEditing,
    Delete(String),
    Written(Write, Result<(), String>),
}

#[derive(Debug, PartialEq)]
pub enum RowView<'a, R> {
    Record(&'a R),
    Editing(&'a R),
    Placeholder(&'static str),
}

/// List plus inline create/edit/delete bound to one backend collection.
///
/// Writes never touch `records`; every successful write asks for a full
/// refetch instead.
#[derive(Debug, Clone)]
pub struct ResourceEditor<R: Resource> {
    pub records: Vec<R>,
    pub new_form: R::Form,
    pub show_form: bool,
    pub editing: Option<String>,
    pub edit_form: R::Form,
    pub error_message: Option<String>,
}

impl<R: Resource> Default for ResourceEditor<R> {
    fn default() -> Self {
        Self {
            records: vec![],
            new_form: R::Form::default(),
            show_form: false,
            editing: None,
            edit_form: R::Form::default(),
            error_message: None,
        }
    }
}

impl<R: Resource> ResourceEditor<R> {
    pub fn update(&mut self, message: EditorMessage<R>) -> Option<Request<R>> {
        match message {
            EditorMessage::Load => Some(Request::List),
            EditorMessage::Loaded(result) => {
                self.loaded(result);
                None
            }
            EditorMessage::ToggleForm(show) => {
                self.show_form = show;
                if !show {
                    self.cancel_edit();
                }
                None
            }
            EditorMessage::NewFieldChanged(field, value) => {
                R::set_field(&mut self.new_form, field, value);
                None
            }
            EditorMessage::SubmitNew => self.submit_new(),
            EditorMessage::StartEditing(record) => {
                self.begin_edit(&record);
                None
            }
            EditorMessage::EditFieldChanged(field, value) => {
                if R::KEY_EDITABLE || field != R::KEY_FIELD {
                    R::set_field(&mut self.edit_form, field, value);
                }
                None
            }
            EditorMessage::SubmitEdited => self.submit_edit(),
            EditorMessage::CancelEditing => {
                self.cancel_edit();
                None
            }
            EditorMessage::Delete(key) => Some(Request::Delete(key)),
            EditorMessage::Written(write, result) => self.written(write, result),
        }
    }

    fn loaded(&mut self, result: Result<Vec<R>, String>) {
        match result {
            Ok(records) => {
                debug!(collection = R::COLLECTION, count = records.len(), "collection loaded");
                self.records = records;
                self.error_message = None;
            }
            Err(e) => {
                error!(collection = R::COLLECTION, error = %e, "error fetching {}s", R::NOUN);
                self.error_message = Some(format!("Error fetching {}s: {}", R::NOUN, e));
            }
        }
    }

    fn submit_new(&mut self) -> Option<Request<R>> {
        R::from_form(&self.new_form).map(Request::Create)
    }

    pub fn begin_edit(&mut self, record: &R) {
        self.editing = Some(record.key().to_string());
        self.edit_form = record.to_form();
    }

    fn submit_edit(&mut self) -> Option<Request<R>> {
        let key = self.editing.clone()?;
        let record = R::from_form(&self.edit_form)?;
        Some(Request::Update { key, record })
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.edit_form = R::Form::default();
    }

    fn written(&mut self, write: Write, result: Result<(), String>) -> Option<Request<R>> {
        if let Err(e) = result {
            error!(collection = R::COLLECTION, error = %e, "failed to {} {}", write, R::NOUN);
            self.error_message = Some(format!("Failed to {} {}: {}", write, R::NOUN, e));
            return None;
        }
        match write {
            Write::Create => {
                self.new_form = R::Form::default();
                self.show_form = false;
            }
            Write::Update => self.cancel_edit(),
            Write::Delete => {}
        }
        Some(Request::List)
    }

    pub fn is_editing(&self, record: &R) -> bool {
        self.editing.as_deref() == Some(record.key())
    }

    pub fn rows(&self) -> Vec<RowView<'_, R>> {
        if self.records.is_empty() {
            return R::EMPTY_PLACEHOLDER.map(RowView::Placeholder).into_iter().collect();
        }
        self.records
            .iter()
            .map(|r| if self.is_editing(r) { RowView::Editing(r) } else { RowView::Record(r) })
            .collect()
    }
}
