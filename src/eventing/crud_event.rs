//! CrudEvent - Inbound Events from the Form and Table Surfaces

use crate::domain::{FieldName, RecordId};

/// Everything the form and table surfaces can ask the screen to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrudEvent {
    /// A text input changed
    FieldChanged { field: FieldName, value: String },

    /// The category select changed
    CategoryChanged(String),

    /// The Create/Update button was pressed
    SubmitRequested,

    /// The Cancel button was pressed
    CancelRequested,

    /// A table row's edit action was pressed
    EditRequested(RecordId),

    /// A table row's delete action was pressed
    DeleteRequested(RecordId),
}

impl CrudEvent {
    /// Create a field change event
    pub fn field(field: FieldName, value: impl Into<String>) -> Self {
        Self::FieldChanged {
            field,
            value: value.into(),
        }
    }
}
