//! Record - Stored CRUD Entity

use std::sync::Arc;

use chrono::{DateTime, Utc};
use super::form::FormValues;

/// Unique identifier for a record
#[derive(Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct RecordId(Arc<str>);

impl RecordId {
    /// Create a RecordId from an existing string
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh id from the current time.
    ///
    /// UUIDv7 carries the millisecond timestamp in its high bits and random
    /// bits below it, so two records created in the same millisecond still
    /// get distinct ids.
    pub fn generate() -> Self {
        Self::new(uuid::Uuid::now_v7().to_string())
    }

    /// Get the underlying string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The editable part of a record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFields {
    /// Display name (non-empty once validated)
    pub name: String,
    /// Category option code
    pub category: String,
    /// Free-text description
    pub description: Option<String>,
    /// Contact email (extended layout only)
    pub email: Option<String>,
    /// Country option code (extended layout only)
    pub country: Option<String>,
}

impl RecordFields {
    /// Build record fields from a draft. Empty optional fields become `None`.
    pub fn from_form(values: &FormValues) -> Self {
        Self {
            name: values.name.clone(),
            category: values.category.clone(),
            description: non_empty(&values.description),
            email: non_empty(&values.email),
            country: non_empty(&values.country),
        }
    }

    /// Copy the fields back into a fresh draft
    pub fn to_form(&self) -> FormValues {
        FormValues {
            name: self.name.clone(),
            category: self.category.clone(),
            description: self.description.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            country: self.country.clone().unwrap_or_default(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// A stored record.
///
/// `id` and `created_at` are fixed at construction; only the editable
/// fields can be replaced afterwards, and only as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    id: RecordId,
    fields: RecordFields,
    created_at: DateTime<Utc>,
}

impl Record {
    /// Create a new record
    pub fn new(id: RecordId, fields: RecordFields, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            fields,
            created_at,
        }
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn fields(&self) -> &RecordFields {
        &self.fields
    }

    pub fn name(&self) -> &str {
        &self.fields.name
    }

    pub fn category(&self) -> &str {
        &self.fields.category
    }

    pub fn description(&self) -> Option<&str> {
        self.fields.description.as_deref()
    }

    /// Replace every editable field at once
    pub(crate) fn replace_fields(&mut self, fields: RecordFields) {
        self.fields = fields;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_distinct() {
        let a = RecordId::generate();
        let b = RecordId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn empty_optional_fields_become_none() {
        let values = FormValues {
            name: "Alpha".into(),
            category: "technology".into(),
            ..Default::default()
        };
        let fields = RecordFields::from_form(&values);
        assert_eq!(fields.description, None);
        assert_eq!(fields.email, None);
        assert_eq!(fields.to_form(), values);
    }

    #[test]
    fn replace_fields_keeps_identity() {
        let created = Utc::now();
        let mut record = Record::new(
            RecordId::from("r1"),
            RecordFields {
                name: "Alpha".into(),
                category: "technology".into(),
                ..Default::default()
            },
            created,
        );
        record.replace_fields(RecordFields {
            name: "Beta".into(),
            category: "health".into(),
            description: Some("changed".into()),
            ..Default::default()
        });
        assert_eq!(record.id().as_str(), "r1");
        assert_eq!(record.created_at(), created);
        assert_eq!(record.name(), "Beta");
        assert_eq!(record.description(), Some("changed"));
    }
}
