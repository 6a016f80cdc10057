//! RecordStore - Single Source of Truth for One CRUD Screen
//!
//! Holds the record collection, the draft form values, the editing target
//! and the submission-in-progress flag. Side effects stay inside these
//! in-memory containers.

use hashlink::LinkedHashMap;

use crate::components::data_table::DataProvider;
use crate::domain::{FormValues, Record, RecordFields, RecordId};
use crate::error::{Error, Result};

/// Which record, if any, the draft is editing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditingTarget {
    /// No record selected; submit creates a new one
    #[default]
    Creating,
    /// Submit replaces the fields of this record
    Editing(RecordId),
}

impl EditingTarget {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditingTarget::Editing(_))
    }

    /// Id of the edited record
    pub fn record_id(&self) -> Option<&RecordId> {
        match self {
            EditingTarget::Creating => None,
            EditingTarget::Editing(id) => Some(id),
        }
    }
}

/// State for one CRUD screen
#[derive(Debug, Default)]
pub struct RecordStore {
    /// Records keyed by id, in insertion order
    records: LinkedHashMap<RecordId, Record>,
    /// Current draft
    form: FormValues,
    /// Create vs. update mode
    editing: EditingTarget,
    /// Whether a submission is in flight
    submitting: bool,
}

impl RecordStore {
    /// Create an empty store with an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Records ====================

    /// Records in insertion order
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Clone the records in insertion order
    pub fn snapshot(&self) -> Vec<Record> {
        self.records.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.records.get(id)
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.records.contains_key(id)
    }

    /// Append a record; fails if the id is already taken
    pub fn add_record(&mut self, record: Record) -> Result<()> {
        if self.records.contains_key(record.id()) {
            return Err(Error::DuplicateKey {
                id: record.id().clone(),
            });
        }
        self.records.insert(record.id().clone(), record);
        Ok(())
    }

    /// Replace the editable fields of a record in place
    pub fn replace_record(&mut self, id: &RecordId, fields: RecordFields) -> Result<()> {
        let record = self
            .records
            .get_mut(id)
            .ok_or_else(|| Error::NotFound { id: id.clone() })?;
        record.replace_fields(fields);
        Ok(())
    }

    /// Remove a record. Removing an unknown id is a no-op.
    ///
    /// Removing the edited record also returns the draft to create mode.
    pub fn remove_record(&mut self, id: &RecordId) -> Option<Record> {
        let removed = self.records.remove(id);
        if self.editing.record_id() == Some(id) {
            self.clear_editing();
        }
        removed
    }

    // ==================== Draft ====================

    pub fn form_values(&self) -> &FormValues {
        &self.form
    }

    /// Replace the whole draft
    pub fn set_form_values(&mut self, values: FormValues) {
        self.form = values;
    }

    /// Reset the draft to all-empty
    pub fn reset_form(&mut self) {
        self.form = FormValues::default();
    }

    // ==================== Editing target ====================

    pub fn editing_target(&self) -> &EditingTarget {
        &self.editing
    }

    /// Point the draft at a record, or back to create mode.
    ///
    /// The target must name a record currently in the store.
    pub fn set_editing_target(&mut self, target: EditingTarget) -> Result<()> {
        if let EditingTarget::Editing(id) = &target {
            if !self.records.contains_key(id) {
                return Err(Error::NotFound { id: id.clone() });
            }
        }
        self.editing = target;
        Ok(())
    }

    /// Back to create mode with an empty draft
    pub fn clear_editing(&mut self) {
        self.editing = EditingTarget::Creating;
        self.form = FormValues::default();
    }

    // ==================== Submission flag ====================

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }
}

/// The records table reads rows straight from the store
impl DataProvider for RecordStore {
    type Row = Record;

    fn len(&self) -> usize {
        self.records.len()
    }

    fn rows(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(id: &str, name: &str) -> Record {
        Record::new(
            RecordId::from(id),
            RecordFields {
                name: name.to_string(),
                category: "technology".to_string(),
                ..Default::default()
            },
            Utc::now(),
        )
    }

    #[test]
    fn records_keep_insertion_order() {
        let mut store = RecordStore::new();
        store.add_record(record("b", "Beta")).expect("add");
        store.add_record(record("a", "Alpha")).expect("add");
        store.add_record(record("c", "Gamma")).expect("add");

        let names: Vec<_> = store.records().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Beta", "Alpha", "Gamma"]);
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut store = RecordStore::new();
        store.add_record(record("a", "Alpha")).expect("add");
        let result = store.add_record(record("a", "Other"));
        assert!(matches!(result, Err(Error::DuplicateKey { id }) if id.as_str() == "a"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.records().next().map(|r| r.name()), Some("Alpha"));
    }

    #[test]
    fn replace_keeps_position_and_identity() {
        let mut store = RecordStore::new();
        store.add_record(record("a", "Alpha")).expect("add");
        store.add_record(record("b", "Beta")).expect("add");
        let created = store.get(&RecordId::from("a")).map(|r| r.created_at());

        store
            .replace_record(
                &RecordId::from("a"),
                RecordFields {
                    name: "Alpha 2".into(),
                    category: "health".into(),
                    ..Default::default()
                },
            )
            .expect("replace");

        let first = store.records().next().expect("first");
        assert_eq!(first.id().as_str(), "a");
        assert_eq!(first.name(), "Alpha 2");
        assert_eq!(Some(first.created_at()), created);
    }

    #[test]
    fn replace_unknown_is_not_found() {
        let mut store = RecordStore::new();
        let result = store.replace_record(&RecordId::from("zzz"), RecordFields::default());
        assert!(matches!(result, Err(Error::NotFound { .. })));
    }

    #[test]
    fn remove_is_idempotent() {
        let mut store = RecordStore::new();
        store.add_record(record("a", "Alpha")).expect("add");
        assert!(store.remove_record(&RecordId::from("a")).is_some());
        assert!(store.remove_record(&RecordId::from("a")).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn removing_edited_record_clears_editing() {
        let mut store = RecordStore::new();
        store.add_record(record("a", "Alpha")).expect("add");
        store.add_record(record("b", "Beta")).expect("add");
        store
            .set_editing_target(EditingTarget::Editing(RecordId::from("a")))
            .expect("target");
        store.set_form_values(FormValues {
            name: "Alpha 2".into(),
            ..Default::default()
        });

        store.remove_record(&RecordId::from("b"));
        assert_eq!(
            store.editing_target(),
            &EditingTarget::Editing(RecordId::from("a"))
        );
        assert_eq!(store.form_values().name, "Alpha 2");

        store.remove_record(&RecordId::from("a"));
        assert_eq!(store.editing_target(), &EditingTarget::Creating);
        assert!(store.form_values().is_empty());
        assert!(!store.contains(&RecordId::from("a")));
    }

    #[test]
    fn editing_target_must_exist() {
        let mut store = RecordStore::new();
        let result = store.set_editing_target(EditingTarget::Editing(RecordId::from("a")));
        assert!(matches!(result, Err(Error::NotFound { .. })));
        assert_eq!(store.editing_target(), &EditingTarget::Creating);

        store.add_record(record("a", "Alpha")).expect("add");
        store
            .set_editing_target(EditingTarget::Editing(RecordId::from("a")))
            .expect("target");
        assert!(store.editing_target().is_editing());
    }

    #[test]
    fn provides_rows_in_insertion_order() {
        let mut store = RecordStore::new();
        store.add_record(record("b", "Beta")).expect("add");
        store.add_record(record("a", "Alpha")).expect("add");

        assert_eq!(DataProvider::len(&store), 2);
        let ids: Vec<_> = DataProvider::rows(&store).map(|r| r.id().as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn new_store_has_empty_draft() {
        let store = RecordStore::new();
        assert!(store.form_values().is_empty());
        assert!(!store.is_submitting());
        assert_eq!(store.editing_target(), &EditingTarget::Creating);
    }
}
