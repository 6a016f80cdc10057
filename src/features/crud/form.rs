//! Form Controller
//!
//! Turns field-level edit events into whole-draft updates. No validation
//! happens here; submit validates.

use crate::domain::{FieldName, FormLayout};
use crate::error::{Error, Result};
use crate::state::RecordStore;
use crate::utils::format::clamp_chars;

/// Draft editing for one form layout
#[derive(Debug, Clone, Copy)]
pub struct FormController {
    layout: FormLayout,
    description_max_len: usize,
}

impl FormController {
    /// Create a new controller
    pub fn new(layout: FormLayout, description_max_len: usize) -> Self {
        Self {
            layout,
            description_max_len,
        }
    }

    pub fn layout(&self) -> FormLayout {
        self.layout
    }

    /// Replace exactly one draft field.
    ///
    /// Fails with `InvalidField` when the layout does not track `field`.
    /// Descriptions longer than the limit are cut, like a textarea with
    /// `maxlength`.
    pub fn update_field(
        &self,
        store: &mut RecordStore,
        field: FieldName,
        value: impl Into<String>,
    ) -> Result<()> {
        if !self.layout.tracks(field) {
            return Err(Error::InvalidField {
                name: field.key().to_string(),
            });
        }

        let mut value = value.into();
        if field == FieldName::Description {
            value = clamp_chars(&value, self.description_max_len);
        }

        let values = store.form_values().clone().with(field, value);
        store.set_form_values(values);
        Ok(())
    }

    /// Same as [`FormController::update_field`] for a field name coming from the surface
    pub fn update_field_by_name(
        &self,
        store: &mut RecordStore,
        name: &str,
        value: impl Into<String>,
    ) -> Result<()> {
        let field: FieldName = name.parse()?;
        self.update_field(store, field, value)
    }

    /// Selection change on the category select
    pub fn update_category(&self, store: &mut RecordStore, value: impl Into<String>) -> Result<()> {
        self.update_field(store, FieldName::Category, value)
    }
}
