//! Submit Controller
//!
//! Validates the draft and performs one create-or-update, at most one at a
//! time.
//!
//! ```text
//! Idle ─► Validating ─┬─► Idle            (validation failed, nothing touched)
//!                     └─► InFlight ─┬─► Idle  (write ok, mutation applied)
//!                                   └─► Idle  (write failed, no mutation)
//! ```
//!
//! The in-flight flag is set before the write's await point and cleared
//! after it, so a second submit issued during the write sees the flag and is
//! rejected. Clearing the flag and resetting the draft also happens when the
//! submit future is dropped mid-write.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::domain::option::contains_code;
use crate::domain::{CategoryOption, FieldName, FormValues, Record, RecordFields, RecordId};
use crate::error::{Error, Result};
use crate::services::{WriteGateway, WriteOp};
use crate::state::{EditingTarget, RecordStore, StoreHandle};

/// Successful submission result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(RecordId),
    Updated(RecordId),
}

impl SubmitOutcome {
    pub fn record_id(&self) -> &RecordId {
        match self {
            SubmitOutcome::Created(id) | SubmitOutcome::Updated(id) => id,
        }
    }
}

/// Submission with single-flight guarantee
pub struct SubmitController {
    categories: Vec<CategoryOption>,
    gateway: Arc<dyn WriteGateway>,
}

impl SubmitController {
    /// Create a new controller
    pub fn new(categories: Vec<CategoryOption>, gateway: Arc<dyn WriteGateway>) -> Self {
        Self {
            categories,
            gateway,
        }
    }

    /// Check required fields: a non-blank name and a known category code
    pub fn validate(&self, values: &FormValues) -> Result<()> {
        let mut fields: Vec<FieldName> = FieldName::ALL
            .into_iter()
            .filter(|f| f.is_required() && values.get(*f).trim().is_empty())
            .collect();
        if !fields.contains(&FieldName::Category)
            && !contains_code(&self.categories, &values.category)
        {
            fields.push(FieldName::Category);
        }

        if fields.is_empty() {
            Ok(())
        } else {
            Err(Error::ValidationFailed { fields })
        }
    }

    /// Validate and write the current draft
    pub async fn submit(&self, store: &StoreHandle) -> Result<SubmitOutcome> {
        let (draft, target) = store.update(|state| self.begin(state))?;
        let mut guard = InFlightGuard::arm(store);

        let op = match &target {
            EditingTarget::Creating => WriteOp::Create,
            EditingTarget::Editing(id) => WriteOp::Update(id.clone()),
        };
        let written = self.gateway.write(op).await;

        let outcome = store.update(|state| {
            let outcome = written.and_then(|()| apply(state, &draft, &target));
            release(state);
            outcome
        });
        guard.disarm();

        if let Err(e) = &outcome {
            warn!(error = %e, "Submission failed");
        }
        outcome
    }

    /// Idle → Validating → InFlight, all under one lock
    fn begin(&self, state: &mut RecordStore) -> Result<(FormValues, EditingTarget)> {
        if state.is_submitting() {
            warn!("Submission rejected: another submission is in flight");
            return Err(Error::SubmissionInProgress);
        }
        if let Err(e) = self.validate(state.form_values()) {
            info!(error = %e, "Submission blocked by validation");
            return Err(e);
        }

        state.set_submitting(true);
        Ok((state.form_values().clone(), state.editing_target().clone()))
    }
}

impl std::fmt::Debug for SubmitController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmitController")
            .field("categories", &self.categories.len())
            .finish_non_exhaustive()
    }
}

fn apply(state: &mut RecordStore, draft: &FormValues, target: &EditingTarget) -> Result<SubmitOutcome> {
    let fields = RecordFields::from_form(draft);
    match target {
        EditingTarget::Creating => {
            let record = Record::new(RecordId::generate(), fields, Utc::now());
            let id = record.id().clone();
            state.add_record(record)?;
            info!(id = %id, "Record created");
            Ok(SubmitOutcome::Created(id))
        }
        EditingTarget::Editing(id) => {
            state.replace_record(id, fields)?;
            info!(id = %id, "Record updated");
            Ok(SubmitOutcome::Updated(id.clone()))
        }
    }
}

/// InFlight → Idle: clear the flag and return the form to create mode
fn release(state: &mut RecordStore) {
    state.set_submitting(false);
    state.clear_editing();
}

/// Releases the in-flight flag if the submit future is dropped mid-write
struct InFlightGuard<'a> {
    store: &'a StoreHandle,
    armed: bool,
}

impl<'a> InFlightGuard<'a> {
    fn arm(store: &'a StoreHandle) -> Self {
        Self { store, armed: true }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            warn!("Submission dropped before completion, releasing in-flight flag");
            self.store.update(release);
        }
    }
}
