//! CRUD Controller
//!
//! One instance per screen, created at mount and dropped at unmount. Owns
//! the store and routes typed events from the form and table surfaces to
//! the form and submit controllers, publishing a notification for every
//! user-visible outcome.

use std::sync::Arc;

use crossbeam_channel::Receiver;
use tracing::{debug, info, warn};

use super::columns::record_columns;
use super::form::FormController;
use super::submit::{SubmitController, SubmitOutcome};
use crate::components::data_table::{Column, TablePage, TableView};
use crate::domain::{
    CategoryOption, CountryOption, CrudConfig, FieldName, FormLayout, FormValues, Record,
    RecordId,
};
use crate::error::{Error, Result};
use crate::eventing::{CrudEvent, Notification, Notifier};
use crate::i18n::{Locale, t};
use crate::services::{SimulatedGateway, WriteGateway};
use crate::state::{EditingTarget, StoreHandle};

/// CRUD screen controller
#[derive(Clone)]
pub struct CrudController {
    store: StoreHandle,
    form: FormController,
    submit: Arc<SubmitController>,
    config: Arc<CrudConfig>,
    locale: Locale,
    notifier: Notifier,
}

impl CrudController {
    /// Create a controller backed by the simulated gateway from `config`.
    ///
    /// Returns the controller and the notification receiver for the surface.
    pub fn new(config: CrudConfig) -> Result<(Self, Receiver<Notification>)> {
        let gateway =
            SimulatedGateway::new(config.submit_latency()).failing(config.simulate_failure);
        Self::with_gateway(config, Arc::new(gateway))
    }

    /// Create a controller with a custom write gateway
    pub fn with_gateway(
        config: CrudConfig,
        gateway: Arc<dyn WriteGateway>,
    ) -> Result<(Self, Receiver<Notification>)> {
        config.validate()?;
        let locale = Locale::resolve(config.locale.as_deref());
        let form = FormController::new(config.layout, config.description_max_len);
        let submit = SubmitController::new(config.categories.clone(), gateway);
        let (notifier, notifications) = Notifier::channel();

        let controller = Self {
            store: StoreHandle::new(),
            form,
            submit: Arc::new(submit),
            config: Arc::new(config),
            locale,
            notifier,
        };
        Ok((controller, notifications))
    }

    // ==================== Read side ====================

    /// Records in insertion order
    pub fn records(&self) -> Vec<Record> {
        self.store.read(|s| s.snapshot())
    }

    pub fn record(&self, id: &RecordId) -> Option<Record> {
        self.store.read(|s| s.get(id).cloned())
    }

    pub fn form_values(&self) -> FormValues {
        self.store.read(|s| s.form_values().clone())
    }

    pub fn editing_target(&self) -> EditingTarget {
        self.store.read(|s| s.editing_target().clone())
    }

    pub fn is_submitting(&self) -> bool {
        self.store.read(|s| s.is_submitting())
    }

    pub fn category_options(&self) -> &[CategoryOption] {
        &self.config.categories
    }

    pub fn country_options(&self) -> &[CountryOption] {
        &self.config.countries
    }

    pub fn layout(&self) -> FormLayout {
        self.form.layout()
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn config(&self) -> &CrudConfig {
        &self.config
    }

    /// Column configuration for the records table
    pub fn columns(&self) -> Vec<Column<Record>> {
        record_columns(&self.config.categories, self.locale)
    }

    /// A fresh table view using the configured page size
    pub fn table_view(&self) -> TableView {
        TableView::new(self.config.page_size)
    }

    /// Rows of the current table page
    pub fn table_page(&self, view: &TableView) -> TablePage<Record> {
        let columns = self.columns();
        self.store.read(|s| view.apply(&columns, s))
    }

    /// "Create New Record" or "Edit Record"
    pub fn form_title(&self) -> String {
        if self.editing_target().is_editing() {
            t(self.locale, "form-title-edit")
        } else {
            t(self.locale, "form-title-create")
        }
    }

    /// "Create" or "Update"
    pub fn submit_label(&self) -> String {
        if self.editing_target().is_editing() {
            t(self.locale, "submit-update")
        } else {
            t(self.locale, "submit-create")
        }
    }

    pub fn table_title(&self) -> String {
        t(self.locale, "table-title")
    }

    /// Shown in place of rows when the store is empty
    pub fn empty_message(&self) -> String {
        t(self.locale, "table-empty")
    }

    // ==================== Write side ====================

    /// Text input changed
    pub fn update_field(&self, field: FieldName, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        self.store
            .update(|s| self.form.update_field(s, field, value))
    }

    /// Category select changed
    pub fn update_category(&self, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        self.store.update(|s| self.form.update_category(s, value))
    }

    /// Validate and write the draft, then notify
    pub async fn submit(&self) -> Result<SubmitOutcome> {
        let result = self.submit.submit(&self.store).await;
        self.notifier.publish(match &result {
            Ok(SubmitOutcome::Created(id)) => Notification::Created(id.clone()),
            Ok(SubmitOutcome::Updated(id)) => Notification::Updated(id.clone()),
            Err(Error::ValidationFailed { fields }) => Notification::ValidationFailed(fields.clone()),
            Err(Error::SubmissionInProgress) => Notification::SubmissionInProgress,
            Err(e) => Notification::Failed(e.to_string()),
        });
        result
    }

    /// Load a record into the draft and switch to update mode.
    ///
    /// The draft gets its own copy of the fields; the stored record only
    /// changes when an update submit succeeds.
    pub fn begin_edit(&self, id: &RecordId) -> Result<()> {
        let result = self.store.update(|s| {
            if s.is_submitting() {
                return Err(Error::SubmissionInProgress);
            }
            let values = s
                .get(id)
                .map(|r| r.fields().to_form())
                .ok_or_else(|| Error::NotFound { id: id.clone() })?;
            s.set_editing_target(EditingTarget::Editing(id.clone()))?;
            s.set_form_values(values);
            Ok(())
        });

        match &result {
            Ok(()) => debug!(id = %id, "Editing record"),
            Err(Error::SubmissionInProgress) => {
                warn!(id = %id, "Edit rejected: submission in flight");
                self.notifier.publish(Notification::SubmissionInProgress);
            }
            Err(e) => warn!(error = %e, "Edit rejected"),
        }
        result
    }

    /// Leave update mode and clear the draft. Refused while a submission is in flight.
    pub fn cancel_edit(&self) -> Result<()> {
        let result = self.store.update(|s| {
            if s.is_submitting() {
                return Err(Error::SubmissionInProgress);
            }
            s.clear_editing();
            Ok(())
        });

        if result.is_err() {
            warn!("Cancel rejected: submission in flight");
            self.notifier.publish(Notification::SubmissionInProgress);
        }
        result
    }

    /// Remove a record. Deleting the edited record also cancels the edit.
    ///
    /// Returns whether a record was removed; unknown ids are a no-op.
    pub fn delete_record(&self, id: &RecordId) -> bool {
        let removed = self.store.update(|s| s.remove_record(id).is_some());

        if removed {
            info!(id = %id, "Record deleted");
            self.notifier.publish(Notification::Deleted(id.clone()));
        } else {
            debug!(id = %id, "Delete ignored: no such record");
        }
        removed
    }

    /// Single entry point for the form and table surfaces
    pub async fn dispatch(&self, event: CrudEvent) -> Result<()> {
        debug!(?event, "Dispatching event");
        match event {
            CrudEvent::FieldChanged { field, value } => self.update_field(field, value),
            CrudEvent::CategoryChanged(value) => self.update_category(value),
            CrudEvent::SubmitRequested => self.submit().await.map(|_| ()),
            CrudEvent::CancelRequested => self.cancel_edit(),
            CrudEvent::EditRequested(id) => self.begin_edit(&id),
            CrudEvent::DeleteRequested(id) => {
                self.delete_record(&id);
                Ok(())
            }
        }
    }
}

impl std::fmt::Debug for CrudController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrudController")
            .field("records", &self.store.read(|s| s.len()))
            .field("submitting", &self.is_submitting())
            .field("locale", &self.locale)
            .finish()
    }
}
