//! CRUD Screen
//!
//! Form editing, single-flight submission, edit/delete coordination and
//! the records table configuration.

pub mod columns;
pub mod controller;
pub mod form;
pub mod submit;

pub use controller::CrudController;
pub use form::FormController;
pub use submit::{SubmitController, SubmitOutcome};
