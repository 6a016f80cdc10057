//! CRUD Demo Library
//!
//! Core of a single-screen record manager: an in-memory record store, a form
//! draft with create and edit modes, a single-flight simulated submission,
//! and the column configuration for the records table.

pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod helpers;
pub mod i18n;
pub mod services;
pub mod state;
pub mod utils;

pub use error::{Error, Result};
pub use features::crud::CrudController;
