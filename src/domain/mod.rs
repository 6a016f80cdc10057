//! Domain - Pure Data Structures
//!
//! These types hold no UI or runtime concerns and represent the CRUD domain.

pub mod config;
pub mod form;
pub mod option;
pub mod record;

pub use config::CrudConfig;
pub use form::{FieldName, FormLayout, FormValues};
pub use option::{CategoryOption, CountryOption, SelectOption};
pub use record::{Record, RecordFields, RecordId};
