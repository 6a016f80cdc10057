//! Eventing
//!
//! Typed events flowing into the screen and notifications flowing out.

pub mod crud_event;
pub mod notification;

pub use crud_event::CrudEvent;
pub use notification::{Notification, NotificationSeverity, Notifier};
