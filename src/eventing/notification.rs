//! Notifications
//!
//! Outcome signals for the notification surface (toast, banner, ...).
//! Published on a crossbeam channel whose receiver belongs to the surface.

use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::domain::{FieldName, RecordId};
use crate::i18n::{Locale, t, t_args};

/// Severity level for UI notifications
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationSeverity {
    /// Success message (auto-dismiss)
    Success,
    /// Warning message (persist until dismissed)
    Warning,
    /// Error message (persist until dismissed)
    Error,
}

/// User-visible outcome of a screen operation
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notification {
    /// A record was created
    Created(RecordId),
    /// A record was updated
    Updated(RecordId),
    /// A record was deleted
    Deleted(RecordId),
    /// Submit was blocked by missing or invalid fields
    ValidationFailed(Vec<FieldName>),
    /// Submit or cancel arrived while a submission was in flight
    SubmissionInProgress,
    /// The write step failed; the message is safe to show
    Failed(String),
}

impl Notification {
    pub fn severity(&self) -> NotificationSeverity {
        match self {
            Notification::Created(_) | Notification::Updated(_) | Notification::Deleted(_) => {
                NotificationSeverity::Success
            }
            Notification::ValidationFailed(_) | Notification::SubmissionInProgress => {
                NotificationSeverity::Warning
            }
            Notification::Failed(_) => NotificationSeverity::Error,
        }
    }

    /// Localized message for display
    pub fn message(&self, locale: Locale) -> String {
        match self {
            Notification::Created(_) => t(locale, "notify-created"),
            Notification::Updated(_) => t(locale, "notify-updated"),
            Notification::Deleted(_) => t(locale, "notify-deleted"),
            Notification::ValidationFailed(fields) => {
                let names = fields
                    .iter()
                    .map(|f| t(locale, &format!("field-{}", f.key())))
                    .collect::<Vec<_>>()
                    .join(", ");
                t_args(locale, "notify-validation", &[("fields", names.as_str())])
            }
            Notification::SubmissionInProgress => t(locale, "notify-in-progress"),
            Notification::Failed(_) => t(locale, "notify-failed"),
        }
    }
}

/// Publishing side of the notification channel.
///
/// Holds only the sender; the single receiver belongs to the notification
/// surface. Once that receiver is dropped, publishing is a no-op.
#[derive(Clone, Debug)]
pub struct Notifier {
    tx: Sender<Notification>,
}

impl Notifier {
    pub fn new(tx: Sender<Notification>) -> Self {
        Self { tx }
    }

    /// Create a notifier together with the receiver for the surface
    pub fn channel() -> (Self, Receiver<Notification>) {
        let (tx, rx) = unbounded();
        (Self::new(tx), rx)
    }

    /// Publish a notification
    pub fn publish(&self, notification: Notification) {
        tracing::debug!(?notification, "Publishing notification");
        if self.tx.send(notification).is_err() {
            tracing::debug!("Notification surface gone, dropping notification");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_names_fields() {
        let n = Notification::ValidationFailed(vec![FieldName::Name, FieldName::Category]);
        assert_eq!(
            n.message(Locale::EnUS),
            "Please fill in required fields: Name, Category"
        );
        assert_eq!(n.severity(), NotificationSeverity::Warning);
    }

    #[test]
    fn failures_are_errors_with_generic_message() {
        let n = Notification::Failed("simulated network failure".into());
        assert_eq!(n.severity(), NotificationSeverity::Error);
        assert_eq!(n.message(Locale::EnUS), "Operation failed, please try again");
    }

    #[test]
    fn surface_receives_in_order() {
        let (notifier, rx) = Notifier::channel();
        notifier.publish(Notification::Created(RecordId::from("a")));
        notifier.clone().publish(Notification::Deleted(RecordId::from("a")));
        assert_eq!(
            rx.try_iter().collect::<Vec<_>>(),
            vec![
                Notification::Created(RecordId::from("a")),
                Notification::Deleted(RecordId::from("a")),
            ]
        );
        assert!(rx.is_empty());
    }

    #[test]
    fn publishing_without_surface_does_not_queue() {
        let (notifier, rx) = Notifier::channel();
        drop(rx);
        for _ in 0..50 {
            notifier.publish(Notification::SubmissionInProgress);
        }
        assert!(notifier.tx.is_empty());
    }
}
