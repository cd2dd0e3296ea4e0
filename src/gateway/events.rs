use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::domain::Identifiable;
use crate::utils::date::{now, serializer};

// Notification abstracts a message delivered to a patron, e.g. a reserved book became available.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub notification_id: String,
    pub patron_id: String,
    pub message: String,
    pub read: bool,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl Notification {
    pub fn new(patron_id: &str, message: &str) -> Self {
        Self {
            notification_id: Uuid::new_v4().to_string(),
            patron_id: patron_id.to_string(),
            message: message.to_string(),
            read: false,
            created_at: now(),
        }
    }
}

impl Identifiable for Notification {
    fn id(&self) -> String {
        self.notification_id.to_string()
    }
}

// NotificationSink receives fire-and-forget messages for patrons; delivery is never
// allowed to fail the lending operation that triggered it.
pub trait NotificationSink: Sync + Send {
    fn notify(&self, patron_id: &str, message: &str);

    // notifications_for returns the inbox of a patron in creation order, empty when
    // the sink does not keep one.
    fn notifications_for(&self, patron_id: &str) -> Vec<Notification>;

    // mark_read flags a notification as read and reports whether it was found.
    fn mark_read(&self, notification_id: &str) -> bool;
}
