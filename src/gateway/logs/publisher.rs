use tracing::info;
use crate::gateway::events::{Notification, NotificationSink};

// LogNotifier writes every notification to the log and keeps nothing.
#[derive(Debug, Default)]
pub struct LogNotifier {}

impl LogNotifier {
    pub fn new() -> Self {
        Self {}
    }
}

impl NotificationSink for LogNotifier {
    fn notify(&self, patron_id: &str, message: &str) {
        let notification = Notification::new(patron_id, message);
        match serde_json::to_string(&notification) {
            Ok(json) => info!(patron_id, notification = json.as_str(), "patron notified"),
            Err(err) => info!(patron_id, text = message, error = %err, "patron notified"),
        }
    }

    fn notifications_for(&self, _patron_id: &str) -> Vec<Notification> {
        vec![]
    }

    fn mark_read(&self, _notification_id: &str) -> bool {
        false
    }
}
