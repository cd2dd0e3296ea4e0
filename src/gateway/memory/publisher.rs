use std::collections::HashMap;
use parking_lot::RwLock;
use tracing::info;
use crate::gateway::events::{Notification, NotificationSink};

// MemoryNotifier keeps an inbox per patron for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    inbox: RwLock<HashMap<String, Vec<Notification>>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NotificationSink for MemoryNotifier {
    fn notify(&self, patron_id: &str, message: &str) {
        let notification = Notification::new(patron_id, message);
        info!(patron_id, notification_id = notification.notification_id.as_str(), text = message, "notification created");
        self.inbox.write()
            .entry(patron_id.to_string())
            .or_default()
            .push(notification);
    }

    fn notifications_for(&self, patron_id: &str) -> Vec<Notification> {
        self.inbox.read().get(patron_id).cloned().unwrap_or_default()
    }

    fn mark_read(&self, notification_id: &str) -> bool {
        let mut inbox = self.inbox.write();
        for notification in inbox.values_mut().flat_map(|n| n.iter_mut()) {
            if notification.notification_id == notification_id {
                notification.read = true;
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use crate::gateway::events::NotificationSink;
    use crate::gateway::memory::publisher::MemoryNotifier;

    #[test]
    fn test_should_keep_inbox_per_patron() {
        let notifier = MemoryNotifier::new();
        notifier.notify("p1", "first");
        notifier.notify("p2", "other");
        notifier.notify("p1", "second");

        let inbox = notifier.notifications_for("p1");
        assert_eq!(2, inbox.len());
        assert_eq!("first", inbox[0].message.as_str());
        assert_eq!("second", inbox[1].message.as_str());
        assert!(notifier.notifications_for("p3").is_empty());
    }

    #[test]
    fn test_should_mark_read() {
        let notifier = MemoryNotifier::new();
        notifier.notify("p1", "hello");
        let id = notifier.notifications_for("p1")[0].notification_id.clone();
        assert!(notifier.mark_read(id.as_str()));
        assert!(notifier.notifications_for("p1")[0].read);
        assert!(!notifier.mark_read("missing"));
    }
}
