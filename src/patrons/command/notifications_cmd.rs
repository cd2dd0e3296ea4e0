use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryError;
use crate::gateway::events::{Notification, NotificationSink};
use crate::patrons::domain::PatronService;

pub(crate) struct NotificationsCommand {
    patron_service: Arc<dyn PatronService>,
    notifier: Arc<dyn NotificationSink>,
}

impl NotificationsCommand {
    pub(crate) fn new(patron_service: Arc<dyn PatronService>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            patron_service,
            notifier,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct NotificationsCommandRequest {
    pub patron_id: String,
}

impl NotificationsCommandRequest {
    pub fn new(patron_id: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct NotificationsCommandResponse {
    pub notifications: Vec<Notification>,
}

#[async_trait]
impl Command<NotificationsCommandRequest, NotificationsCommandResponse> for NotificationsCommand {
    async fn execute(&self, req: NotificationsCommandRequest) -> Result<NotificationsCommandResponse, CommandError> {
        let patron_id = req.patron_id.trim();
        if !self.patron_service.exists(patron_id) {
            return Err(CommandError::from(LibraryError::not_found(
                format!("patron not found: {}", patron_id).as_str())));
        }
        Ok(NotificationsCommandResponse { notifications: self.notifier.notifications_for(patron_id) })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::gateway::events::NotificationSink;
    use crate::gateway::memory::publisher::MemoryNotifier;
    use crate::lending::store::LendingStore;
    use crate::patrons::command::notifications_cmd::{NotificationsCommand, NotificationsCommandRequest};
    use crate::patrons::dto::PatronDto;
    use crate::patrons::factory;

    #[tokio::test]
    async fn test_should_run_notifications() {
        let svc = factory::create_patron_service(&Configuration::new("test"), Arc::new(LendingStore::new()));
        svc.add_patron(&PatronDto::new("p1", "Ada", "ada@example.org")).expect("should add patron");
        let notifier = Arc::new(MemoryNotifier::new());
        notifier.notify("p1", "Reserved book is now available. ISBN=0306406152. Please checkout.");
        let cmd = NotificationsCommand::new(svc, notifier);

        let res = cmd.execute(NotificationsCommandRequest::new("p1")).await.expect("should list notifications");
        assert_eq!(1, res.notifications.len());
        assert!(!res.notifications[0].read);
        let err = cmd.execute(NotificationsCommandRequest::new("p2")).await.expect_err("unknown patron");
        assert!(matches!(err, CommandError::NotFound { .. }));
    }
}
