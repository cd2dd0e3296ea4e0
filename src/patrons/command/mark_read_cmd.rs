use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryError;
use crate::gateway::events::NotificationSink;

pub(crate) struct MarkReadCommand {
    notifier: Arc<dyn NotificationSink>,
}

impl MarkReadCommand {
    pub(crate) fn new(notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            notifier,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct MarkReadCommandRequest {
    pub notification_id: String,
}

impl MarkReadCommandRequest {
    pub fn new(notification_id: &str) -> Self {
        Self {
            notification_id: notification_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct MarkReadCommandResponse {
    pub notification_id: String,
}

#[async_trait]
impl Command<MarkReadCommandRequest, MarkReadCommandResponse> for MarkReadCommand {
    async fn execute(&self, req: MarkReadCommandRequest) -> Result<MarkReadCommandResponse, CommandError> {
        if !self.notifier.mark_read(req.notification_id.as_str()) {
            return Err(CommandError::from(LibraryError::not_found(
                format!("notification not found: {}", req.notification_id).as_str())));
        }
        Ok(MarkReadCommandResponse { notification_id: req.notification_id })
    }
}
