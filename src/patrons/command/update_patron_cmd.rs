use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::patrons::domain::PatronService;
use crate::patrons::dto::PatronDto;

pub(crate) struct UpdatePatronCommand {
    patron_service: Arc<dyn PatronService>,
}

impl UpdatePatronCommand {
    pub(crate) fn new(patron_service: Arc<dyn PatronService>) -> Self {
        Self {
            patron_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdatePatronCommandRequest {
    #[serde(default)]
    pub patron_id: String,
    pub name: String,
    pub contact: String,
}

impl UpdatePatronCommandRequest {
    pub fn new(patron_id: &str, name: &str, contact: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            name: name.to_string(),
            contact: contact.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdatePatronCommandResponse {
    pub patron: PatronDto,
}

impl UpdatePatronCommandResponse {
    pub fn new(patron: PatronDto) -> Self {
        Self {
            patron,
        }
    }
}

#[async_trait]
impl Command<UpdatePatronCommandRequest, UpdatePatronCommandResponse> for UpdatePatronCommand {
    async fn execute(&self, req: UpdatePatronCommandRequest) -> Result<UpdatePatronCommandResponse, CommandError> {
        self.patron_service.update_patron(req.patron_id.as_str(), req.name.as_str(), req.contact.as_str())
            .map_err(CommandError::from).map(UpdatePatronCommandResponse::new)
    }
}
