use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::command::{Command, CommandError};
use crate::patrons::domain::PatronService;
use crate::patrons::dto::PatronDto;

pub(crate) struct AddPatronCommand {
    patron_service: Arc<dyn PatronService>,
}

impl AddPatronCommand {
    pub(crate) fn new(patron_service: Arc<dyn PatronService>) -> Self {
        Self {
            patron_service,
        }
    }
}

// AddPatronCommandRequest generates a patron id when none is supplied.
#[derive(Debug, Deserialize)]
pub(crate) struct AddPatronCommandRequest {
    pub patron_id: Option<String>,
    pub name: String,
    pub contact: String,
}

impl AddPatronCommandRequest {
    pub fn new(patron_id: Option<&str>, name: &str, contact: &str) -> Self {
        Self {
            patron_id: patron_id.map(|id| id.to_string()),
            name: name.to_string(),
            contact: contact.to_string(),
        }
    }
    pub fn build_patron(&self) -> PatronDto {
        let patron_id = self.patron_id.clone().unwrap_or_else(|| Uuid::new_v4().to_string());
        PatronDto::new(patron_id.as_str(), self.name.as_str(), self.contact.as_str())
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddPatronCommandResponse {
    pub patron: PatronDto,
}

impl AddPatronCommandResponse {
    pub fn new(patron: PatronDto) -> Self {
        Self {
            patron,
        }
    }
}

#[async_trait]
impl Command<AddPatronCommandRequest, AddPatronCommandResponse> for AddPatronCommand {
    async fn execute(&self, req: AddPatronCommandRequest) -> Result<AddPatronCommandResponse, CommandError> {
        self.patron_service.add_patron(&req.build_patron())
            .map_err(CommandError::from).map(AddPatronCommandResponse::new)
    }
}
