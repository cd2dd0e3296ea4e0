use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::patrons::domain::PatronService;
use crate::patrons::dto::PatronDto;

pub(crate) struct GetPatronCommand {
    patron_service: Arc<dyn PatronService>,
}

impl GetPatronCommand {
    pub(crate) fn new(patron_service: Arc<dyn PatronService>) -> Self {
        Self {
            patron_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetPatronCommandRequest {
    pub patron_id: String,
}

impl GetPatronCommandRequest {
    pub fn new(patron_id: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct GetPatronCommandResponse {
    pub patron: PatronDto,
}

impl GetPatronCommandResponse {
    pub fn new(patron: PatronDto) -> Self {
        Self {
            patron,
        }
    }
}

#[async_trait]
impl Command<GetPatronCommandRequest, GetPatronCommandResponse> for GetPatronCommand {
    async fn execute(&self, req: GetPatronCommandRequest) -> Result<GetPatronCommandResponse, CommandError> {
        self.patron_service.find_patron_by_id(req.patron_id.as_str())
            .map_err(CommandError::from).map(GetPatronCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::lending::store::LendingStore;
    use crate::patrons::command::add_patron_cmd::{AddPatronCommand, AddPatronCommandRequest};
    use crate::patrons::command::get_patron_cmd::{GetPatronCommand, GetPatronCommandRequest};
    use crate::patrons::factory;

    #[tokio::test]
    async fn test_should_run_get_patron() {
        let svc = factory::create_patron_service(&Configuration::new("test"), Arc::new(LendingStore::new()));
        let add_cmd = AddPatronCommand::new(svc.clone());
        let get_cmd = GetPatronCommand::new(svc);

        let res = add_cmd.execute(AddPatronCommandRequest::new(None, "Ada", "ada@example.org"))
            .await.expect("should add patron");
        let loaded = get_cmd.execute(GetPatronCommandRequest::new(res.patron.patron_id.as_str()))
            .await.expect("should get patron");
        assert_eq!(res.patron, loaded.patron);

        let err = get_cmd.execute(GetPatronCommandRequest::new("missing")).await.expect_err("unknown patron");
        assert!(matches!(err, CommandError::NotFound { .. }));
    }
}
