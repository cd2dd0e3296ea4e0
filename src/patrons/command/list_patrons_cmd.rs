use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::core::command::{Command, CommandError};
use crate::patrons::domain::PatronService;
use crate::patrons::dto::PatronDto;

pub(crate) struct ListPatronsCommand {
    patron_service: Arc<dyn PatronService>,
}

impl ListPatronsCommand {
    pub(crate) fn new(patron_service: Arc<dyn PatronService>) -> Self {
        Self {
            patron_service,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ListPatronsCommandResponse {
    pub patrons: Vec<PatronDto>,
}

#[async_trait]
impl Command<(), ListPatronsCommandResponse> for ListPatronsCommand {
    async fn execute(&self, _req: ()) -> Result<ListPatronsCommandResponse, CommandError> {
        Ok(ListPatronsCommandResponse { patrons: self.patron_service.list_patrons() })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::lending::store::LendingStore;
    use crate::patrons::command::list_patrons_cmd::ListPatronsCommand;
    use crate::patrons::dto::PatronDto;
    use crate::patrons::factory;

    #[tokio::test]
    async fn test_should_run_list_patrons() {
        let svc = factory::create_patron_service(&Configuration::new("test"), Arc::new(LendingStore::new()));
        svc.add_patron(&PatronDto::new("b", "Bea", "bea@example.org")).expect("should add patron");
        svc.add_patron(&PatronDto::new("a", "Al", "al@example.org")).expect("should add patron");
        let res = ListPatronsCommand::new(svc).execute(()).await.expect("should list patrons");
        assert_eq!(2, res.patrons.len());
        assert_eq!("a", res.patrons[0].patron_id.as_str());
    }
}
