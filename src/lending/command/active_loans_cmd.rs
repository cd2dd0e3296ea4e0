use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::core::command::{Command, CommandError};
use crate::lending::domain::LendingService;
use crate::loans::dto::LoanDto;

pub(crate) struct ActiveLoansCommand {
    lending_service: Arc<dyn LendingService>,
}

impl ActiveLoansCommand {
    pub(crate) fn new(lending_service: Arc<dyn LendingService>) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ActiveLoansCommandResponse {
    pub loans: Vec<LoanDto>,
}

#[async_trait]
impl Command<(), ActiveLoansCommandResponse> for ActiveLoansCommand {
    async fn execute(&self, _req: ()) -> Result<ActiveLoansCommandResponse, CommandError> {
        Ok(ActiveLoansCommandResponse { loans: self.lending_service.list_active_loans() })
    }
}
