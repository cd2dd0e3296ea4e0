use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::loans::dto::LoanDto;
use crate::patrons::domain::PatronService;

pub(crate) struct BorrowHistoryCommand {
    patron_service: Arc<dyn PatronService>,
}

impl BorrowHistoryCommand {
    pub(crate) fn new(patron_service: Arc<dyn PatronService>) -> Self {
        Self {
            patron_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct BorrowHistoryCommandRequest {
    pub patron_id: String,
}

impl BorrowHistoryCommandRequest {
    pub fn new(patron_id: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct BorrowHistoryCommandResponse {
    pub loans: Vec<LoanDto>,
}

impl BorrowHistoryCommandResponse {
    pub fn new(loans: Vec<LoanDto>) -> Self {
        Self {
            loans,
        }
    }
}

#[async_trait]
impl Command<BorrowHistoryCommandRequest, BorrowHistoryCommandResponse> for BorrowHistoryCommand {
    async fn execute(&self, req: BorrowHistoryCommandRequest) -> Result<BorrowHistoryCommandResponse, CommandError> {
        self.patron_service.borrow_history(req.patron_id.as_str())
            .map_err(CommandError::from).map(BorrowHistoryCommandResponse::new)
    }
}
