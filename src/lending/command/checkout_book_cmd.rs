use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::lending::domain::LendingService;
use crate::loans::dto::LoanDto;

pub(crate) struct CheckoutBookCommand {
    lending_service: Arc<dyn LendingService>,
}

impl CheckoutBookCommand {
    pub(crate) fn new(lending_service: Arc<dyn LendingService>) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CheckoutBookCommandRequest {
    patron_id: String,
    isbn: String,
}

impl CheckoutBookCommandRequest {
    pub fn new(patron_id: &str, isbn: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            isbn: isbn.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CheckoutBookCommandResponse {
    pub loan: LoanDto,
}

impl CheckoutBookCommandResponse {
    pub fn new(loan: LoanDto) -> Self {
        Self {
            loan,
        }
    }
}

#[async_trait]
impl Command<CheckoutBookCommandRequest, CheckoutBookCommandResponse> for CheckoutBookCommand {
    async fn execute(&self, req: CheckoutBookCommandRequest) -> Result<CheckoutBookCommandResponse, CommandError> {
        self.lending_service.checkout(req.patron_id.as_str(), req.isbn.as_str())
            .map_err(CommandError::from).map(CheckoutBookCommandResponse::new)
    }
}
