use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::lending::domain::LendingService;
use crate::loans::dto::LoanDto;

pub(crate) struct ReturnBookCommand {
    lending_service: Arc<dyn LendingService>,
}

impl ReturnBookCommand {
    pub(crate) fn new(lending_service: Arc<dyn LendingService>) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReturnBookCommandRequest {
    patron_id: String,
    isbn: String,
}

impl ReturnBookCommandRequest {
    pub fn new(patron_id: &str, isbn: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            isbn: isbn.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ReturnBookCommandResponse {
    pub loan: LoanDto,
}

impl ReturnBookCommandResponse {
    pub fn new(loan: LoanDto) -> Self {
        Self {
            loan,
        }
    }
}

#[async_trait]
impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    async fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        self.lending_service.return_book(req.patron_id.as_str(), req.isbn.as_str())
            .map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::core::command::{Command, CommandError};
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;
    use crate::core::library::LoanStatus;
    use crate::lending::command::checkout_book_cmd::{CheckoutBookCommand, CheckoutBookCommandRequest};
    use crate::lending::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
    use crate::patrons::dto::PatronDto;

    #[tokio::test]
    async fn test_should_run_return_book() {
        let state = AppState::new(&Configuration::new("test")).expect("should build state");
        state.catalog.add_book(&BookDto::new("0306406152", "Dune", "Frank Herbert", 1965)).expect("should add book");
        state.patrons.add_patron(&PatronDto::new("p1", "Ada", "ada@example.org")).expect("should add patron");
        let checkout_cmd = CheckoutBookCommand::new(state.lending.clone());
        let return_cmd = ReturnBookCommand::new(state.lending.clone());

        let err = return_cmd.execute(ReturnBookCommandRequest::new("p1", "0306406152"))
            .await.expect_err("nothing to return");
        assert!(matches!(err, CommandError::Conflict { .. }));

        let _ = checkout_cmd.execute(CheckoutBookCommandRequest::new("p1", "0306406152"))
            .await.expect("should checkout book");
        let res = return_cmd.execute(ReturnBookCommandRequest::new("p1", "0306406152"))
            .await.expect("should return book");
        assert_eq!(LoanStatus::Returned, res.loan.loan_status);
        assert!(state.lending.is_available("0306406152").expect("availability"));
    }
}
