use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::lending::domain::LendingService;
use crate::reservations::dto::ReservationDto;

pub(crate) struct ReserveBookCommand {
    lending_service: Arc<dyn LendingService>,
}

impl ReserveBookCommand {
    pub(crate) fn new(lending_service: Arc<dyn LendingService>) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReserveBookCommandRequest {
    patron_id: String,
    isbn: String,
}

impl ReserveBookCommandRequest {
    pub fn new(patron_id: &str, isbn: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            isbn: isbn.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ReserveBookCommandResponse {
    pub reservation: ReservationDto,
}

impl ReserveBookCommandResponse {
    pub fn new(reservation: ReservationDto) -> Self {
        Self {
            reservation,
        }
    }
}

#[async_trait]
impl Command<ReserveBookCommandRequest, ReserveBookCommandResponse> for ReserveBookCommand {
    async fn execute(&self, req: ReserveBookCommandRequest) -> Result<ReserveBookCommandResponse, CommandError> {
        self.lending_service.reserve(req.patron_id.as_str(), req.isbn.as_str())
            .map_err(CommandError::from).map(ReserveBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::core::command::{Command, CommandError};
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;
    use crate::lending::command::reserve_book_cmd::{ReserveBookCommand, ReserveBookCommandRequest};
    use crate::patrons::dto::PatronDto;

    #[tokio::test]
    async fn test_should_run_reserve_book() {
        let state = AppState::new(&Configuration::new("test")).expect("should build state");
        state.catalog.add_book(&BookDto::new("0306406152", "Dune", "Frank Herbert", 1965)).expect("should add book");
        state.patrons.add_patron(&PatronDto::new("p1", "Ada", "ada@example.org")).expect("should add patron");
        state.patrons.add_patron(&PatronDto::new("p2", "Bob", "bob@example.org")).expect("should add patron");
        let cmd = ReserveBookCommand::new(state.lending.clone());

        let err = cmd.execute(ReserveBookCommandRequest::new("p2", "0306406152"))
            .await.expect_err("book is available");
        assert!(matches!(err, CommandError::Conflict { .. }));

        state.lending.checkout("p1", "0306406152").expect("should checkout");
        let res = cmd.execute(ReserveBookCommandRequest::new("p2", "0306406152"))
            .await.expect("should reserve book");
        assert_eq!("p2", res.reservation.patron_id.as_str());
        assert_eq!("0306406152", res.reservation.isbn.as_str());
    }
}
