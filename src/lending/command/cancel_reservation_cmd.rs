use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::lending::domain::LendingService;
use crate::reservations::dto::ReservationDto;

pub(crate) struct CancelReservationCommand {
    lending_service: Arc<dyn LendingService>,
}

impl CancelReservationCommand {
    pub(crate) fn new(lending_service: Arc<dyn LendingService>) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CancelReservationCommandRequest {
    patron_id: String,
    isbn: String,
}

impl CancelReservationCommandRequest {
    pub fn new(patron_id: &str, isbn: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            isbn: isbn.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CancelReservationCommandResponse {
    pub reservation: ReservationDto,
}

impl CancelReservationCommandResponse {
    pub fn new(reservation: ReservationDto) -> Self {
        Self {
            reservation,
        }
    }
}

#[async_trait]
impl Command<CancelReservationCommandRequest, CancelReservationCommandResponse> for CancelReservationCommand {
    async fn execute(&self, req: CancelReservationCommandRequest) -> Result<CancelReservationCommandResponse, CommandError> {
        self.lending_service.cancel_reservation(req.patron_id.as_str(), req.isbn.as_str())
            .map_err(CommandError::from).map(CancelReservationCommandResponse::new)
    }
}
