use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::lending::domain::LendingService;
use crate::reservations::dto::ReservationDto;

pub(crate) struct ListReservationsCommand {
    lending_service: Arc<dyn LendingService>,
}

impl ListReservationsCommand {
    pub(crate) fn new(lending_service: Arc<dyn LendingService>) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListReservationsCommandRequest {
    pub patron_id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ListReservationsCommandResponse {
    pub reservations: Vec<ReservationDto>,
}

#[async_trait]
impl Command<ListReservationsCommandRequest, ListReservationsCommandResponse> for ListReservationsCommand {
    async fn execute(&self, req: ListReservationsCommandRequest) -> Result<ListReservationsCommandResponse, CommandError> {
        self.lending_service.reservations_for(req.patron_id.as_str())
            .map_err(CommandError::from).map(|reservations| ListReservationsCommandResponse { reservations })
    }
}
