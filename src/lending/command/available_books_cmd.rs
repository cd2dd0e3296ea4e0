use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::lending::domain::LendingService;

pub(crate) struct AvailableBooksCommand {
    lending_service: Arc<dyn LendingService>,
}

impl AvailableBooksCommand {
    pub(crate) fn new(lending_service: Arc<dyn LendingService>) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AvailableBooksCommandResponse {
    pub books: Vec<BookDto>,
}

#[async_trait]
impl Command<(), AvailableBooksCommandResponse> for AvailableBooksCommand {
    async fn execute(&self, _req: ()) -> Result<AvailableBooksCommandResponse, CommandError> {
        Ok(AvailableBooksCommandResponse { books: self.lending_service.list_available_books() })
    }
}
