use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct UpdateBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// UpdateBookCommandRequest replaces the descriptive fields; the isbn comes from the path.
#[derive(Debug, Deserialize)]
pub(crate) struct UpdateBookCommandRequest {
    #[serde(default)]
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub publication_year: i64,
}

impl UpdateBookCommandRequest {
    pub fn new(isbn: &str, title: &str, author: &str, publication_year: i64) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            publication_year,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateBookCommandResponse {
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        self.catalog_service.update_book(req.isbn.as_str(), req.title.as_str(), req.author.as_str(), req.publication_year)
            .map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}
