use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::{LibraryError, SearchKind};

pub(crate) struct SearchBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl SearchBooksCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// SearchBooksCommandRequest lists the whole catalog when neither kind nor q is given.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchBooksCommandRequest {
    pub kind: Option<String>,
    pub q: Option<String>,
}

impl SearchBooksCommandRequest {
    pub fn new(kind: &str, q: &str) -> Self {
        Self {
            kind: Some(kind.to_string()),
            q: Some(q.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SearchBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl SearchBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand {
    async fn execute(&self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        match (req.kind, req.q) {
            (None, None) => Ok(SearchBooksCommandResponse::new(self.catalog_service.list_books())),
            (kind, q) => {
                let kind = SearchKind::try_from(kind.unwrap_or_else(|| "title".to_string()).as_str())?;
                let q = q.ok_or_else(|| LibraryError::validation("query is required", Some("q".to_string())))?;
                self.catalog_service.search(kind, q.as_str())
                    .map_err(CommandError::from).map(SearchBooksCommandResponse::new)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::books::dto::BookDto;
    use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::lending::store::LendingStore;

    fn search_cmd() -> SearchBooksCommand {
        let svc = factory::create_catalog_service(&Configuration::new("test"), Arc::new(LendingStore::new()));
        svc.add_book(&BookDto::new("0306406152", "Dune", "Frank Herbert", 1965)).expect("should add book");
        svc.add_book(&BookDto::new("9780306406157", "Emma", "Jane Austen", 1815)).expect("should add book");
        SearchBooksCommand::new(svc)
    }

    #[tokio::test]
    async fn test_should_list_without_query() {
        let res = search_cmd().execute(SearchBooksCommandRequest::default()).await.expect("should list");
        assert_eq!(2, res.books.len());
    }

    #[tokio::test]
    async fn test_should_search_by_kind() {
        let res = search_cmd().execute(SearchBooksCommandRequest::new("author", "austen"))
            .await.expect("should search");
        assert_eq!(1, res.books.len());
        assert_eq!("Emma", res.books[0].title.as_str());
    }

    #[tokio::test]
    async fn test_should_reject_unknown_kind_and_missing_query() {
        let err = search_cmd().execute(SearchBooksCommandRequest::new("genre", "sf")).await.expect_err("bad kind");
        assert!(matches!(err, CommandError::Validation { .. }));
        let req = SearchBooksCommandRequest { kind: Some("title".to_string()), q: None };
        let err = search_cmd().execute(req).await.expect_err("missing query");
        assert!(matches!(err, CommandError::Validation { .. }));
    }
}
