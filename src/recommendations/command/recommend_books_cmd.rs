use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::core::library::RecommendationKind;
use crate::recommendations::domain::RecommendationService;

pub(crate) struct RecommendBooksCommand {
    recommendation_service: Arc<dyn RecommendationService>,
    default_limit: i64,
}

impl RecommendBooksCommand {
    pub(crate) fn new(recommendation_service: Arc<dyn RecommendationService>, default_limit: i64) -> Self {
        Self {
            recommendation_service,
            default_limit,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecommendBooksCommandRequest {
    #[serde(default)]
    pub patron_id: String,
    pub limit: Option<i64>,
}

impl RecommendBooksCommandRequest {
    pub fn new(patron_id: &str, limit: Option<i64>) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            limit,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RecommendBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl RecommendBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<RecommendBooksCommandRequest, RecommendBooksCommandResponse> for RecommendBooksCommand {
    async fn execute(&self, req: RecommendBooksCommandRequest) -> Result<RecommendBooksCommandResponse, CommandError> {
        let limit = req.limit.unwrap_or(self.default_limit);
        self.recommendation_service.recommend(RecommendationKind::History, req.patron_id.as_str(), limit)
            .map_err(CommandError::from).map(RecommendBooksCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::core::command::{Command, CommandError};
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;
    use crate::patrons::dto::PatronDto;
    use crate::recommendations::command::recommend_books_cmd::{RecommendBooksCommand, RecommendBooksCommandRequest};

    #[tokio::test]
    async fn test_should_run_recommend_books() {
        let state = AppState::new(&Configuration::new("test")).expect("should build state");
        for (isbn, title) in [("0306406152", "Emma"), ("9780306406157", "Persuasion"), ("1234567890", "Sanditon")] {
            state.catalog.add_book(&BookDto::new(isbn, title, "Jane Austen", 1815)).expect("should add book");
        }
        state.patrons.add_patron(&PatronDto::new("p1", "Ada", "ada@example.org")).expect("should add patron");
        state.lending.checkout("p1", "0306406152").expect("should checkout");
        let cmd = RecommendBooksCommand::new(state.recommendations.clone(), state.config.default_recommendations);

        let res = cmd.execute(RecommendBooksCommandRequest::new("p1", None)).await.expect("should recommend");
        assert_eq!(vec!["Persuasion", "Sanditon"], res.books.into_iter().map(|b| b.title).collect::<Vec<_>>());
        let res = cmd.execute(RecommendBooksCommandRequest::new("p1", Some(1))).await.expect("should recommend");
        assert_eq!(1, res.books.len());

        let err = cmd.execute(RecommendBooksCommandRequest::new("p9", None)).await.expect_err("unknown patron");
        assert!(matches!(err, CommandError::NotFound { .. }));
    }
}
