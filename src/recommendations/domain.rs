pub mod scorer;
pub mod service;

use crate::books::dto::BookDto;
use crate::core::library::{LibraryResult, RecommendationKind};

// RecommendationService ranks available books a patron has not borrowed yet.
pub trait RecommendationService: Sync + Send {
    // recommend returns at most limit books, best first; a non-positive limit yields none
    fn recommend(&self, kind: RecommendationKind, patron_id: &str, limit: i64) -> LibraryResult<Vec<BookDto>>;
}
