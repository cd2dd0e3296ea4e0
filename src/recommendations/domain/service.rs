use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult, RecommendationKind};
use crate::lending::store::LendingStore;
use crate::patrons::domain::PatronService;
use crate::recommendations::domain::RecommendationService;
use crate::recommendations::domain::scorer::ScorerRegistry;
use crate::utils::validation::require_non_blank;

pub(crate) struct RecommendationServiceImpl {
    store: Arc<LendingStore>,
    catalog_service: Arc<dyn CatalogService>,
    patron_service: Arc<dyn PatronService>,
    registry: ScorerRegistry,
}

impl RecommendationServiceImpl {
    pub(crate) fn new(_config: &Configuration, store: Arc<LendingStore>,
                      catalog_service: Arc<dyn CatalogService>, patron_service: Arc<dyn PatronService>) -> Self {
        Self {
            store,
            catalog_service,
            patron_service,
            registry: ScorerRegistry::new(),
        }
    }
}

impl RecommendationService for RecommendationServiceImpl {
    fn recommend(&self, kind: RecommendationKind, patron_id: &str, limit: i64) -> LibraryResult<Vec<BookDto>> {
        let patron_id = require_non_blank(patron_id, "patron_id")?;
        if limit <= 0 {
            return Ok(vec![]);
        }
        if !self.patron_service.exists(patron_id.as_str()) {
            return Err(LibraryError::not_found(format!("patron not found: {}", patron_id).as_str()));
        }
        let scorer = self.registry.scorer_for(kind)?;

        let (history_isbns, borrowed, on_loan) = {
            let state = self.store.read();
            let loans = state.ledger.loans_for(patron_id.as_str());
            let on_loan: HashSet<String> = state.ledger.all_active_loans().into_iter().map(|l| l.isbn).collect();
            (loans.iter().map(|l| l.isbn.to_string()).collect::<Vec<_>>(),
             state.ledger.borrowed_by(patron_id.as_str()),
             on_loan)
        };

        // books removed from the catalog since they were borrowed no longer contribute
        let history: Vec<BookDto> = history_isbns.iter()
            .filter_map(|isbn| self.catalog_service.find_book_by_isbn(isbn).ok())
            .collect();
        let candidates: Vec<BookDto> = self.catalog_service.list_books().into_iter()
            .filter(|b| !on_loan.contains(&b.isbn) && !borrowed.contains(&b.isbn))
            .collect();
        let candidate_count = candidates.len();
        let ranked = scorer.rank(&history, candidates, limit as usize);
        debug!(patron_id = patron_id.as_str(), %kind, history = history.len(), candidates = candidate_count,
            recommended = ranked.len(), "recommendations ranked");
        Ok(ranked)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;
    use crate::core::library::{LibraryError, RecommendationKind};
    use crate::patrons::dto::PatronDto;

    fn state() -> AppState {
        let state = AppState::new(&Configuration::new("test")).expect("should build state");
        let books = [
            ("0000000001", "Dune", "Frank Herbert"),
            ("0000000002", "Dune Messiah", "Frank Herbert"),
            ("0000000003", "Children of Dune", "Frank Herbert"),
            ("0000000004", "God Emperor of Dune", "Frank Herbert"),
            ("0000000005", "The Dune Encyclopedia", "Willis McNelly"),
            ("0000000006", "Emma", "Jane Austen"),
        ];
        for (isbn, title, author) in books {
            state.catalog.add_book(&BookDto::new(isbn, title, author, 1970)).expect("should add book");
        }
        for patron_id in ["reader", "other"] {
            state.patrons.add_patron(&PatronDto::new(patron_id, "Name", "contact")).expect("should add patron");
        }
        state.lending.checkout("reader", "0000000001").expect("should checkout");
        state.lending.return_book("reader", "0000000001").expect("should return");
        state.lending.checkout("reader", "0000000002").expect("should checkout");
        state
    }

    fn titles(books: Vec<BookDto>) -> Vec<String> {
        books.into_iter().map(|b| b.title).collect()
    }

    #[test]
    fn test_should_recommend_deterministically() {
        let state = state();
        let first = state.recommendations.recommend(RecommendationKind::History, "reader", 5).expect("should recommend");
        let second = state.recommendations.recommend(RecommendationKind::History, "reader", 5).expect("should recommend");
        assert_eq!(vec!["Children of Dune", "God Emperor of Dune", "The Dune Encyclopedia"], titles(first.clone()));
        assert_eq!(first, second);
    }

    #[test]
    fn test_should_exclude_borrowed_and_loaned_books() {
        let state = state();
        state.lending.checkout("other", "0000000003").expect("should checkout");
        let ranked = state.recommendations.recommend(RecommendationKind::History, "reader", 5).expect("should recommend");
        let isbns: Vec<String> = ranked.into_iter().map(|b| b.isbn).collect();
        assert!(!isbns.contains(&"0000000001".to_string()));
        assert!(!isbns.contains(&"0000000002".to_string()));
        assert!(!isbns.contains(&"0000000003".to_string()));
        assert_eq!(vec!["0000000004".to_string(), "0000000005".to_string()], isbns);
    }

    #[test]
    fn test_should_honor_limit() {
        let state = state();
        let ranked = state.recommendations.recommend(RecommendationKind::History, "reader", 1).expect("should recommend");
        assert_eq!(vec!["Children of Dune"], titles(ranked));
        assert!(state.recommendations.recommend(RecommendationKind::History, "reader", 0).expect("empty").is_empty());
        let all = state.recommendations.recommend(RecommendationKind::History, "reader", i64::MAX).expect("should recommend");
        assert_eq!(vec!["Children of Dune", "God Emperor of Dune", "The Dune Encyclopedia"], titles(all));
        assert!(state.recommendations.recommend(RecommendationKind::History, "nobody", -1).expect("empty").is_empty());
    }

    #[test]
    fn test_should_reject_unknown_patron() {
        let state = state();
        assert!(matches!(state.recommendations.recommend(RecommendationKind::History, "nobody", 3),
            Err(LibraryError::NotFound { .. })));
        assert!(state.recommendations.recommend(RecommendationKind::History, "other", 3).expect("no history").is_empty());
    }
}
