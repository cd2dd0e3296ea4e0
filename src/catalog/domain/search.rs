use std::collections::HashMap;
use crate::books::dto::BookDto;
use crate::core::library::{LibraryError, LibraryResult, SearchKind};
use crate::utils::validation::{normalize_isbn, require_non_blank};

// SearchStrategy matches catalog records against a query prepared once per search.
pub trait SearchStrategy: Sync + Send {
    fn prepare(&self, query: &str) -> LibraryResult<String>;
    fn matches(&self, book: &BookDto, prepared: &str) -> bool;
}

pub struct TitleSearch {}

impl SearchStrategy for TitleSearch {
    fn prepare(&self, query: &str) -> LibraryResult<String> {
        Ok(require_non_blank(query, "query")?.to_lowercase())
    }

    fn matches(&self, book: &BookDto, prepared: &str) -> bool {
        book.title.to_lowercase().contains(prepared)
    }
}

pub struct AuthorSearch {}

impl SearchStrategy for AuthorSearch {
    fn prepare(&self, query: &str) -> LibraryResult<String> {
        Ok(require_non_blank(query, "query")?.to_lowercase())
    }

    fn matches(&self, book: &BookDto, prepared: &str) -> bool {
        book.author.to_lowercase().contains(prepared)
    }
}

pub struct IsbnSearch {}

impl SearchStrategy for IsbnSearch {
    fn prepare(&self, query: &str) -> LibraryResult<String> {
        require_non_blank(query, "query")?;
        normalize_isbn(query)
    }

    fn matches(&self, book: &BookDto, prepared: &str) -> bool {
        book.isbn == prepared
    }
}

/// SearchRegistry maps every `SearchKind` to the strategy that serves it.
///
/// New kinds register here; the catalog service only ever looks strategies up.
pub struct SearchRegistry {
    strategies: HashMap<SearchKind, Box<dyn SearchStrategy>>,
}

impl SearchRegistry {
    pub fn new() -> Self {
        let mut strategies: HashMap<SearchKind, Box<dyn SearchStrategy>> = HashMap::new();
        strategies.insert(SearchKind::Title, Box::new(TitleSearch {}));
        strategies.insert(SearchKind::Author, Box::new(AuthorSearch {}));
        strategies.insert(SearchKind::Isbn, Box::new(IsbnSearch {}));
        Self { strategies }
    }

    pub fn strategy_for(&self, kind: SearchKind) -> LibraryResult<&dyn SearchStrategy> {
        self.strategies.get(&kind).map(|s| s.as_ref()).ok_or_else(|| LibraryError::validation(
            format!("no search strategy registered for {}", kind).as_str(), Some("kind".to_string())))
    }

    // search returns the matching books in the order they were given
    pub fn search(&self, kind: SearchKind, query: &str, books: Vec<BookDto>) -> LibraryResult<Vec<BookDto>> {
        let strategy = self.strategy_for(kind)?;
        let prepared = strategy.prepare(query)?;
        Ok(books.into_iter().filter(|b| strategy.matches(b, prepared.as_str())).collect())
    }
}

impl Default for SearchRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::catalog::domain::search::SearchRegistry;
    use crate::core::library::{LibraryError, SearchKind};

    fn books() -> Vec<BookDto> {
        vec![
            BookDto::new("0306406152", "The Left Hand of Darkness", "Ursula K. Le Guin", 1969),
            BookDto::new("9780306406157", "A Wizard of Earthsea", "Ursula K. Le Guin", 1968),
            BookDto::new("1234567890", "Darkness at Noon", "Arthur Koestler", 1940),
        ]
    }

    #[test]
    fn test_should_search_title_ignoring_case() {
        let found = SearchRegistry::new().search(SearchKind::Title, "DARKNESS", books()).expect("should search");
        assert_eq!(2, found.len());
        assert_eq!("0306406152", found[0].isbn.as_str());
    }

    #[test]
    fn test_should_search_author_substring() {
        let found = SearchRegistry::new().search(SearchKind::Author, " le guin ", books()).expect("should search");
        assert_eq!(2, found.len());
        assert!(SearchRegistry::new().search(SearchKind::Author, "tolkien", books()).expect("should search").is_empty());
    }

    #[test]
    fn test_should_search_exact_isbn() {
        let found = SearchRegistry::new().search(SearchKind::Isbn, "978-0-306-40615-7", books()).expect("should search");
        assert_eq!(1, found.len());
        assert_eq!("A Wizard of Earthsea", found[0].title.as_str());
        assert!(SearchRegistry::new().search(SearchKind::Isbn, "030640615", books()).is_err());
    }

    #[test]
    fn test_should_reject_blank_query() {
        for kind in vec![SearchKind::Title, SearchKind::Author, SearchKind::Isbn] {
            assert!(matches!(SearchRegistry::new().search(kind, "   ", books()), Err(LibraryError::Validation { .. })));
        }
    }
}
