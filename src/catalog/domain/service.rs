use std::sync::Arc;
use tracing::info;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::search::SearchRegistry;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult, SearchKind};
use crate::core::repository::Repository;
use crate::lending::store::LendingStore;
use crate::utils::date::now;
use crate::utils::validation::{normalize_isbn, require_non_blank, require_positive};

pub(crate) struct CatalogServiceImpl {
    branch_id: String,
    book_repository: Box<dyn Repository<BookEntity>>,
    store: Arc<LendingStore>,
    registry: SearchRegistry,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn Repository<BookEntity>>,
                      store: Arc<LendingStore>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
            store,
            registry: SearchRegistry::new(),
        }
    }
}

fn sorted_by_title(mut books: Vec<BookDto>) -> Vec<BookDto> {
    books.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase())
        .then_with(|| a.isbn.cmp(&b.isbn)));
    books
}

impl CatalogService for CatalogServiceImpl {
    fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let isbn = normalize_isbn(book.isbn.as_str())?;
        let title = require_non_blank(book.title.as_str(), "title")?;
        let author = require_non_blank(book.author.as_str(), "author")?;
        let year = require_positive(book.publication_year, "publication_year")?;
        let entity = BookEntity::new(isbn.as_str(), title.as_str(), author.as_str(), year);
        self.book_repository.create(&entity)?;
        info!(branch_id = self.branch_id.as_str(), isbn = entity.isbn.as_str(), "book added");
        Ok(BookDto::from(&entity))
    }

    fn update_book(&self, isbn: &str, title: &str, author: &str, publication_year: i64) -> LibraryResult<BookDto> {
        let isbn = normalize_isbn(isbn)?;
        let title = require_non_blank(title, "title")?;
        let author = require_non_blank(author, "author")?;
        let year = require_positive(publication_year, "publication_year")?;
        let mut entity = self.book_repository.get(isbn.as_str())?;
        entity.title = title;
        entity.author = author;
        entity.publication_year = year;
        entity.updated_at = now();
        self.book_repository.update(&entity)?;
        info!(isbn = entity.isbn.as_str(), "book updated");
        Ok(BookDto::from(&entity))
    }

    fn remove_book(&self, isbn: &str) -> LibraryResult<()> {
        let isbn = normalize_isbn(isbn)?;
        // the read guard keeps checkouts out until the record is gone
        let state = self.store.read();
        if state.ledger.is_on_loan(isbn.as_str()) {
            return Err(LibraryError::rule_violation(
                format!("cannot remove book while it is on loan: {}", isbn).as_str()));
        }
        if state.reservations.has_any(isbn.as_str()) {
            return Err(LibraryError::rule_violation(
                format!("cannot remove book with pending reservations: {}", isbn).as_str()));
        }
        self.book_repository.delete(isbn.as_str())?;
        info!(isbn = isbn.as_str(), "book removed");
        Ok(())
    }

    fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto> {
        let isbn = normalize_isbn(isbn)?;
        self.book_repository.get(isbn.as_str()).map(|b| BookDto::from(&b))
    }

    fn exists(&self, isbn: &str) -> bool {
        match normalize_isbn(isbn) {
            Ok(isbn) => self.book_repository.exists(isbn.as_str()),
            Err(_) => false,
        }
    }

    fn list_books(&self) -> Vec<BookDto> {
        sorted_by_title(self.book_repository.find_all().iter().map(BookDto::from).collect())
    }

    fn search(&self, kind: SearchKind, query: &str) -> LibraryResult<Vec<BookDto>> {
        self.registry.search(kind, query, self.list_books())
    }
}
