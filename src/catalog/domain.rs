pub mod search;
pub mod service;

use crate::books::dto::BookDto;
use crate::core::library::{LibraryResult, SearchKind};

// CatalogService manages the book records of a branch.
pub trait CatalogService: Sync + Send {
    fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    fn update_book(&self, isbn: &str, title: &str, author: &str, publication_year: i64) -> LibraryResult<BookDto>;
    fn remove_book(&self, isbn: &str) -> LibraryResult<()>;
    fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto>;
    // exists is false for unknown and for malformed ISBNs
    fn exists(&self, isbn: &str) -> bool;
    fn list_books(&self) -> Vec<BookDto>;
    fn search(&self, kind: SearchKind, query: &str) -> LibraryResult<Vec<BookDto>>;
}
