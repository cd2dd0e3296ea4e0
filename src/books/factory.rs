use crate::books::domain::model::BookEntity;
use crate::core::repository::{MemoryRepository, Repository};

pub fn create_book_repository() -> Box<dyn Repository<BookEntity>> {
    Box::new(MemoryRepository::new("book"))
}
