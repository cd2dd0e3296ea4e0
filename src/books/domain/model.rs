use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::utils::date::{now, serializer};

// BookEntity abstracts a physical book in the catalog keyed by its normalized ISBN.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BookEntity {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub publication_year: i64,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(isbn: &str, title: &str, author: &str, publication_year: i64) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            publication_year,
            created_at: now(),
            updated_at: now(),
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}
