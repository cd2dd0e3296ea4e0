use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::utils::date::{now, serializer};

// PatronEntity abstracts a library member who may borrow and reserve books.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PatronEntity {
    pub patron_id: String,
    pub name: String,
    pub contact: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl PatronEntity {
    pub fn new(patron_id: &str, name: &str, contact: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            name: name.to_string(),
            contact: contact.to_string(),
            created_at: now(),
            updated_at: now(),
        }
    }
}

impl Identifiable for PatronEntity {
    fn id(&self) -> String {
        self.patron_id.to_string()
    }
}
