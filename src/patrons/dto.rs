use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::patrons::domain::model::PatronEntity;
use crate::utils::date::{now, serializer};

// PatronDto is a data transfer object for the patron service
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PatronDto {
    pub patron_id: String,
    pub name: String,
    pub contact: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl PatronDto {
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

impl Identifiable for PatronDto {
    fn id(&self) -> String {
        self.patron_id.to_string()
    }
}

impl From<&PatronEntity> for PatronDto {
    fn from(other: &PatronEntity) -> Self {
        Self {
            patron_id: other.patron_id.to_string(),
            name: other.name.to_string(),
            contact: other.contact.to_string(),
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&PatronDto> for PatronEntity {
    fn from(other: &PatronDto) -> Self {
        Self {
            patron_id: other.patron_id.to_string(),
            name: other.name.to_string(),
            contact: other.contact.to_string(),
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
