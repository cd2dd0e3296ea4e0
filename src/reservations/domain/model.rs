use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::domain::Identifiable;
use crate::utils::date::{now, serializer};

// ReservationEntity abstracts a patron waiting for a book that is currently on loan.
// It never changes once created; it is consumed at checkout or cancelled.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ReservationEntity {
    pub reservation_id: String,
    pub isbn: String,
    pub patron_id: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl ReservationEntity {
    pub fn new(isbn: &str, patron_id: &str) -> Self {
        Self {
            reservation_id: Uuid::new_v4().to_string(),
            isbn: isbn.to_string(),
            patron_id: patron_id.to_string(),
            created_at: now(),
        }
    }
}

impl Identifiable for ReservationEntity {
    fn id(&self) -> String {
        self.reservation_id.to_string()
    }
}
