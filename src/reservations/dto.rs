use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::reservations::domain::model::ReservationEntity;
use crate::utils::date::serializer;

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ReservationDto {
    pub reservation_id: String,
    pub isbn: String,
    pub patron_id: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl From<&ReservationEntity> for ReservationDto {
    fn from(other: &ReservationEntity) -> ReservationDto {
        ReservationDto {
            reservation_id: other.reservation_id.to_string(),
            isbn: other.isbn.to_string(),
            patron_id: other.patron_id.to_string(),
            created_at: other.created_at,
        }
    }
}
