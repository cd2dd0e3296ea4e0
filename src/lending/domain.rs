use crate::books::dto::BookDto;
use crate::core::library::{ItemStatus, LibraryResult};
use crate::loans::dto::LoanDto;
use crate::reservations::dto::ReservationDto;

pub mod policy;
pub mod service;

// LendingService coordinates checkout, return and reservation of books.
pub trait LendingService: Sync + Send {
    fn checkout(&self, patron_id: &str, isbn: &str) -> LibraryResult<LoanDto>;
    fn return_book(&self, patron_id: &str, isbn: &str) -> LibraryResult<LoanDto>;
    fn reserve(&self, patron_id: &str, isbn: &str) -> LibraryResult<ReservationDto>;
    fn cancel_reservation(&self, patron_id: &str, isbn: &str) -> LibraryResult<ReservationDto>;
    fn status(&self, isbn: &str) -> LibraryResult<ItemStatus>;
    fn is_available(&self, isbn: &str) -> LibraryResult<bool>;
    fn list_active_loans(&self) -> Vec<LoanDto>;
    fn list_available_books(&self) -> Vec<BookDto>;
    fn reservations_for(&self, patron_id: &str) -> LibraryResult<Vec<ReservationDto>>;
    fn peek_next_reservation(&self, isbn: &str) -> LibraryResult<Option<ReservationDto>>;
}
