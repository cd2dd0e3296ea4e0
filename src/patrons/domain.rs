pub mod model;
pub mod service;

use crate::core::library::LibraryResult;
use crate::loans::dto::LoanDto;
use crate::patrons::dto::PatronDto;

// PatronService manages library members and exposes their borrowing history.
pub trait PatronService: Sync + Send {
    fn add_patron(&self, patron: &PatronDto) -> LibraryResult<PatronDto>;
    fn update_patron(&self, patron_id: &str, name: &str, contact: &str) -> LibraryResult<PatronDto>;
    fn find_patron_by_id(&self, patron_id: &str) -> LibraryResult<PatronDto>;
    fn exists(&self, patron_id: &str) -> bool;
    fn list_patrons(&self) -> Vec<PatronDto>;
    // borrow_history includes returned loans, oldest first
    fn borrow_history(&self, patron_id: &str) -> LibraryResult<Vec<LoanDto>>;
}
