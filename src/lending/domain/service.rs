use std::sync::Arc;
use tracing::{debug, info, warn};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::{ItemStatus, LibraryError, LibraryResult};
use crate::gateway::events::NotificationSink;
use crate::lending::domain::LendingService;
use crate::lending::domain::policy::LendingPolicy;
use crate::lending::store::{LendingState, LendingStore};
use crate::loans::domain::model::LoanEntity;
use crate::loans::dto::LoanDto;
use crate::patrons::domain::PatronService;
use crate::reservations::domain::model::ReservationEntity;
use crate::reservations::dto::ReservationDto;
use crate::utils::date::today;
use crate::utils::validation::{normalize_isbn, require_non_blank};

pub struct LendingServiceImpl {
    branch_id: String,
    policy: LendingPolicy,
    store: Arc<LendingStore>,
    catalog_service: Arc<dyn CatalogService>,
    patron_service: Arc<dyn PatronService>,
    notifier: Arc<dyn NotificationSink>,
}

impl LendingServiceImpl {
    pub fn new(config: &Configuration, store: Arc<LendingStore>,
               catalog_service: Arc<dyn CatalogService>, patron_service: Arc<dyn PatronService>,
               notifier: Arc<dyn NotificationSink>) -> LibraryResult<Self> {
        Ok(Self {
            branch_id: config.branch_id.to_string(),
            policy: LendingPolicy::from_config(config)?,
            store,
            catalog_service,
            patron_service,
            notifier,
        })
    }

    // Callers hold the write guard so that a book cannot vanish between this check
    // and the write that follows.
    fn require_known(&self, patron_id: &str, isbn: &str) -> LibraryResult<()> {
        if !self.patron_service.exists(patron_id) {
            return Err(LibraryError::not_found(format!("patron not found: {}", patron_id).as_str()));
        }
        if !self.catalog_service.exists(isbn) {
            return Err(LibraryError::not_found(format!("book not found: {}", isbn).as_str()));
        }
        Ok(())
    }

    // check_reservation_gate reports whether the patron is the queue head, failing when
    // somebody else is first in line.
    fn check_reservation_gate(state: &LendingState, patron_id: &str, isbn: &str) -> LibraryResult<bool> {
        match state.reservations.peek_head(isbn) {
            Some(head) if head.patron_id != patron_id => {
                Err(LibraryError::rule_violation(format!(
                    "book {} is reserved by another patron; next patron in queue: {}",
                    isbn, head.patron_id).as_str()))
            }
            Some(_) => Ok(true),
            None => Ok(false),
        }
    }
}

impl LendingService for LendingServiceImpl {
    fn checkout(&self, patron_id: &str, isbn: &str) -> LibraryResult<LoanDto> {
        let patron_id = require_non_blank(patron_id, "patron_id")?;
        let isbn = normalize_isbn(isbn)?;

        let mut state = self.store.write();
        self.require_known(&patron_id, &isbn)?;
        if state.ledger.is_on_loan(&isbn) {
            warn!(patron_id = patron_id.as_str(), isbn = isbn.as_str(), "checkout rejected, book already on loan");
            return Err(LibraryError::rule_violation(format!("book is already on loan: {}", isbn).as_str()));
        }
        let holds_head = Self::check_reservation_gate(&state, &patron_id, &isbn).map_err(|err| {
            warn!(patron_id = patron_id.as_str(), isbn = isbn.as_str(), "checkout rejected by reservation queue");
            err
        })?;
        if state.ledger.active_count_for(&patron_id) >= self.policy.max_loans_per_patron() {
            warn!(patron_id = patron_id.as_str(), max_loans = self.policy.max_loans_per_patron(), "checkout rejected, borrow limit reached");
            return Err(LibraryError::rule_violation(
                format!("borrow limit reached for patron: {}", patron_id).as_str()));
        }

        let loan = LoanEntity::new(&isbn, &patron_id, today(), self.policy.loan_period_days())?;
        if holds_head {
            if let Some(reservation) = state.reservations.dequeue_head(&isbn) {
                debug!(reservation_id = reservation.reservation_id.as_str(), isbn = isbn.as_str(), "reservation consumed by checkout");
            }
        }
        state.ledger.record_loan(loan.clone());
        drop(state);

        info!(branch_id = self.branch_id.as_str(), loan_id = loan.loan_id.as_str(), patron_id = patron_id.as_str(),
            isbn = isbn.as_str(), due_date = %loan.due_date, "book checked out");
        Ok(LoanDto::from(&loan))
    }

    fn return_book(&self, patron_id: &str, isbn: &str) -> LibraryResult<LoanDto> {
        let patron_id = require_non_blank(patron_id, "patron_id")?;
        let isbn = normalize_isbn(isbn)?;

        let mut state = self.store.write();
        let mut loan = state.ledger.active_loan_for(&isbn).cloned().ok_or_else(|| {
            LibraryError::rule_violation(format!("book is not currently on loan: {}", isbn).as_str())
        })?;
        if loan.patron_id != patron_id {
            warn!(patron_id = patron_id.as_str(), isbn = isbn.as_str(), "return rejected, wrong borrower");
            return Err(LibraryError::rule_violation(format!(
                "book {} was borrowed by a different patron; expected {} but got {}",
                isbn, loan.patron_id, patron_id).as_str()));
        }
        loan.mark_returned(today())?;
        state.ledger.record_loan(loan.clone());
        // the head is notified but stays queued until it checks the book out
        let next_patron = state.reservations.peek_head(&isbn).map(|r| r.patron_id.to_string());
        drop(state);

        info!(branch_id = self.branch_id.as_str(), loan_id = loan.loan_id.as_str(), patron_id = patron_id.as_str(),
            isbn = isbn.as_str(), "book returned");
        if let Some(next_patron) = next_patron {
            self.notifier.notify(next_patron.as_str(), format!(
                "Reserved book is now available. ISBN={}. Please checkout.", isbn).as_str());
            info!(patron_id = next_patron.as_str(), isbn = isbn.as_str(), "notified next patron in reservation queue");
        }
        Ok(LoanDto::from(&loan))
    }

    fn reserve(&self, patron_id: &str, isbn: &str) -> LibraryResult<ReservationDto> {
        let patron_id = require_non_blank(patron_id, "patron_id")?;
        let isbn = normalize_isbn(isbn)?;

        let mut state = self.store.write();
        self.require_known(&patron_id, &isbn)?;
        if !state.ledger.is_on_loan(&isbn) {
            return Err(LibraryError::rule_violation(format!(
                "book is available; reservation is only allowed while it is on loan: {}", isbn).as_str()));
        }
        if state.reservations.has_reservation_for(&isbn, &patron_id) {
            return Err(LibraryError::rule_violation(format!(
                "patron {} already has a reservation for book {}", patron_id, isbn).as_str()));
        }
        let reservation = ReservationEntity::new(&isbn, &patron_id);
        state.reservations.enqueue(reservation.clone());
        drop(state);

        info!(reservation_id = reservation.reservation_id.as_str(), patron_id = patron_id.as_str(),
            isbn = isbn.as_str(), "book reserved");
        Ok(ReservationDto::from(&reservation))
    }

    fn cancel_reservation(&self, patron_id: &str, isbn: &str) -> LibraryResult<ReservationDto> {
        let patron_id = require_non_blank(patron_id, "patron_id")?;
        let isbn = normalize_isbn(isbn)?;

        let removed = self.store.write().reservations.remove(&isbn, &patron_id).ok_or_else(|| {
            LibraryError::not_found(format!(
                "reservation for book {} by patron {} not found", isbn, patron_id).as_str())
        })?;
        info!(reservation_id = removed.reservation_id.as_str(), patron_id = patron_id.as_str(),
            isbn = isbn.as_str(), "reservation cancelled");
        Ok(ReservationDto::from(&removed))
    }

    fn status(&self, isbn: &str) -> LibraryResult<ItemStatus> {
        let isbn = normalize_isbn(isbn)?;
        if !self.catalog_service.exists(&isbn) {
            return Err(LibraryError::not_found(format!("book not found: {}", isbn).as_str()));
        }
        if self.store.read().ledger.is_on_loan(&isbn) {
            Ok(ItemStatus::OnLoan)
        } else {
            Ok(ItemStatus::Available)
        }
    }

    fn is_available(&self, isbn: &str) -> LibraryResult<bool> {
        let isbn = normalize_isbn(isbn)?;
        Ok(self.catalog_service.exists(&isbn) && !self.store.read().ledger.is_on_loan(&isbn))
    }

    fn list_active_loans(&self) -> Vec<LoanDto> {
        let mut loans: Vec<LoanDto> = self.store.read().ledger.all_active_loans()
            .iter().map(LoanDto::from).collect();
        loans.sort_by(|a, b| a.due_date.cmp(&b.due_date).then_with(|| a.isbn.cmp(&b.isbn)));
        loans
    }

    fn list_available_books(&self) -> Vec<BookDto> {
        let books = self.catalog_service.list_books();
        let state = self.store.read();
        books.into_iter().filter(|b| !state.ledger.is_on_loan(&b.isbn)).collect()
    }

    fn reservations_for(&self, patron_id: &str) -> LibraryResult<Vec<ReservationDto>> {
        let patron_id = require_non_blank(patron_id, "patron_id")?;
        if !self.patron_service.exists(&patron_id) {
            return Err(LibraryError::not_found(format!("patron not found: {}", patron_id).as_str()));
        }
        let mut reservations: Vec<ReservationDto> = self.store.read().reservations
            .reservations_for(&patron_id).iter().map(ReservationDto::from).collect();
        reservations.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(reservations)
    }

    fn peek_next_reservation(&self, isbn: &str) -> LibraryResult<Option<ReservationDto>> {
        let isbn = normalize_isbn(isbn)?;
        Ok(self.store.read().reservations.peek_head(&isbn).map(ReservationDto::from))
    }
}
