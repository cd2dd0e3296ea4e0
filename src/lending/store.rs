use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use crate::loans::ledger::LoanLedger;
use crate::reservations::queue::ReservationQueue;

// LendingState is the mutable lending domain: the loan ledger and the reservation queues.
#[derive(Debug, Default, Clone)]
pub struct LendingState {
    pub ledger: LoanLedger,
    pub reservations: ReservationQueue,
}

/// LendingStore guards the lending state with a single lock.
///
/// Checkout, return, reserve and cancel hold the write guard across their whole
/// check-then-write span, which makes them linearizable. One lock covers every ISBN
/// because the borrow limit spans all the books of a patron. Readers hold the read
/// guard only long enough to copy what they need.
#[derive(Debug, Default)]
pub struct LendingStore {
    state: RwLock<LendingState>,
}

impl LendingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read(&self) -> RwLockReadGuard<'_, LendingState> {
        self.state.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, LendingState> {
        self.state.write()
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> LendingState {
        self.state.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::lending::store::LendingStore;
    use crate::loans::domain::model::LoanEntity;

    #[test]
    fn test_should_isolate_snapshot_from_later_writes() {
        let store = LendingStore::new();
        let checkout = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
        store.write().ledger.record_loan(
            LoanEntity::new("0306406152", "p1", checkout, 14).expect("should build loan"));
        let snapshot = store.snapshot();
        store.write().ledger.record_loan(
            LoanEntity::new("9780306406157", "p1", checkout, 14).expect("should build loan"));

        assert_eq!(1, snapshot.ledger.all_active_loans().len());
        assert_eq!(2, store.read().ledger.all_active_loans().len());
    }
}
