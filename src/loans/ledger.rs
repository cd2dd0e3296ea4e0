use std::collections::{HashMap, HashSet};
use crate::loans::domain::model::LoanEntity;

/// LoanLedger is the bookkeeping of every loan ever made.
///
/// It indexes the single active loan per ISBN for O(1) availability checks and keeps
/// each patron's history in insertion order, returned loans included. The ledger
/// enforces no business rules: callers guarantee at most one active loan per ISBN
/// before recording one.
#[derive(Debug, Default, Clone)]
pub struct LoanLedger {
    by_loan_id: HashMap<String, LoanEntity>,
    active_by_isbn: HashMap<String, String>,
    history_by_patron: HashMap<String, Vec<String>>,
}

impl LoanLedger {
    pub fn new() -> Self {
        Self::default()
    }

    // record_loan upserts by loan id; the patron history only grows on first insert.
    pub fn record_loan(&mut self, loan: LoanEntity) {
        if !self.by_loan_id.contains_key(&loan.loan_id) {
            self.history_by_patron
                .entry(loan.patron_id.to_string())
                .or_default()
                .push(loan.loan_id.to_string());
        }
        if loan.is_active() {
            self.active_by_isbn.insert(loan.isbn.to_string(), loan.loan_id.to_string());
        } else if self.active_by_isbn.get(&loan.isbn) == Some(&loan.loan_id) {
            self.active_by_isbn.remove(&loan.isbn);
        }
        self.by_loan_id.insert(loan.loan_id.to_string(), loan);
    }

    pub fn active_loan_for(&self, isbn: &str) -> Option<&LoanEntity> {
        self.active_by_isbn.get(isbn).and_then(|id| self.by_loan_id.get(id))
    }

    pub fn is_on_loan(&self, isbn: &str) -> bool {
        self.active_by_isbn.contains_key(isbn)
    }

    pub fn loans_for(&self, patron_id: &str) -> Vec<LoanEntity> {
        match self.history_by_patron.get(patron_id) {
            Some(ids) => ids.iter()
                .filter_map(|id| self.by_loan_id.get(id))
                .cloned()
                .collect(),
            None => vec![],
        }
    }

    pub fn active_loans_for(&self, patron_id: &str) -> Vec<LoanEntity> {
        self.loans_for(patron_id).into_iter().filter(LoanEntity::is_active).collect()
    }

    pub fn active_count_for(&self, patron_id: &str) -> usize {
        self.history_by_patron.get(patron_id)
            .map(|ids| ids.iter()
                .filter_map(|id| self.by_loan_id.get(id))
                .filter(|loan| loan.is_active())
                .count())
            .unwrap_or(0)
    }

    pub fn all_active_loans(&self) -> Vec<LoanEntity> {
        self.active_by_isbn.values()
            .filter_map(|id| self.by_loan_id.get(id))
            .cloned()
            .collect()
    }

    // borrowed_by is every ISBN the patron has ever borrowed, active or returned
    pub fn borrowed_by(&self, patron_id: &str) -> HashSet<String> {
        self.loans_for(patron_id).into_iter().map(|loan| loan.isbn).collect()
    }
}
