use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult, LoanStatus};

// LoanEntity abstracts a book lent to a patron. It is created at checkout, closed
// once at return and kept afterwards as borrowing history.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LoanEntity {
    pub loan_id: String,
    pub isbn: String,
    pub patron_id: String,
    pub checkout_date: NaiveDate,
    pub due_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}

impl LoanEntity {
    pub fn new(isbn: &str, patron_id: &str, checkout_date: NaiveDate, loan_period_days: i64) -> LibraryResult<Self> {
        let days = u64::try_from(loan_period_days)
            .map_err(|_| LibraryError::rule_violation("due date cannot be before checkout date"))?;
        let due_date = Some(days).filter(|d| *d <= i32::MAX as u64)
            .and_then(|d| checkout_date.checked_add_days(Days::new(d)))
            .ok_or_else(|| LibraryError::rule_violation(
                format!("loan period of {} days is out of range", loan_period_days).as_str()))?;
        Ok(Self {
            loan_id: Uuid::new_v4().to_string(),
            isbn: isbn.to_string(),
            patron_id: patron_id.to_string(),
            checkout_date,
            due_date,
            return_date: None,
        })
    }

    pub fn is_active(&self) -> bool {
        self.return_date.is_none()
    }

    pub fn status(&self) -> LoanStatus {
        if self.is_active() { LoanStatus::Active } else { LoanStatus::Returned }
    }

    pub fn mark_returned(&mut self, return_date: NaiveDate) -> LibraryResult<()> {
        if !self.is_active() {
            return Err(LibraryError::rule_violation(
                format!("loan {} is already returned", self.loan_id).as_str()));
        }
        if return_date < self.checkout_date {
            return Err(LibraryError::rule_violation("return date cannot be before checkout date"));
        }
        self.return_date = Some(return_date);
        Ok(())
    }
}

impl Identifiable for LoanEntity {
    fn id(&self) -> String {
        self.loan_id.to_string()
    }
}
