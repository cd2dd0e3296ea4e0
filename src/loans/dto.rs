use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::core::library::LoanStatus;
use crate::loans::domain::model::LoanEntity;

// LoanDto is the view of a loan returned to callers.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LoanDto {
    pub loan_id: String,
    pub isbn: String,
    pub patron_id: String,
    pub loan_status: LoanStatus,
    pub checkout_date: NaiveDate,
    pub due_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}

impl LoanDto {
    pub fn is_active(&self) -> bool {
        self.return_date.is_none()
    }
}

impl From<&LoanEntity> for LoanDto {
    fn from(other: &LoanEntity) -> LoanDto {
        LoanDto {
            loan_id: other.loan_id.to_string(),
            isbn: other.isbn.to_string(),
            patron_id: other.patron_id.to_string(),
            loan_status: other.status(),
            checkout_date: other.checkout_date,
            due_date: other.due_date,
            return_date: other.return_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::core::library::LoanStatus;
    use crate::loans::domain::model::LoanEntity;
    use crate::loans::dto::LoanDto;

    #[test]
    fn test_should_build_dto_from_entity() {
        let checkout = NaiveDate::from_ymd_opt(2024, 1, 10).expect("valid date");
        let mut loan = LoanEntity::new("0306406152", "patron1", checkout, 7).expect("should build");
        loan.mark_returned(checkout).expect("should return");
        let dto = LoanDto::from(&loan);
        assert_eq!(loan.loan_id, dto.loan_id);
        assert_eq!(LoanStatus::Returned, dto.loan_status);
        assert!(!dto.is_active());
    }
}
