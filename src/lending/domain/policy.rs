use serde::{Deserialize, Serialize};
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::utils::validation::require_positive;

const MAX_LOAN_PERIOD_DAYS: i64 = 36_500;

// LendingPolicy bounds how many books a patron may hold and for how long.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct LendingPolicy {
    max_loans_per_patron: usize,
    loan_period_days: i64,
}

impl LendingPolicy {
    pub fn new(max_loans_per_patron: i64, loan_period_days: i64) -> LibraryResult<Self> {
        let max_loans = require_positive(max_loans_per_patron, "max_loans_per_patron")?;
        let loan_days = require_positive(loan_period_days, "loan_period_days")?;
        if loan_days > MAX_LOAN_PERIOD_DAYS {
            return Err(LibraryError::validation(
                format!("loan_period_days must be at most {}", MAX_LOAN_PERIOD_DAYS).as_str(),
                Some("loan_period_days".to_string())));
        }
        Ok(Self {
            max_loans_per_patron: max_loans as usize,
            loan_period_days: loan_days,
        })
    }

    pub fn from_config(config: &Configuration) -> LibraryResult<Self> {
        Self::new(config.max_loans_per_patron, config.loan_period_days)
    }

    pub fn max_loans_per_patron(&self) -> usize {
        self.max_loans_per_patron
    }

    pub fn loan_period_days(&self) -> i64 {
        self.loan_period_days
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;
    use crate::lending::domain::policy::LendingPolicy;

    #[test]
    fn test_should_build_policy_from_config() {
        let policy = LendingPolicy::from_config(&Configuration::new("test")).expect("should build");
        assert_eq!(3, policy.max_loans_per_patron());
        assert_eq!(14, policy.loan_period_days());
    }

    #[test]
    fn test_should_reject_non_positive_values() {
        assert!(matches!(LendingPolicy::new(0, 14), Err(LibraryError::Validation { .. })));
        assert!(matches!(LendingPolicy::new(2, -3), Err(LibraryError::Validation { .. })));
    }

    #[test]
    fn test_should_bound_loan_period() {
        assert_eq!(36_500, LendingPolicy::new(1, 36_500).expect("should build").loan_period_days());
        assert!(matches!(LendingPolicy::new(1, 36_501), Err(LibraryError::Validation { .. })));
        assert!(matches!(LendingPolicy::new(1, 1_000_000_000_000), Err(LibraryError::Validation { .. })));
        let mut config = Configuration::new("test");
        config.loan_period_days = 1_000_000_000_000;
        assert!(LendingPolicy::from_config(&config).is_err());
    }
}
