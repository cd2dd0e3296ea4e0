use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq)]
pub enum LibraryError {
    NotFound {
        message: String,
    },
    // A business rule rejected the request, e.g. the book is already on loan, the
    // borrow limit is reached or another patron is ahead in the reservation queue.
    // Domain state is left untouched when this is returned.
    RuleViolation {
        message: String,
    },
    Validation {
        message: String,
        field: Option<String>,
    },
    Serialization {
        message: String,
    },
}

impl LibraryError {
    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn rule_violation(message: &str) -> LibraryError {
        LibraryError::RuleViolation { message: message.to_string() }
    }

    pub fn validation(message: &str, field: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), field }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn message(&self) -> &str {
        match self {
            LibraryError::NotFound { message } => message,
            LibraryError::RuleViolation { message } => message,
            LibraryError::Validation { message, .. } => message,
            LibraryError::Serialization { message } => message,
        }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::RuleViolation { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, field } => {
                write!(f, "{} {:?}", message, field)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for library operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

// ItemStatus is derived from the loan ledger, never stored on the book itself.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum ItemStatus {
    Available,
    OnLoan,
}

impl From<String> for ItemStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "OnLoan" => ItemStatus::OnLoan,
            _ => ItemStatus::Available,
        }
    }
}

impl Display for ItemStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ItemStatus::Available => write!(f, "Available"),
            ItemStatus::OnLoan => write!(f, "OnLoan"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum LoanStatus {
    Active,
    Returned,
}

impl From<String> for LoanStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Returned" => LoanStatus::Returned,
            _ => LoanStatus::Active,
        }
    }
}

impl Display for LoanStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            LoanStatus::Active => write!(f, "Active"),
            LoanStatus::Returned => write!(f, "Returned"),
        }
    }
}

// SearchKind selects the catalog search strategy.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum SearchKind {
    Title,
    Author,
    Isbn,
}

impl TryFrom<&str> for SearchKind {
    type Error = LibraryError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(SearchKind::Title),
            "author" => Ok(SearchKind::Author),
            "isbn" => Ok(SearchKind::Isbn),
            other => Err(LibraryError::validation(
                format!("unknown search kind {}", other).as_str(), Some("kind".to_string()))),
        }
    }
}

impl Display for SearchKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            SearchKind::Title => write!(f, "title"),
            SearchKind::Author => write!(f, "author"),
            SearchKind::Isbn => write!(f, "isbn"),
        }
    }
}

// RecommendationKind selects the scorer used to rank candidates.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum RecommendationKind {
    History,
}

impl Display for RecommendationKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RecommendationKind::History => write!(f, "history"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{ItemStatus, LibraryError, LoanStatus, SearchKind};

    #[test]
    fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound{ message: _ }));
    }

    #[test]
    fn test_should_create_rule_violation_error() {
        assert!(matches!(LibraryError::rule_violation("test"), LibraryError::RuleViolation{ message: _ }));
    }

    #[test]
    fn test_should_create_validation_error() {
        let err = LibraryError::validation("test", Some("isbn".to_string()));
        assert!(matches!(err, LibraryError::Validation{ message: _, field: Some(_) }));
        assert_eq!("test", err.message());
    }

    #[test]
    fn test_should_convert_json_error() {
        let err = serde_json::from_str::<u32>("not-a-number").unwrap_err();
        assert!(matches!(LibraryError::from(err), LibraryError::Serialization{ message: _ }));
    }

    #[test]
    fn test_should_format_statuses() {
        for status in vec![ItemStatus::Available, ItemStatus::OnLoan] {
            assert_eq!(status, ItemStatus::from(status.to_string()));
        }
        for status in vec![LoanStatus::Active, LoanStatus::Returned] {
            assert_eq!(status, LoanStatus::from(status.to_string()));
        }
    }

    #[test]
    fn test_should_parse_search_kind() {
        for kind in vec![SearchKind::Title, SearchKind::Author, SearchKind::Isbn] {
            assert_eq!(kind, SearchKind::try_from(kind.to_string().as_str()).expect("should parse"));
        }
        assert_eq!(SearchKind::Title, SearchKind::try_from(" TITLE ").expect("should parse"));
        assert!(SearchKind::try_from("genre").is_err());
    }
}
