use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug, PartialEq)]
pub enum CommandError {
    NotFound {
        message: String,
    },
    Conflict {
        message: String,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        field: Option<String>,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::RuleViolation { message } => {
                CommandError::Conflict { message }
            }
            LibraryError::Validation { message, field } => {
                CommandError::Validation { message, field }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[test]
    fn test_should_map_library_errors() {
        assert!(matches!(CommandError::from(LibraryError::not_found("x")), CommandError::NotFound { .. }));
        assert!(matches!(CommandError::from(LibraryError::rule_violation("x")), CommandError::Conflict { .. }));
        assert!(matches!(CommandError::from(LibraryError::validation("x", None)), CommandError::Validation { .. }));
        assert!(matches!(CommandError::from(LibraryError::serialization("x")), CommandError::Serialization { .. }));
    }
}
