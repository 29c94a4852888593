use async_trait::async_trait;
use crate::core::library::{LibraryError, Violation};

#[derive(Debug)]
pub enum CommandError {
    InvalidInput {
        violations: Vec<Violation>,
    },
    NotFound {
        message: String,
    },
    Database {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        let retryable = other.retryable();
        match other {
            LibraryError::InvalidInput { violations } => {
                CommandError::InvalidInput { violations }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::Persistence { message, reason_code, .. } => {
                CommandError::Database { message, reason_code, retryable }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code, retryable }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::{LibraryError, Violation};

    #[tokio::test]
    async fn test_should_map_library_errors() {
        assert!(matches!(CommandError::from(LibraryError::invalid_input(vec![Violation::new("title", "Title must be filled out.")])),
            CommandError::InvalidInput { ref violations } if violations.len() == 1));
        assert!(matches!(CommandError::from(LibraryError::not_found("Book not found.")), CommandError::NotFound { .. }));
        assert!(matches!(CommandError::from(LibraryError::persistence("test", None, true)), CommandError::Database { retryable: true, .. }));
        assert!(matches!(CommandError::from(LibraryError::persistence("test", None, false)), CommandError::Database { retryable: false, .. }));
        assert!(matches!(CommandError::from(LibraryError::serialization("test")), CommandError::Serialization { .. }));
        assert!(matches!(CommandError::from(LibraryError::runtime("test", None)), CommandError::Runtime { retryable: false, .. }));
    }
}
