//! Login item error types

use std::fmt;
use thiserror::Error;

/// Which change was being requested when the OS refused it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Register,
    Unregister,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Register => write!(f, "register"),
            Operation::Unregister => write!(f, "unregister"),
        }
    }
}

/// Errors raised while registering or unregistering a login item.
///
/// `Display` yields the text shown as the alert's informative text, so for
/// `Declined` it is exactly the description the OS reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("{description}")]
    Declined {
        operation: Operation,
        code: i64,
        description: String,
    },

    #[error("Invalid login item identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("{0}")]
    Unavailable(String),
}

impl RegistrationError {
    pub fn declined(operation: Operation, code: i64, description: impl Into<String>) -> Self {
        RegistrationError::Declined {
            operation,
            code,
            description: description.into(),
        }
    }
}

/// Result type alias for login item operations
pub type RegistrationResult<T> = Result<T, RegistrationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declined_displays_os_description() {
        let err = RegistrationError::declined(
            Operation::Register,
            1,
            "Operation not permitted",
        );
        assert_eq!(err.to_string(), "Operation not permitted");
    }

    #[test]
    fn test_invalid_identifier_message() {
        let err = RegistrationError::InvalidIdentifier("bad\0id".into());
        assert!(err.to_string().starts_with("Invalid login item identifier"));
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Register.to_string(), "register");
        assert_eq!(Operation::Unregister.to_string(), "unregister");
    }
}
