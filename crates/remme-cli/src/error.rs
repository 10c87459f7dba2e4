//! CLI error types

use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Exit code of a successful command
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code of every validation, precondition and node failure
pub const EXIT_FAILURE: i32 = 1;

/// Rejected command arguments
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Violations keyed by field name
    #[error("invalid arguments: {0:?}")]
    Fields(BTreeMap<String, Vec<String>>),

    /// The request as a whole cannot be made
    #[error("{0}")]
    Request(String),
}

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Arguments failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Something needed before calling the node is missing
    #[error("{0}")]
    Precondition(String),

    /// The node call failed
    #[error("{0}")]
    Service(String),
}

impl CliError {
    /// Body of the `errors` key
    pub fn errors(&self) -> Value {
        match self {
            CliError::Validation(ValidationError::Fields(fields)) => {
                serde_json::to_value(fields).unwrap_or(Value::Null)
            }
            CliError::Validation(ValidationError::Request(message))
            | CliError::Precondition(message)
            | CliError::Service(message) => Value::String(message.clone()),
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }
}
