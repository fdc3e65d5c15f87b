//! Error types for genpass core operations.
//!
//! Constraint problems are kept apart from store I/O so the CLI can report
//! a contradictory request differently from a broken preferences file.

use thiserror::Error;

/// Result type alias for genpass operations.
pub type Result<T> = std::result::Result<T, GenpassError>;

/// Core error type for genpass operations.
#[derive(Debug, Error)]
pub enum GenpassError {
    /// A character class is both required and forbidden
    #[error("Contradictory constraints: {0}")]
    Contradictory(String),

    /// The repair loop did not converge
    #[error("Constraints could not be satisfied after {rounds} repair rounds")]
    Unsatisfiable { rounds: usize },

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Constraint store I/O error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Constraint store contents could not be parsed
    #[error("Format error: {0}")]
    Format(String),
}

impl GenpassError {
    /// Whether this error comes from the constraint set rather than I/O.
    pub fn is_constraint_error(&self) -> bool {
        matches!(
            self,
            GenpassError::Contradictory(_) | GenpassError::Unsatisfiable { .. }
        )
    }

    /// Whether this error comes from reading or writing the constraint store.
    pub fn is_store_error(&self) -> bool {
        matches!(self, GenpassError::Storage(_) | GenpassError::Format(_))
    }
}

impl From<std::io::Error> for GenpassError {
    fn from(err: std::io::Error) -> Self {
        GenpassError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for GenpassError {
    fn from(err: serde_json::Error) -> Self {
        GenpassError::Format(err.to_string())
    }
}
