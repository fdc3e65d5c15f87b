//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use genpass_core::GenpassError;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Nothing saved for a domain
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),

    /// Contradictory or unsatisfiable constraints
    Constraint {
        message: String,
        hint: Option<String>,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::InvalidInput(message) => write!(f, "{}", message),
            CliError::Constraint { message, hint } => {
                if let Some(h) = hint {
                    write!(f, "{}\n{}", message, h)
                } else {
                    write!(f, "{}", message)
                }
            }
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Map a core error onto the CLI taxonomy.
    ///
    /// Constraint errors and invalid input get their own exit codes; anything
    /// else is returned as a plain error.
    pub fn from_core(err: GenpassError) -> anyhow::Error {
        match err {
            GenpassError::Contradictory(_) => CliError::Constraint {
                message: err.to_string(),
                hint: Some("Hint: A class cannot be both --require'd and --forbid'den.".to_string()),
            }
            .into(),
            GenpassError::Unsatisfiable { .. } => CliError::Constraint {
                message: err.to_string(),
                hint: Some(
                    "Hint: Lower-case letters cannot be forbidden, and --length must leave room for every required class."
                        .to_string(),
                ),
            }
            .into(),
            GenpassError::InvalidInput(message) => CliError::InvalidInput(message).into(),
            other => other.into(),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use super::constants::exit_codes;
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::Constraint { .. } => exit_codes::CONSTRAINT_FAILED,
        }
    }

    /// Print error message to stderr and exit with appropriate code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        std::process::exit(self.exit_code())
    }
}
