//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, and clap usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// No saved constraints for the requested domain.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Constraints are contradictory or could not be satisfied.
    pub const CONSTRAINT_FAILED: i32 = 6;
}

/// Environment variables read by the CLI.
pub mod env_vars {
    /// Passphrase for non-interactive use.
    pub const PASSPHRASE: &str = "GENPASS_PASSPHRASE";

    /// Config file override.
    pub const CONFIG: &str = "GENPASS_CONFIG";

    /// Constraint store override (also settable with `--store`).
    pub const STORE: &str = "GENPASS_STORE";

    /// Log filter, in `tracing_subscriber::EnvFilter` syntax.
    pub const LOG: &str = "GENPASS_LOG";
}
