//! Application-level utilities for the genpass CLI.
//!
//! This module provides:
//! - Path resolution for the config and constraint store files
//! - Lazily loaded configuration bundled with the CLI arguments
//! - Passphrase and domain input

mod context;
mod input;
mod resolver;

// Re-export public API
pub use context::AppContext;
pub use input::{read_domain, read_passphrase};
pub use resolver::resolve_config_path;
