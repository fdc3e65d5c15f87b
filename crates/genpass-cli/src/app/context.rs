//! Application context for the genpass CLI.
//!
//! Provides a unified context that combines CLI arguments with
//! lazily-loaded configuration.

use once_cell::unsync::OnceCell;

use genpass_core::JsonFileStore;

use crate::cli::Cli;
use crate::config::GenpassConfig;

use super::resolver::{load_config, resolve_store_path};

/// Application context that bundles CLI args with configuration.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<GenpassConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&GenpassConfig> {
        self.config.get_or_try_init(load_config)
    }

    /// Whether explicit constraints should be remembered by default.
    pub fn remember(&self) -> anyhow::Result<bool> {
        Ok(self.config()?.store.remember)
    }

    /// Open the constraint store at its resolved path.
    pub fn store(&self) -> anyhow::Result<JsonFileStore> {
        let path = resolve_store_path(self.cli, self.config()?)?;
        tracing::debug!(path = %path.display(), "using constraint store");
        Ok(JsonFileStore::new(path))
    }
}
