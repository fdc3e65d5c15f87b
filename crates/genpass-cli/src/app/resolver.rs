//! Path resolution for config and store files.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{default_config_path, default_store_path, read_config, GenpassConfig};
use crate::constants::env_vars;

/// Resolve the config file path, checking GENPASS_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(env_vars::CONFIG) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load the config file, or defaults when there is none.
pub fn load_config() -> anyhow::Result<GenpassConfig> {
    let path = resolve_config_path()?;
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file; using defaults");
        return Ok(GenpassConfig::default());
    }
    read_config(&path)
}

/// Resolve the constraint store path from CLI args, config, or the default.
pub fn resolve_store_path(cli: &Cli, config: &GenpassConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.store.as_deref().filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    if let Some(path) = config.store.path.as_deref().filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    default_store_path()
}
