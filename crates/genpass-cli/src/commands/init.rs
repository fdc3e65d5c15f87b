use std::path::PathBuf;

use crate::app::resolve_config_path;
use crate::cli::InitArgs;
use crate::config::{default_store_path, write_config, GenpassConfig};
use crate::errors::CliError;

pub fn handle_init(args: &InitArgs, quiet: bool) -> anyhow::Result<()> {
    let config_path = resolve_config_path()?;
    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {}\nHint: Pass --force to overwrite it.",
            config_path.display()
        ))
        .into());
    }

    let store_path = match args.store_path.as_deref() {
        Some(path) => PathBuf::from(path),
        None => default_store_path()?,
    };
    let config = GenpassConfig::new(Some(store_path.clone()), !args.no_remember, None);
    write_config(&config_path, &config)?;
    tracing::info!(path = %config_path.display(), "config written");

    if !quiet {
        println!("Wrote config to {}", config_path.display());
        println!("Saved constraints will live in {}", store_path.display());
    }
    Ok(())
}
