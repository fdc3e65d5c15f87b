//! Passphrase and domain input.

use dialoguer::{Input, Password};
use secrecy::SecretString;

use crate::constants::env_vars;
use crate::errors::CliError;

/// Read the passphrase from GENPASS_PASSPHRASE, or prompt without echo.
pub fn read_passphrase(interactive: bool, confirm: bool) -> anyhow::Result<SecretString> {
    if let Ok(value) = std::env::var(env_vars::PASSPHRASE) {
        if !value.trim().is_empty() {
            return Ok(SecretString::from(value));
        }
    }
    if !interactive {
        return Err(CliError::invalid_input(format!(
            "No passphrase provided and no TTY available. Set {}.",
            env_vars::PASSPHRASE
        ))
        .into());
    }
    let mut prompt = Password::new().with_prompt("Passphrase");
    if confirm {
        prompt = prompt.with_confirmation("Confirm passphrase", "Passphrases do not match");
    }
    let value = prompt
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read passphrase: {}", e))?;
    Ok(SecretString::from(value))
}

/// Use the given domain, or prompt for one.
pub fn read_domain(domain: Option<String>, interactive: bool) -> anyhow::Result<String> {
    if let Some(value) = domain {
        return Ok(value);
    }
    if !interactive {
        return Err(CliError::invalid_input(
            "No domain provided and no TTY available. Pass DOMAIN as an argument.",
        )
        .into());
    }
    Input::<String>::new()
        .with_prompt("Domain (e.g. google)")
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read domain: {}", e))
}
