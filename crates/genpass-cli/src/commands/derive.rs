use std::io::IsTerminal;

use secrecy::ExposeSecret;
use zeroize::Zeroizing;

use genpass_core::{
    derive, resolve_constraints, validate_domain, ConstraintSource, ConstraintStore, Constraints,
    Resolved,
};

use crate::app::{read_domain, read_passphrase, AppContext};
use crate::cli::DeriveArgs;
use crate::errors::CliError;
use crate::output::derivation_json;

pub fn handle_derive(ctx: &AppContext<'_>, args: &DeriveArgs) -> anyhow::Result<()> {
    let interactive = std::io::stdin().is_terminal() && !args.no_input;
    let domain = read_domain(args.domain.clone(), interactive)?;
    validate_domain(&domain).map_err(CliError::from_core)?;

    let explicit = explicit_constraints(args)?;
    let mut store = ctx.store()?;
    let resolved = match resolve_constraints(&store, &domain, &explicit) {
        Ok(resolved) => resolved,
        Err(err) if err.is_store_error() => {
            tracing::warn!(domain = %domain, path = %store.path().display(), error = %err, "could not read saved constraints");
            eprintln!(
                "Warning: could not read saved constraints for {}; using defaults: {}",
                domain, err
            );
            Resolved::defaults()
        }
        Err(err) => return Err(CliError::from_core(err)),
    };
    tracing::info!(domain = %domain, source = ?resolved.source, constraints = %resolved.constraints, "deriving");

    let passphrase = read_passphrase(interactive, args.confirm)?;
    let password = Zeroizing::new(
        derive(passphrase.expose_secret(), &domain, &resolved.constraints)
            .map_err(CliError::from_core)?,
    );
    drop(passphrase);

    if resolved.should_save() && !args.no_save && ctx.remember()? {
        match store.save(&domain, &resolved.constraints) {
            Ok(()) => tracing::info!(domain = %domain, "constraints remembered"),
            Err(err) => {
                tracing::warn!(domain = %domain, error = %err, "could not remember constraints");
                eprintln!(
                    "Warning: could not remember constraints for {}: {}",
                    domain, err
                );
            }
        }
    }

    if args.json {
        let value = derivation_json(&domain, &password, &resolved.constraints, resolved.source);
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if resolved.source == ConstraintSource::Saved && !ctx.quiet() {
        eprintln!(
            "Using saved constraints for {}: {}",
            domain, resolved.constraints
        );
    }
    println!("{}", password.as_str());
    Ok(())
}

/// Build the constraints given on the command line.
fn explicit_constraints(args: &DeriveArgs) -> anyhow::Result<Constraints> {
    let mut builder = Constraints::builder().length(args.length.unwrap_or(0));
    for class in &args.require {
        builder = builder.require(*class);
    }
    for class in &args.forbid {
        builder = builder.forbid(*class);
    }
    builder.build().map_err(CliError::from_core)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use genpass_core::CharClass;

    fn derive_args(argv: &[&str]) -> DeriveArgs {
        let mut full = vec!["genpass", "derive"];
        full.extend_from_slice(argv);
        match Cli::try_parse_from(full).expect("should parse").command {
            Some(Commands::Derive(args)) => args,
            _ => panic!("expected derive"),
        }
    }

    #[test]
    fn test_no_flags_is_default() {
        let constraints = explicit_constraints(&derive_args(&["example.com"])).unwrap();
        assert!(constraints.is_default());
    }

    #[test]
    fn test_flags_build_constraints() {
        let args = derive_args(&["example.com", "-l", "10", "-r", "upper", "-f", "special"]);
        let constraints = explicit_constraints(&args).unwrap();
        assert_eq!(constraints.target_length(), 10);
        assert_eq!(constraints.ordered_required_classes(), vec![CharClass::Upper]);
        assert_eq!(
            constraints.ordered_forbidden_classes(),
            vec![CharClass::Special]
        );
    }

    #[test]
    fn test_overlapping_flags_are_constraint_errors() {
        let args = derive_args(&["example.com", "-r", "digit", "-f", "digit"]);
        let err = explicit_constraints(&args).unwrap_err();
        let cli_err = err.downcast_ref::<CliError>().expect("should be a CliError");
        assert!(matches!(cli_err, CliError::Constraint { .. }));
    }
}
