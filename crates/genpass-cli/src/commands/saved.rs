use genpass_core::ConstraintStore;

use crate::app::AppContext;
use crate::cli::{ForgetArgs, ListArgs, ShowArgs};
use crate::errors::CliError;
use crate::output::{constraints_json, entries_json};

pub fn handle_list(ctx: &AppContext<'_>, args: &ListArgs) -> anyhow::Result<()> {
    let store = ctx.store()?;
    let entries = store.list().map_err(CliError::from_core)?;

    if args.json {
        let output = serde_json::to_string_pretty(&entries_json(&entries))?;
        println!("{}", output);
        return Ok(());
    }

    if entries.is_empty() {
        if !ctx.quiet() {
            println!("No saved constraints.");
        }
        return Ok(());
    }
    if !ctx.quiet() {
        println!("DOMAIN | CONSTRAINTS");
    }
    for (domain, constraints) in &entries {
        println!("{} | {}", domain, constraints);
    }
    Ok(())
}

pub fn handle_show(ctx: &AppContext<'_>, args: &ShowArgs) -> anyhow::Result<()> {
    let store = ctx.store()?;
    let constraints = store
        .load(&args.domain)
        .map_err(CliError::from_core)?
        .ok_or_else(|| not_saved(&args.domain))?;

    if args.json {
        let output = serde_json::to_string_pretty(&constraints_json(&args.domain, &constraints))?;
        println!("{}", output);
    } else {
        println!("{}", constraints);
    }
    Ok(())
}

pub fn handle_forget(ctx: &AppContext<'_>, args: &ForgetArgs) -> anyhow::Result<()> {
    let mut store = ctx.store()?;
    if !store.remove(&args.domain).map_err(CliError::from_core)? {
        return Err(not_saved(&args.domain).into());
    }
    tracing::info!(domain = %args.domain, "constraints forgotten");
    if !ctx.quiet() {
        println!("Forgot saved constraints for {}", args.domain);
    }
    Ok(())
}

fn not_saved(domain: &str) -> CliError {
    CliError::not_found(
        format!("No saved constraints for {}", domain),
        format!(
            "Hint: Constraints are saved by deriving with flags, e.g.\n  genpass derive {} --length 16 --require digit",
            domain
        ),
    )
}
