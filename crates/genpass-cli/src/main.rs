//! genpass CLI - Derive per-site passwords from a single passphrase
//!
//! This is the command-line interface for genpass. It provides a user-friendly
//! interface to the core library functionality.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod logging;
mod output;

use clap::Parser;

use genpass_core::VERSION;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{
    handle_completions, handle_derive, handle_forget, handle_init, handle_list, handle_show,
};
use crate::errors::CliError;
use crate::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    let config_level = ctx
        .config()
        .ok()
        .and_then(|config| config.logging.level.clone());
    init_logging(cli.verbose, config_level.as_deref());

    if let Err(err) = run(&ctx, cli.command.as_ref()) {
        if let Some(cli_err) = err.downcast_ref::<CliError>() {
            cli_err.exit()
        }
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(ctx: &AppContext<'_>, command: Option<&Commands>) -> anyhow::Result<()> {
    match command {
        Some(Commands::Derive(args)) => handle_derive(ctx, args),
        Some(Commands::List(args)) => handle_list(ctx, args),
        Some(Commands::Show(args)) => handle_show(ctx, args),
        Some(Commands::Forget(args)) => handle_forget(ctx, args),
        Some(Commands::Init(args)) => handle_init(args, ctx.quiet()),
        Some(Commands::Completions { shell }) => handle_completions(*shell),
        None => {
            println!("genpass v{}", VERSION);
            println!("\nRun `genpass --help` for usage information.");
            Ok(())
        }
    }
}
