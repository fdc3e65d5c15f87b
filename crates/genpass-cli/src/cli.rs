use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use genpass_core::{CharClass, VERSION};

use crate::constants::env_vars;

/// genpass - Derive per-site passwords from a single passphrase
#[derive(Parser)]
#[command(name = "genpass")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the saved-constraints file
    #[arg(short, long, global = true, env = env_vars::STORE)]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments for the `derive` command
#[derive(Args)]
pub struct DeriveArgs {
    /// Domain label (e.g. google); prompted for when omitted
    #[arg(value_name = "DOMAIN")]
    pub domain: Option<String>,

    /// Trim to this many characters (default: full 44-character encoding)
    #[arg(short, long, value_name = "N")]
    pub length: Option<usize>,

    /// Require at least one character of a class (digit, special, upper, lower)
    #[arg(short, long, value_name = "CLASS", value_delimiter = ',')]
    pub require: Vec<CharClass>,

    /// Forbid every character of a class (digit, special, upper, lower)
    #[arg(short, long, value_name = "CLASS", value_delimiter = ',')]
    pub forbid: Vec<CharClass>,

    /// Do not remember explicit constraints for this domain
    #[arg(long)]
    pub no_save: bool,

    /// Ask for the passphrase twice
    #[arg(long)]
    pub confirm: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Domain label
    #[arg(value_name = "DOMAIN")]
    pub domain: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `forget` command
#[derive(Args)]
pub struct ForgetArgs {
    /// Domain label
    #[arg(value_name = "DOMAIN")]
    pub domain: String,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,

    /// Constraint store path to record in the config
    #[arg(long, value_name = "PATH")]
    pub store_path: Option<String>,

    /// Do not remember constraints by default
    #[arg(long)]
    pub no_remember: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Derive the password for a domain
    Derive(DeriveArgs),

    /// List domains with saved constraints
    List(ListArgs),

    /// Show the saved constraints for a domain
    Show(ShowArgs),

    /// Remove the saved constraints for a domain
    Forget(ForgetArgs),

    /// Write a default config file
    Init(InitArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}
