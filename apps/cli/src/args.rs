//! # CLI Argument Definitions
//!
//! Every flag is optional; running without arguments performs the full push.

use clap::Parser;
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "swa-settings")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Push SMTP and application URL settings to an Azure Static Web App")]
pub(crate) struct Cli {
    /// Configuration file (defaults to ./swa-settings.toml when present)
    #[arg(short, long, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    /// Check the session and print the planned settings without applying them
    #[arg(long)]
    pub(crate) dry_run: bool,

    /// Print debug diagnostics on stderr
    #[arg(short, long)]
    pub(crate) verbose: bool,
}
