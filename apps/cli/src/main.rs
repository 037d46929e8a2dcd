#![allow(clippy::print_stdout)]

mod args;

use crate::args::Cli;
use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use swa_appsettings::{PushError, RunMode, SettingsPusher, SystemRunner};
use swa_kernel::config::load_config;
use swa_kernel::domain::config::PusherConfig;
use swa_logger::{LevelFilter, Logger};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // The report is already on screen when the apply call fails.
            if matches!(err.downcast_ref::<PushError>(), Some(PushError::ApplyFailed { .. })) {
                println!();
            }
            println!("❌ {err}");
            ExitCode::FAILURE
        },
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config: PusherConfig = load_config(cli.config.as_deref())?;

    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        config
            .log
            .level
            .parse::<LevelFilter>()
            .with_context(|| format!("Invalid log level '{}'", config.log.level))?
    };

    let mut logger = Logger::builder(env!("CARGO_PKG_NAME")).level(level);
    if let Some(path) = &config.log.path {
        logger = logger.path(path);
    }
    let _logger = logger.init()?;

    tracing::debug!(
        config = ?cli.config,
        log_dir = ?config.log.path,
        app = %config.app_name,
        resource_group = %config.resource_group,
        settings = config.settings.len(),
        smtp_pass_override = config.smtp_pass.is_some(),
        "Configuration loaded"
    );

    let pusher = SettingsPusher::from_config(SystemRunner, &config)?;
    let mode = if cli.dry_run { RunMode::DryRun } else { RunMode::Apply };

    pusher.run(&mut std::io::stdout().lock(), mode)?;
    Ok(())
}
