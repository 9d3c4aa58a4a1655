//! CLI argument parsing and command dispatch.

pub mod args;
pub mod batch;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Install the stderr log subscriber. `RUST_LOG` overrides `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // A subscriber may already be installed when embedded in tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Run the CLI application.
///
/// Exits 1 when any input of the batch failed.
pub async fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load configuration
    let config = Config::load()?;
    let catalog = config.catalog()?;

    // Determine output format
    let output_format = cli.output.or(config.output_format).unwrap_or_default();

    // Create context for commands
    let ctx = commands::Context {
        output_format,
        no_color: cli.no_color,
        config,
        catalog,
    };

    // Dispatch to appropriate command
    let outcome = match cli.command {
        Commands::Base64(args) => commands::base64::execute(&ctx, args)?,
        Commands::Hash(args) => commands::hash::execute(&ctx, args)?,
        Commands::Sri(args) => commands::sri::execute(&ctx, args).await?,
        Commands::Port(args) => commands::port::execute(&ctx, args).await?,
        Commands::DocIp(args) => commands::doc_ip::execute(&ctx, &args)?,
        Commands::DocPhone(args) => commands::doc_phone::execute(&ctx, &args)?,
        Commands::Props(args) => commands::props::execute(&ctx, args)?,
        Commands::Ratio(args) => commands::ratio::execute(&ctx, args)?,
        Commands::Random(args) => commands::random::execute(&ctx, args)?,
        Commands::HelpMd(args) => commands::help_md::execute(&ctx, args)?,
        Commands::Browse(args) => commands::browse::execute(&ctx, args)?,
        Commands::Config(args) => commands::config::execute(&ctx, args)?,
    };

    tracing::debug!(failed = outcome.failed, "command finished");
    Ok(if outcome.failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
