//! `shellkit config` - CLI configuration management.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::cli::batch::Outcome;
use crate::config::Config;
use crate::output::OutputFormat;

pub fn execute(ctx: &Context, args: ConfigArgs) -> Result<Outcome> {
    match args.command {
        ConfigCommands::Show => show_config(ctx)?,
        ConfigCommands::Set { key, value } => set_config(&key, &value)?,
        ConfigCommands::Path => show_path()?,
    }
    Ok(Outcome::ok())
}

fn display<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "(not set)".dimmed().to_string(), |v| v.to_string())
}

fn show_config(ctx: &Context) -> Result<()> {
    let config = &ctx.config;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(config)?);
        }
        _ => {
            println!("{}", "Current Configuration:".bold());
            println!();

            println!("  {} {}", "output_format:".bold(), display(config.output_format));
            println!("  {} {}", "port_timeout_ms:".bold(), display(config.port_timeout_ms));
            println!("  {} {}", "hash_algorithm:".bold(), display(config.hash_algorithm));
            println!("  {} {}", "sri_algorithm:".bold(), display(config.sri_algorithm));
            println!("  {} {}", "phone_format:".bold(), display(config.phone_format));
            println!("  {} {}", "browser:".bold(), display(config.browser));
            println!("  {} {}", "open_selected:".bold(), config.open_selected);

            let codes = config.area_codes.as_ref().map(|codes| {
                codes.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
            });
            println!("  {} {}", "area_codes:".bold(), display(codes));

            for (category, extensions) in &config.extensions {
                println!(
                    "  {} {}",
                    format!("extensions.{category}:").bold(),
                    extensions.join(", ")
                );
            }
        }
    }

    Ok(())
}

fn set_config(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    println!("{} {} set to {}.", "Success:".green().bold(), key, value.cyan());
    Ok(())
}

fn show_path() -> Result<()> {
    let path = Config::path()?;
    println!("{}", path.display());
    Ok(())
}
