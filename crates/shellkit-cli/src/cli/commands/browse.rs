//! `shellkit browse` - Open URLs in a browser.

use anyhow::Result;
use clap::CommandFactory;
use colored::Colorize;
use serde::Serialize;
use shellkit::browser;

use super::Context;
use crate::cli::args::{BrowseArgs, Cli};
use crate::cli::batch::{self, Outcome};
use crate::output;

#[derive(Serialize)]
struct Opened {
    browser: String,
    private: bool,
    url: String,
}

pub fn execute(ctx: &Context, args: BrowseArgs) -> Result<Outcome> {
    let chosen = args.browser.or(ctx.config.browser).unwrap_or_default();

    if args.private && chosen.private_flag().is_none() {
        Cli::command()
            .error(
                clap::error::ErrorKind::ArgumentConflict,
                format!("--private needs a named browser, not '{chosen}'"),
            )
            .exit();
    }

    let urls = batch::inputs(args.urls)?;
    let mut batch = ctx.batch();

    let mut records = Vec::new();
    for url in &urls {
        if let Some(plan) = batch.record(url, browser::launch(chosen, args.private, url)) {
            records.push(Opened {
                browser: chosen.to_string(),
                private: args.private,
                url: plan.url,
            });
        }
    }

    output::emit(ctx.output_format, &records, |records| {
        for opened in records {
            println!("{} {} ({})", "Opened".green(), opened.url, opened.browser);
        }
    })?;

    Ok(batch.finish())
}
