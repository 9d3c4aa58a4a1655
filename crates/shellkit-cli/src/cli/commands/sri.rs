//! `shellkit sri` - Subresource integrity for files and URLs.

use anyhow::Result;
use colored::Colorize;
use shellkit::integrity;
use shellkit::net::Fetcher;

use super::{expand_path, Context};
use crate::cli::args::SriArgs;
use crate::cli::batch::{self, Outcome};
use crate::output;

pub async fn execute(ctx: &Context, args: SriArgs) -> Result<Outcome> {
    let sources = batch::inputs(args.sources)?;
    let algorithm = args
        .algorithm
        .or(ctx.config.sri_algorithm)
        .unwrap_or_default();
    let fetcher = Fetcher::new()?;
    let mut batch = ctx.batch();

    let mut records = Vec::with_capacity(sources.len());
    for source in &sources {
        let located = if Fetcher::is_remote(source) {
            source.clone()
        } else {
            expand_path(source)
        };
        let result = integrity::integrity_for_source(&located, algorithm, &fetcher).await;
        if let Some(record) = batch.record(source, result) {
            records.push(record);
        }
    }

    output::emit(ctx.output_format, &records, |records| {
        for (i, record) in records.iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!("{} {}", "Source:".bold(), record.source.cyan());
            println!("{} {}", "Integrity:".bold(), record.integrity);
            println!("{}", record.tag);
        }
    })?;

    Ok(batch.finish())
}
