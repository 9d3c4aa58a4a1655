//! `shellkit ratio` - Size-to-duration ratio of media files.

use anyhow::Result;
use shellkit::metadata;
use std::path::Path;
use tabled::Tabled;

use super::{expand_path, Context};
use crate::cli::args::RatioArgs;
use crate::cli::batch::{self, Outcome};
use crate::output;

#[derive(Tabled)]
struct RatioRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Size (KB)")]
    size_kb: String,
    #[tabled(rename = "Duration (s)")]
    duration: String,
    #[tabled(rename = "KB/s")]
    ratio: String,
}

pub fn execute(ctx: &Context, args: RatioArgs) -> Result<Outcome> {
    let paths = batch::inputs(args.paths)?;
    let provider = args.provider.provider();
    let mut batch = ctx.batch();

    let mut records: Vec<_> = paths
        .iter()
        .filter_map(|raw| {
            let path = expand_path(raw);
            batch.record(raw, metadata::size_duration_ratio(provider.as_ref(), Path::new(&path)))
        })
        .collect();

    if args.sort {
        records.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));
    }

    output::emit(ctx.output_format, &records, |records| {
        let rows = records.iter().map(|r| RatioRow {
            name: r.name.clone(),
            size_kb: format!("{:.1}", r.size_kb),
            duration: format!("{:.1}", r.duration_secs),
            ratio: format!("{:.2}", r.ratio),
        });
        println!("{}", output::table(rows));
    })?;

    Ok(batch.finish())
}
