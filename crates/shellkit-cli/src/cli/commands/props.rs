//! `shellkit props` - Extended file properties.

use anyhow::Result;
use colored::Colorize;
use shellkit::metadata;
use std::path::Path;
use tabled::Tabled;

use super::{expand_path, Context};
use crate::cli::args::PropsArgs;
use crate::cli::batch::{self, Outcome};
use crate::output;

#[derive(Tabled)]
struct PropertyRow {
    #[tabled(rename = "#")]
    index: u32,
    #[tabled(rename = "Property")]
    name: String,
    #[tabled(rename = "Value")]
    value: String,
}

pub fn execute(ctx: &Context, args: PropsArgs) -> Result<Outcome> {
    let paths = batch::inputs(args.paths)?;
    let provider = args.provider.provider();
    tracing::debug!(provider = provider.name(), "metadata provider selected");
    let mut batch = ctx.batch();

    let mut records = Vec::new();
    for raw in &paths {
        let path = expand_path(raw);
        let result = provider
            .properties(Path::new(&path))
            .map(|props| metadata::select(props, &args.indices, args.name.as_deref()));
        if let Some(props) = batch.record(raw, result) {
            records.extend(props);
        }
    }

    output::emit(ctx.output_format, &records, |records| {
        let mut groups: Vec<(&Path, Vec<PropertyRow>)> = Vec::new();
        for p in records {
            let row = PropertyRow {
                index: p.index,
                name: p.name.clone(),
                value: p.value.clone(),
            };
            let same_file = groups.last().is_some_and(|(path, _)| *path == p.path.as_path());
            if same_file {
                if let Some((_, rows)) = groups.last_mut() {
                    rows.push(row);
                }
            } else {
                groups.push((p.path.as_path(), vec![row]));
            }
        }

        for (i, (path, rows)) in groups.into_iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!("{}", path.display().to_string().cyan().bold());
            println!("{}", output::table(rows));
        }
    })?;

    Ok(batch.finish())
}
