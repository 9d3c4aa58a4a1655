//! `shellkit hash` - Hash strings.

use anyhow::Result;
use colored::Colorize;
use shellkit::hash;
use tabled::Tabled;

use super::Context;
use crate::cli::args::HashArgs;
use crate::cli::batch::{self, Outcome};
use crate::output;

#[derive(Tabled)]
struct HashRow {
    #[tabled(rename = "Algorithm")]
    algorithm: String,
    #[tabled(rename = "Hash")]
    hash: String,
    #[tabled(rename = "Input")]
    input: String,
}

pub fn execute(ctx: &Context, args: HashArgs) -> Result<Outcome> {
    let inputs = batch::inputs(args.inputs)?;
    let algorithm = args
        .algorithm
        .or(ctx.config.hash_algorithm)
        .unwrap_or_default();

    let records: Vec<_> = inputs
        .iter()
        .map(|input| hash::hash_string(input, algorithm, args.format))
        .collect();

    output::emit(ctx.output_format, &records, |records| {
        // A single digest prints bare so it can be captured by the shell
        if let [only] = records {
            println!("{}", only.hash);
            return;
        }
        let rows = records.iter().map(|r| HashRow {
            algorithm: r.algorithm.to_string().yellow().to_string(),
            hash: r.hash.clone(),
            input: r.input.chars().take(40).collect(),
        });
        println!("{}", output::table(rows));
    })?;

    Ok(Outcome::ok())
}
