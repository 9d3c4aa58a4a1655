//! `shellkit random` - Pick random files of a category.

use anyhow::Result;
use serde::Serialize;
use shellkit::sampler::{open_all, SampleRequest, Sampler, SystemOpener};
use std::path::PathBuf;

use super::{expand_path, Context};
use crate::cli::args::RandomArgs;
use crate::cli::batch::Outcome;
use crate::output;

#[derive(Serialize)]
struct Pick {
    path: PathBuf,
}

pub fn execute(ctx: &Context, args: RandomArgs) -> Result<Outcome> {
    let mut request = SampleRequest::new(expand_path(&args.dir), args.category)
        .count(usize::try_from(args.count)?)
        .refresh(args.refresh);
    if let Some(filter) = args.filter {
        request = request.filter(filter);
    }

    let picked = Sampler::new(&ctx.catalog).sample(&request, &mut rand::rng())?;

    let records: Vec<Pick> = picked.iter().cloned().map(|path| Pick { path }).collect();
    output::emit(ctx.output_format, &records, |records| {
        for pick in records {
            println!("{}", pick.path.display());
        }
    })?;

    let mut batch = ctx.batch();
    if ctx.config.open_selected && !args.no_open {
        for (path, result) in picked.iter().zip(open_all(&SystemOpener, picked.as_slice())) {
            batch.record(&path.display().to_string(), result);
        }
    }

    Ok(batch.finish())
}
