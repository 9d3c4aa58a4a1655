//! `shellkit base64` - Encode text to base64 or decode it.

use anyhow::Result;
use shellkit::encode;

use super::Context;
use crate::cli::args::Base64Args;
use crate::cli::batch::{self, Outcome};
use crate::output;

pub fn execute(ctx: &Context, args: Base64Args) -> Result<Outcome> {
    let inputs = batch::inputs(args.inputs)?;
    let mut batch = ctx.batch();

    let records: Vec<_> = inputs
        .iter()
        .filter_map(|input| {
            let result = if args.decode {
                encode::decode(input, args.encoding)
            } else {
                Ok(encode::encode(input, args.encoding))
            };
            batch.record(input, result)
        })
        .collect();

    output::emit(ctx.output_format, &records, |records| {
        for record in records {
            println!("{}", record.output);
        }
    })?;

    Ok(batch.finish())
}
