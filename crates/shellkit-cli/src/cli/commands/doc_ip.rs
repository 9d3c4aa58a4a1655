//! `shellkit doc-ip` - Addresses reserved for documentation.

use anyhow::Result;
use shellkit::documentation;

use super::Context;
use crate::cli::args::DocIpArgs;
use crate::cli::batch::Outcome;
use crate::output;

pub fn execute(ctx: &Context, args: &DocIpArgs) -> Result<Outcome> {
    let mut rng = rand::rng();
    let records: Vec<_> = (0..args.count)
        .map(|_| documentation::documentation_ip(args.version, &mut rng))
        .collect();

    output::emit(ctx.output_format, &records, |records| {
        for record in records {
            println!("{}", record.address);
        }
    })?;

    Ok(Outcome::ok())
}
