//! `shellkit doc-phone` - Fictional 555 phone numbers.

use anyhow::Result;
use shellkit::documentation;

use super::Context;
use crate::cli::args::DocPhoneArgs;
use crate::cli::batch::Outcome;
use crate::output;

pub fn execute(ctx: &Context, args: &DocPhoneArgs) -> Result<Outcome> {
    let format = args.format.or(ctx.config.phone_format).unwrap_or_default();
    let mut rng = rand::rng();
    let records: Vec<_> = (0..args.count)
        .map(|_| documentation::phone_number(&ctx.catalog, format, &mut rng))
        .collect();

    output::emit(ctx.output_format, &records, |records| {
        for record in records {
            println!("{}", record.formatted);
        }
    })?;

    Ok(Outcome::ok())
}
