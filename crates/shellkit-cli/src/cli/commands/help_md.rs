//! `shellkit help-md` - Convert help text to markdown.

use anyhow::{Context as _, Result};
use serde::Serialize;
use shellkit::helpdoc;
use std::io::Read;

use super::{expand_path, Context};
use crate::cli::args::HelpMdArgs;
use crate::cli::batch::Outcome;
use crate::output;

#[derive(Serialize)]
struct HelpDocument {
    source: String,
    markdown: String,
}

pub fn execute(ctx: &Context, args: HelpMdArgs) -> Result<Outcome> {
    let (source, text) = match (args.file, args.command) {
        (Some(file), _) => {
            let path = expand_path(&file);
            let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            (path, text)
        }
        (None, Some(program)) => {
            let text = helpdoc::help_for_command(&program)?;
            (format!("{program} --help"), text)
        }
        (None, None) => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading help text from stdin")?;
            ("stdin".to_string(), text)
        }
    };

    let record = HelpDocument {
        markdown: helpdoc::to_markdown(&text),
        source,
    };

    output::emit(ctx.output_format, std::slice::from_ref(&record), |records| {
        for doc in records {
            print!("{}", doc.markdown);
        }
    })?;

    Ok(Outcome::ok())
}
