//! Batch input and per-item error reporting.

use anyhow::Result;
use colored::Colorize;
use std::fmt::Display;
use std::io::{BufRead, IsTerminal};

/// Command inputs: the arguments, or stdin lines when there are none.
pub fn inputs(args: Vec<String>) -> Result<Vec<String>> {
    let stdin = std::io::stdin();
    let is_terminal = stdin.is_terminal();
    inputs_from(args, stdin.lock(), is_terminal)
}

/// [`inputs`] with an explicit reader.
///
/// `reader` is consulted when `args` is empty or a single `-`. A terminal
/// reader is never waited on.
pub fn inputs_from(args: Vec<String>, reader: impl BufRead, is_terminal: bool) -> Result<Vec<String>> {
    let wants_stdin = args.is_empty() || (args.len() == 1 && args[0] == "-");
    if !wants_stdin {
        return Ok(args);
    }
    if is_terminal {
        anyhow::bail!("no input given: pass arguments or pipe one input per line on stdin");
    }

    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if !line.trim().is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}

/// Result of running a command over a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Inputs that failed
    pub failed: usize,
}

impl Outcome {
    /// A run where nothing failed
    pub const fn ok() -> Self {
        Self { failed: 0 }
    }
}

/// Collects failures while a command walks its inputs.
#[derive(Debug)]
pub struct Batch {
    no_color: bool,
    failed: usize,
}

impl Batch {
    /// Start a batch
    pub const fn new(no_color: bool) -> Self {
        Self { no_color, failed: 0 }
    }

    /// Keep a success, report a failure and carry on.
    pub fn record<T, E: Display>(&mut self, input: &str, result: std::result::Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.report(input, &e);
                None
            }
        }
    }

    /// Print `Error: <input>: <message>` to stderr.
    pub fn report(&mut self, input: &str, error: &dyn Display) {
        self.failed += 1;
        tracing::debug!(input, error = %error, "input failed");
        let label = if self.no_color {
            "Error:".to_string()
        } else {
            "Error:".red().bold().to_string()
        };
        eprintln!("{label} {input}: {error}");
    }

    /// Number of failures so far
    pub const fn failed(&self) -> usize {
        self.failed
    }

    /// Finish the batch
    pub const fn finish(self) -> Outcome {
        Outcome { failed: self.failed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_arguments_win() {
        let args = vec!["a".to_string(), "b".to_string()];
        let got = inputs_from(args.clone(), Cursor::new("ignored\n"), false).unwrap();
        assert_eq!(got, args);
    }

    #[test]
    fn test_stdin_lines() {
        let got = inputs_from(Vec::new(), Cursor::new("one\r\n\n  \ntwo words\n"), false).unwrap();
        assert_eq!(got, vec!["one", "two words"]);

        let got = inputs_from(vec!["-".to_string()], Cursor::new("x\n"), false).unwrap();
        assert_eq!(got, vec!["x"]);
    }

    #[test]
    fn test_terminal_without_args() {
        assert!(inputs_from(Vec::new(), Cursor::new(""), true).is_err());
    }

    #[test]
    fn test_batch_counts_failures() {
        let mut batch = Batch::new(true);
        assert_eq!(batch.record("a", Ok::<_, String>(1)), Some(1));
        assert_eq!(batch.record::<i32, _>("b", Err("boom")), None);
        assert_eq!(batch.failed(), 1);
        assert_eq!(batch.finish(), Outcome { failed: 1 });
    }
}
