//! shellkit - personal shell utility toolkit
//!
//! Hashing, base64, SRI, port probes, documentation data, file sampling
//! and a few other small helpers behind one binary.

use anyhow::Result;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    shellkit_cli::run().await
}
