//! Command implementations.

pub mod base64;
pub mod browse;
pub mod config;
pub mod doc_ip;
pub mod doc_phone;
pub mod hash;
pub mod help_md;
pub mod port;
pub mod props;
pub mod random;
pub mod ratio;
pub mod sri;

use shellkit::Catalog;

use super::batch::Batch;
use crate::config::Config;
use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output format
    pub output_format: OutputFormat,

    /// Disable colors
    pub no_color: bool,

    /// Loaded configuration
    pub config: Config,

    /// Constant tables with config overrides applied
    pub catalog: Catalog,
}

impl Context {
    /// Start a batch that reports failures in this context's style.
    pub const fn batch(&self) -> Batch {
        Batch::new(self.no_color)
    }
}

/// Expand `~` and environment variables in a user-supplied path.
pub fn expand_path(raw: &str) -> String {
    shellexpand::full(raw).map_or_else(|_| raw.to_string(), |p| p.into_owned())
}
