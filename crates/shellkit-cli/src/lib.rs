//! # shellkit-cli
//!
//! Command-line front end for the [`shellkit`] library.
//!
//! ## Features
//!
//! - **Batch input**: every command takes inputs as arguments or one per
//!   line on stdin, and keeps going when a single input fails
//! - **Multiple output formats**: pretty tables, JSON, CSV, YAML
//! - **Persistent defaults**: `shellkit config set <key> <value>`

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
