//! Core types and errors for the shellkit toolkit.
//!
//! This crate provides the foundational pieces shared by every command:
//!
//! - **Types**: value records returned by each command and the enumerated
//!   selectors that validate user input before anything runs
//! - **Catalog**: the constant tables (extensions, area codes, documentation
//!   prefixes) injected into operations at startup
//! - **Errors**: a single [`ToolError`] grouped into three [`ErrorKind`]s
//!
//! # Example
//!
//! ```rust
//! use shellkit_core::{HashAlgorithm, ToolError};
//!
//! let alg: HashAlgorithm = "sha384".parse().unwrap();
//! assert_eq!(alg.to_string(), "SHA384");
//!
//! let err = "whirlpool".parse::<HashAlgorithm>().unwrap_err();
//! assert!(matches!(err, ToolError::InvalidValue { .. }));
//! ```

#![doc(html_root_url = "https://docs.rs/shellkit-core/0.3.0")]

pub mod catalog;
mod error;
pub mod types;

pub use catalog::Catalog;
pub use error::{ErrorKind, Result, ToolError};
pub use types::*;
