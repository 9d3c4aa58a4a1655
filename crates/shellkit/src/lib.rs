//! Personal shell-utility toolkit.
//!
//! Every module is an independent command: none depends on another's
//! state. Shared constant tables live in [`Catalog`], which callers build
//! once and pass in.
//!
//! # Quick Start
//!
//! ```rust
//! use shellkit::{hash, DigestFormat, HashAlgorithm};
//!
//! let result = hash::hash_string("hello world", HashAlgorithm::Sha256, DigestFormat::Hex);
//! assert_eq!(
//!     result.hash,
//!     "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
//! );
//! ```
//!
//! Network operations (port probing, remote SRI fetches) are re-exported
//! from `shellkit-net` as [`net`].

#![doc(html_root_url = "https://docs.rs/shellkit/0.3.0")]

pub mod browser;
pub mod documentation;
pub mod encode;
pub mod hash;
pub mod helpdoc;
pub mod integrity;
pub mod metadata;
pub mod sampler;

// Re-export core types
pub use shellkit_core::*;

// Re-export network operations
pub use shellkit_net as net;
