//! Network operations for shellkit.
//!
//! - [`PortProber`]: bounded TCP connect checks
//! - [`Fetcher`]: plain HTTP GET of remote resources (used for SRI hashing)

#![doc(html_root_url = "https://docs.rs/shellkit-net/0.3.0")]

mod fetch;
mod probe;

pub use fetch::{Fetcher, FetcherBuilder};
pub use probe::{PortProber, DEFAULT_PROBE_TIMEOUT};
