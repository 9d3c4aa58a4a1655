//! Value records and input selectors.

mod browser;
mod files;
mod hash;
mod integrity;
mod network;
mod phone;

pub use browser::*;
pub use files::*;
pub use hash::*;
pub use integrity::*;
pub use network::*;
pub use phone::*;

/// Join selector names for use in validation messages.
pub(crate) fn one_of<T: std::fmt::Display>(values: &[T]) -> String {
    let names: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("one of {}", names.join(", "))
}
