//! Extended file properties and media size/duration ratios.
//!
//! Property lookup goes through [`MetadataProvider`]. The Windows shell's
//! COM property system has no portable equivalent, so the toolkit ships a
//! [`PortableMetadata`] provider that rebuilds the commonly used columns
//! from filesystem metadata and file headers, plus a [`NullMetadata`] stub
//! that reports nothing.

mod media;
mod portable;
mod ratio;

use shellkit_core::{ExtendedProperty, Result};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

pub use media::{image_dimensions, wav_duration};
pub use portable::PortableMetadata;
pub use ratio::size_duration_ratio;

/// Source of shell-style file properties
pub trait MetadataProvider {
    /// Short provider name for logs
    fn name(&self) -> &'static str;

    /// All non-empty properties of a file, ordered by index
    fn properties(&self, path: &Path) -> Result<Vec<ExtendedProperty>>;

    /// Playback duration, if the file is media and the provider can read it
    fn duration(&self, path: &Path) -> Result<Option<Duration>>;
}

/// Provider that knows nothing about any file.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullMetadata;

impl MetadataProvider for NullMetadata {
    fn name(&self) -> &'static str {
        "none"
    }

    fn properties(&self, _path: &Path) -> Result<Vec<ExtendedProperty>> {
        Ok(Vec::new())
    }

    fn duration(&self, _path: &Path) -> Result<Option<Duration>> {
        Ok(None)
    }
}

/// Which provider to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    /// [`PortableMetadata`]
    #[default]
    Portable,
    /// [`NullMetadata`]
    None,
}

impl ProviderKind {
    /// Instantiate the provider
    #[must_use]
    pub fn provider(self) -> Box<dyn MetadataProvider> {
        match self {
            Self::Portable => Box::new(PortableMetadata),
            Self::None => Box::new(NullMetadata),
        }
    }
}

impl FromStr for ProviderKind {
    type Err = shellkit_core::ToolError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "portable" => Ok(Self::Portable),
            "none" | "null" => Ok(Self::None),
            _ => Err(shellkit_core::ToolError::invalid("provider", s, "one of portable, none")),
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Portable => write!(f, "portable"),
            Self::None => write!(f, "none"),
        }
    }
}

/// Keep the properties matching the index list (if any) and whose name
/// contains `name` case-insensitively (if given).
#[must_use]
pub fn select(
    properties: Vec<ExtendedProperty>,
    indices: &[u32],
    name: Option<&str>,
) -> Vec<ExtendedProperty> {
    let needle = name.map(str::to_lowercase);
    properties
        .into_iter()
        .filter(|p| indices.is_empty() || indices.contains(&p.index))
        .filter(|p| {
            needle
                .as_deref()
                .map_or(true, |n| p.name.to_lowercase().contains(n))
        })
        .collect()
}
