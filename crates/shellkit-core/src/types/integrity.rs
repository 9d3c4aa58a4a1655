use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::one_of;
use crate::ToolError;

/// Hash algorithms allowed in a subresource-integrity attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SriAlgorithm {
    /// sha256
    Sha256,
    /// sha384, the usual choice for SRI
    #[default]
    Sha384,
    /// sha512
    Sha512,
}

impl SriAlgorithm {
    /// Every supported algorithm
    pub const ALL: [Self; 3] = [Self::Sha256, Self::Sha384, Self::Sha512];
}

impl FromStr for SriAlgorithm {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "").as_str() {
            "sha256" => Ok(Self::Sha256),
            "sha384" => Ok(Self::Sha384),
            "sha512" => Ok(Self::Sha512),
            _ => Err(ToolError::invalid("algorithm", s, one_of(&Self::ALL))),
        }
    }
}

impl std::fmt::Display for SriAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sha256 => write!(f, "sha256"),
            Self::Sha384 => write!(f, "sha384"),
            Self::Sha512 => write!(f, "sha512"),
        }
    }
}

/// Subresource-integrity data for one file or URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrityRecord {
    /// Algorithm used
    pub algorithm: SriAlgorithm,
    /// Lowercase hex digest
    pub hash: String,
    /// File path or URL the bytes came from
    pub source: String,
    /// Value for the `integrity` attribute, e.g. `sha384-oqVu...`
    pub integrity: String,
    /// Ready-to-paste HTML snippet
    pub tag: String,
}
