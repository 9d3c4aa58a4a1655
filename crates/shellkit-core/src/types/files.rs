use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

use super::one_of;
use crate::ToolError;

/// File category used by the random sampler
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    /// Every extension from the other categories
    #[default]
    All,
    /// Video containers
    Video,
    /// Audio files
    Audio,
    /// Still images
    Image,
    /// Office documents and text
    Document,
}

impl FileCategory {
    /// Every category
    pub const ALL: [Self; 5] = [Self::All, Self::Video, Self::Audio, Self::Image, Self::Document];

    /// Name of this category's list cache inside a directory
    #[must_use]
    pub fn cache_file_name(self) -> String {
        format!("{self}-cache.txt")
    }
}

impl FromStr for FileCategory {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "video" | "videos" => Ok(Self::Video),
            "audio" => Ok(Self::Audio),
            "image" | "images" => Ok(Self::Image),
            "document" | "documents" => Ok(Self::Document),
            _ => Err(ToolError::invalid("category", s, one_of(&Self::ALL))),
        }
    }
}

impl std::fmt::Display for FileCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Video => write!(f, "video"),
            Self::Audio => write!(f, "audio"),
            Self::Image => write!(f, "image"),
            Self::Document => write!(f, "document"),
        }
    }
}

/// One shell-style property of a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedProperty {
    /// File the property belongs to
    pub path: PathBuf,
    /// Property column index, as numbered by the Windows shell
    pub index: u32,
    /// Property name
    pub name: String,
    /// Property value as text
    pub value: String,
}

/// Bytes-per-second style density of a media file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeDurationRatio {
    /// File path
    pub path: PathBuf,
    /// File name
    pub name: String,
    /// Size in kilobytes (1 KB = 1024 bytes)
    pub size_kb: f64,
    /// Playback duration in seconds
    pub duration_secs: f64,
    /// `size_kb / duration_secs`
    pub ratio: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_file_name() {
        assert_eq!(FileCategory::Video.cache_file_name(), "video-cache.txt");
        assert_eq!(FileCategory::All.cache_file_name(), "all-cache.txt");
    }

    #[test]
    fn test_category_rejects_unknown() {
        assert!("spreadsheet".parse::<FileCategory>().is_err());
        assert_eq!("Images".parse::<FileCategory>().unwrap(), FileCategory::Image);
    }
}
