//! Constant tables shared by several commands.
//!
//! A [`Catalog`] is built once at startup, optionally adjusted from the
//! user's configuration, and then passed by reference to the operations
//! that need it.

use std::collections::BTreeMap;
use std::path::Path;

use crate::{FileCategory, Result, ToolError};

/// RFC 5737 documentation networks (TEST-NET-1, -2 and -3).
pub const IPV4_DOCUMENTATION_PREFIXES: [[u8; 3]; 3] = [[192, 0, 2], [198, 51, 100], [203, 0, 113]];

/// RFC 3849 documentation prefix, written the way generated addresses start.
pub const IPV6_DOCUMENTATION_PREFIX: &str = "2001:0DB8:";

/// Exchange reserved for fictional numbers.
pub const FICTIONAL_EXCHANGE: u16 = 555;

/// Line numbers reserved for fictional use within the 555 exchange.
pub const FICTIONAL_LINES: std::ops::RangeInclusive<u16> = 100..=199;

/// In-service geographic NANP area codes.
pub const DEFAULT_AREA_CODES: [u16; 48] = [
    201, 202, 203, 205, 206, 207, 208, 212, 213, 214, 215, 216, 217, 301, 302, 303, 304, 305,
    307, 312, 313, 314, 315, 401, 402, 404, 405, 406, 415, 416, 503, 505, 512, 602, 604, 614,
    617, 702, 713, 801, 802, 808, 816, 905, 907, 916, 917, 919,
];

const VIDEO_EXTENSIONS: [&str; 10] = ["mp4", "mkv", "avi", "mov", "wmv", "flv", "webm", "m4v", "mpg", "mpeg"];
const AUDIO_EXTENSIONS: [&str; 8] = ["mp3", "wav", "flac", "aac", "ogg", "m4a", "wma", "opus"];
const IMAGE_EXTENSIONS: [&str; 9] = ["jpg", "jpeg", "png", "gif", "bmp", "tiff", "webp", "heic", "svg"];
const DOCUMENT_EXTENSIONS: [&str; 12] = [
    "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "txt", "md", "rtf", "odt", "csv",
];

/// Immutable lookup tables for extensions, area codes and reserved prefixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    extensions: BTreeMap<FileCategory, Vec<String>>,
    area_codes: Vec<u16>,
}

impl Default for Catalog {
    fn default() -> Self {
        let owned = |list: &[&str]| list.iter().map(|e| (*e).to_string()).collect::<Vec<_>>();

        let mut extensions = BTreeMap::new();
        extensions.insert(FileCategory::Video, owned(&VIDEO_EXTENSIONS));
        extensions.insert(FileCategory::Audio, owned(&AUDIO_EXTENSIONS));
        extensions.insert(FileCategory::Image, owned(&IMAGE_EXTENSIONS));
        extensions.insert(FileCategory::Document, owned(&DOCUMENT_EXTENSIONS));

        Self {
            extensions,
            area_codes: DEFAULT_AREA_CODES.to_vec(),
        }
    }
}

impl Catalog {
    /// Replace the approved area code list.
    ///
    /// Every code must be a valid geographic NANP code: three digits, first
    /// digit 2-9, and not of the N11 service form.
    pub fn with_area_codes(mut self, codes: Vec<u16>) -> Result<Self> {
        if codes.is_empty() {
            return Err(ToolError::invalid("area_codes", "[]", "at least one area code"));
        }
        if let Some(bad) = codes.iter().find(|c| !is_valid_area_code(**c)) {
            return Err(ToolError::invalid(
                "area_codes",
                bad.to_string(),
                "a NANP area code between 200 and 999, not N11",
            ));
        }
        self.area_codes = codes;
        Ok(self)
    }

    /// Replace the extension list of one concrete category.
    ///
    /// `all` cannot be set directly; it is always the union of the others.
    pub fn with_extensions(mut self, category: FileCategory, extensions: Vec<String>) -> Result<Self> {
        if category == FileCategory::All {
            return Err(ToolError::invalid(
                "category",
                "all",
                "a concrete category (video, audio, image, document)",
            ));
        }
        let normalized = extensions
            .into_iter()
            .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        self.extensions.insert(category, normalized);
        Ok(self)
    }

    /// Approved area codes
    #[must_use]
    pub fn area_codes(&self) -> &[u16] {
        &self.area_codes
    }

    /// Extensions belonging to a category (lowercase, without dot)
    #[must_use]
    pub fn extensions(&self, category: FileCategory) -> Vec<&str> {
        match category {
            FileCategory::All => {
                let mut all: Vec<&str> = self
                    .extensions
                    .values()
                    .flat_map(|list| list.iter().map(String::as_str))
                    .collect();
                all.sort_unstable();
                all.dedup();
                all
            }
            other => self
                .extensions
                .get(&other)
                .map(|list| list.iter().map(String::as_str).collect())
                .unwrap_or_default(),
        }
    }

    /// Returns true if the path's extension belongs to the category
    #[must_use]
    pub fn matches(&self, category: FileCategory, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        let ext = ext.to_ascii_lowercase();
        self.extensions(category).iter().any(|e| *e == ext)
    }
}

const fn is_valid_area_code(code: u16) -> bool {
    code >= 200 && code <= 999 && code % 100 != 11
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_area_codes_are_valid() {
        assert!(DEFAULT_AREA_CODES.iter().all(|c| is_valid_area_code(*c)));
    }

    #[test]
    fn test_all_is_union() {
        let catalog = Catalog::default();
        let all = catalog.extensions(FileCategory::All);
        assert!(all.contains(&"mkv"));
        assert!(all.contains(&"flac"));
        assert!(all.contains(&"png"));
        assert!(all.contains(&"docx"));
        assert_eq!(
            all.len(),
            VIDEO_EXTENSIONS.len() + AUDIO_EXTENSIONS.len() + IMAGE_EXTENSIONS.len() + DOCUMENT_EXTENSIONS.len()
        );
    }

    #[test]
    fn test_matches_ignores_case() {
        let catalog = Catalog::default();
        assert!(catalog.matches(FileCategory::Video, Path::new("/tmp/Clip.MP4")));
        assert!(!catalog.matches(FileCategory::Audio, Path::new("/tmp/Clip.MP4")));
        assert!(!catalog.matches(FileCategory::All, Path::new("/tmp/README")));
    }

    #[test]
    fn test_override_area_codes() {
        let catalog = Catalog::default().with_area_codes(vec![303, 720]).unwrap();
        assert_eq!(catalog.area_codes(), &[303, 720]);

        assert!(Catalog::default().with_area_codes(vec![911]).is_err());
        assert!(Catalog::default().with_area_codes(vec![123]).is_err());
        assert!(Catalog::default().with_area_codes(Vec::new()).is_err());
    }

    #[test]
    fn test_override_extensions_normalizes() {
        let catalog = Catalog::default()
            .with_extensions(FileCategory::Image, vec![".PNG".into(), " raw ".into()])
            .unwrap();
        assert_eq!(catalog.extensions(FileCategory::Image), vec!["png", "raw"]);
        assert!(Catalog::default()
            .with_extensions(FileCategory::All, vec!["x".into()])
            .is_err());
    }
}
