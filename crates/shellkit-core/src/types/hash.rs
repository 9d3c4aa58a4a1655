use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::one_of;
use crate::ToolError;

/// Digest algorithm for string hashing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HashAlgorithm {
    /// MD5 (legacy, 128-bit)
    #[serde(alias = "md5")]
    Md5,
    /// SHA-1 (legacy, 160-bit)
    #[serde(alias = "sha1")]
    Sha1,
    /// SHA-256
    #[default]
    #[serde(alias = "sha256")]
    Sha256,
    /// SHA-384
    #[serde(alias = "sha384")]
    Sha384,
    /// SHA-512
    #[serde(alias = "sha512")]
    Sha512,
}

impl HashAlgorithm {
    /// Every supported algorithm
    pub const ALL: [Self; 5] = [Self::Md5, Self::Sha1, Self::Sha256, Self::Sha384, Self::Sha512];

    /// Digest length in bytes
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            Self::Md5 => 16,
            Self::Sha1 => 20,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "").as_str() {
            "md5" => Ok(Self::Md5),
            "sha1" => Ok(Self::Sha1),
            "sha256" => Ok(Self::Sha256),
            "sha384" => Ok(Self::Sha384),
            "sha512" => Ok(Self::Sha512),
            _ => Err(ToolError::invalid("algorithm", s, one_of(&Self::ALL))),
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Md5 => write!(f, "MD5"),
            Self::Sha1 => write!(f, "SHA1"),
            Self::Sha256 => write!(f, "SHA256"),
            Self::Sha384 => write!(f, "SHA384"),
            Self::Sha512 => write!(f, "SHA512"),
        }
    }
}

/// How a digest is rendered as text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestFormat {
    /// Lowercase hexadecimal
    #[default]
    Hex,
    /// Standard padded base64
    Base64,
}

impl DigestFormat {
    /// Every supported format
    pub const ALL: [Self; 2] = [Self::Hex, Self::Base64];
}

impl FromStr for DigestFormat {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "base64" | "b64" => Ok(Self::Base64),
            _ => Err(ToolError::invalid("format", s, one_of(&Self::ALL))),
        }
    }
}

impl std::fmt::Display for DigestFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hex => write!(f, "hex"),
            Self::Base64 => write!(f, "base64"),
        }
    }
}

/// Result of hashing one input string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashResult {
    /// Algorithm used
    pub algorithm: HashAlgorithm,
    /// Encoded digest
    pub hash: String,
    /// Original input
    pub input: String,
}

/// Character encoding applied to text before base64
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextEncoding {
    /// UTF-8
    #[default]
    Utf8,
    /// UTF-16 little endian (what Windows calls "Unicode")
    Utf16le,
    /// 7-bit ASCII, non-ASCII characters replaced with `?`
    Ascii,
}

impl TextEncoding {
    /// Every supported encoding
    pub const ALL: [Self; 3] = [Self::Utf8, Self::Utf16le, Self::Ascii];
}

impl FromStr for TextEncoding {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "").as_str() {
            "utf8" => Ok(Self::Utf8),
            "utf16le" | "utf16" | "unicode" => Ok(Self::Utf16le),
            "ascii" => Ok(Self::Ascii),
            _ => Err(ToolError::invalid("encoding", s, one_of(&Self::ALL))),
        }
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Utf8 => write!(f, "utf8"),
            Self::Utf16le => write!(f, "utf16le"),
            Self::Ascii => write!(f, "ascii"),
        }
    }
}

/// One base64 conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedText {
    /// Text or base64 that was supplied
    pub input: String,
    /// Text encoding in effect
    pub encoding: TextEncoding,
    /// Converted value
    pub output: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_parse_is_case_insensitive() {
        assert_eq!("SHA-256".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha256);
        assert_eq!("md5".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Md5);
        assert!("crc32".parse::<HashAlgorithm>().is_err());
    }

    #[test]
    fn test_algorithm_serializes_uppercase() {
        let json = serde_json::to_string(&HashAlgorithm::Sha512).unwrap();
        assert_eq!(json, "\"SHA512\"");
        assert_eq!(HashAlgorithm::Sha512.to_string(), "SHA512");
    }

    #[test]
    fn test_encoding_aliases() {
        assert_eq!("unicode".parse::<TextEncoding>().unwrap(), TextEncoding::Utf16le);
        assert_eq!("UTF-8".parse::<TextEncoding>().unwrap(), TextEncoding::Utf8);
    }
}
