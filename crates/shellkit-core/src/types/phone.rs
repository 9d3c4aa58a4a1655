use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::one_of;
use crate::ToolError;

/// Rendering style for a generated NANP number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneFormat {
    /// `212-555-0142`
    #[default]
    Dashed,
    /// `(212) 555-0142`
    Parens,
    /// `212.555.0142`
    Dotted,
    /// `+12125550142`
    E164,
    /// `+1 212 555 0142`
    International,
    /// `2125550142`
    Digits,
}

impl PhoneFormat {
    /// Every supported format
    pub const ALL: [Self; 6] = [
        Self::Dashed,
        Self::Parens,
        Self::Dotted,
        Self::E164,
        Self::International,
        Self::Digits,
    ];

    /// Render the three number parts in this style
    #[must_use]
    pub fn render(self, area_code: u16, exchange: u16, line: u16) -> String {
        match self {
            Self::Dashed => format!("{area_code:03}-{exchange:03}-{line:04}"),
            Self::Parens => format!("({area_code:03}) {exchange:03}-{line:04}"),
            Self::Dotted => format!("{area_code:03}.{exchange:03}.{line:04}"),
            Self::E164 => format!("+1{area_code:03}{exchange:03}{line:04}"),
            Self::International => format!("+1 {area_code:03} {exchange:03} {line:04}"),
            Self::Digits => format!("{area_code:03}{exchange:03}{line:04}"),
        }
    }
}

impl FromStr for PhoneFormat {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dashed" => Ok(Self::Dashed),
            "parens" => Ok(Self::Parens),
            "dotted" => Ok(Self::Dotted),
            "e164" => Ok(Self::E164),
            "international" | "intl" => Ok(Self::International),
            "digits" => Ok(Self::Digits),
            _ => Err(ToolError::invalid("format", s, one_of(&Self::ALL))),
        }
    }
}

impl std::fmt::Display for PhoneFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Dashed => "dashed",
            Self::Parens => "parens",
            Self::Dotted => "dotted",
            Self::E164 => "e164",
            Self::International => "international",
            Self::Digits => "digits",
        };
        f.write_str(name)
    }
}

/// A fictional North American number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    /// Three-digit area code
    pub area_code: u16,
    /// Exchange, always 555
    pub exchange: u16,
    /// Line number in 0100..=0199
    pub line: u16,
    /// Number rendered in the requested format
    pub formatted: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_pads_line() {
        assert_eq!(PhoneFormat::Dashed.render(212, 555, 100), "212-555-0100");
        assert_eq!(PhoneFormat::Parens.render(415, 555, 142), "(415) 555-0142");
        assert_eq!(PhoneFormat::E164.render(312, 555, 199), "+13125550199");
        assert_eq!(PhoneFormat::International.render(312, 555, 101), "+1 312 555 0101");
    }

    #[test]
    fn test_unknown_format_rejected() {
        let err = "roman".parse::<PhoneFormat>().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("dashed"));
    }
}
