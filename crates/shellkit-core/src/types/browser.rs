use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::one_of;
use crate::ToolError;

/// Browser to open URLs with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Browser {
    /// Whatever the platform has registered for URLs
    #[default]
    Default,
    /// Google Chrome or Chromium
    Chrome,
    /// Mozilla Firefox
    Firefox,
    /// Microsoft Edge
    Edge,
    /// Brave
    Brave,
}

impl Browser {
    /// Every supported browser
    pub const ALL: [Self; 5] = [Self::Default, Self::Chrome, Self::Firefox, Self::Edge, Self::Brave];

    /// Command-line switch that opens a private window, if the browser has one
    #[must_use]
    pub const fn private_flag(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Chrome | Self::Brave => Some("--incognito"),
            Self::Firefox => Some("--private-window"),
            Self::Edge => Some("--inprivate"),
        }
    }
}

impl FromStr for Browser {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "chrome" | "chromium" => Ok(Self::Chrome),
            "firefox" => Ok(Self::Firefox),
            "edge" | "msedge" => Ok(Self::Edge),
            "brave" => Ok(Self::Brave),
            _ => Err(ToolError::invalid("browser", s, one_of(&Self::ALL))),
        }
    }
}

impl std::fmt::Display for Browser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Chrome => write!(f, "chrome"),
            Self::Firefox => write!(f, "firefox"),
            Self::Edge => write!(f, "edge"),
            Self::Brave => write!(f, "brave"),
        }
    }
}
