use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::ToolError;

/// Transport protocol reported by a port probe. Only TCP is probed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Protocol {
    /// TCP protocol
    #[default]
    Tcp,
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tcp => write!(f, "TCP"),
        }
    }
}

/// Outcome of a single TCP connect attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortProbe {
    /// Host as given by the caller
    pub host: String,
    /// Always TCP
    pub protocol: Protocol,
    /// Port probed
    pub port: u16,
    /// Whether a connection was established before the timeout
    pub open: bool,
}

/// IP version for documentation addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IpVersion {
    /// IPv4 (RFC 5737 blocks)
    #[default]
    #[serde(rename = "4")]
    V4,
    /// IPv6 (RFC 3849 prefix)
    #[serde(rename = "6")]
    V6,
}

impl FromStr for IpVersion {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "4" | "v4" | "ipv4" => Ok(Self::V4),
            "6" | "v6" | "ipv6" => Ok(Self::V6),
            _ => Err(ToolError::invalid("version", s, "one of 4, 6")),
        }
    }
}

impl std::fmt::Display for IpVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::V4 => write!(f, "4"),
            Self::V6 => write!(f, "6"),
        }
    }
}

/// An address reserved for use in documentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentationAddress {
    /// IP version
    pub version: IpVersion,
    /// Address text
    pub address: String,
}
