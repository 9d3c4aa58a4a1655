//! Configuration management.

use anyhow::{Context as _, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use shellkit::{Browser, Catalog, FileCategory, HashAlgorithm, PhoneFormat, SriAlgorithm};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "SHELLKIT_CONFIG";

/// Keys accepted by [`Config::set`], with a short description each.
pub const KEYS: [(&str, &str); 9] = [
    ("output_format", "Default output format (pretty/json/csv/yaml)"),
    ("port_timeout_ms", "Port probe timeout in milliseconds (1-60000)"),
    ("hash_algorithm", "Default hash algorithm (md5/sha1/sha256/sha384/sha512)"),
    ("sri_algorithm", "Default SRI algorithm (sha256/sha384/sha512)"),
    ("phone_format", "Default phone format (dashed/parens/dotted/e164/international/digits)"),
    ("browser", "Default browser (default/chrome/firefox/edge/brave)"),
    ("open_selected", "Open files picked by `random` (true/false)"),
    ("area_codes", "Comma-separated area codes for doc-phone"),
    ("extensions.<category>", "Comma-separated extensions for a sampler category"),
];

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Default output format.
    pub output_format: Option<OutputFormat>,

    /// Port probe timeout in milliseconds.
    pub port_timeout_ms: Option<u64>,

    /// Default digest for `hash`.
    pub hash_algorithm: Option<HashAlgorithm>,

    /// Default digest for `sri`.
    pub sri_algorithm: Option<SriAlgorithm>,

    /// Default style for `doc-phone`.
    pub phone_format: Option<PhoneFormat>,

    /// Default browser for `browse`.
    pub browser: Option<Browser>,

    /// Whether `random` opens what it picks.
    pub open_selected: bool,

    /// Replacement area-code list.
    pub area_codes: Option<Vec<u16>>,

    /// Replacement extension lists, keyed by category name.
    pub extensions: BTreeMap<String, Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: None,
            port_timeout_ms: None,
            hash_algorithm: None,
            sri_algorithm: None,
            phone_format: None,
            browser: None,
            open_selected: true,
            area_codes: None,
            extensions: BTreeMap::new(),
        }
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// `None` when the user asked to clear the key
fn optional<T: std::str::FromStr>(value: &str) -> Result<Option<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    if value.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    Ok(Some(value.parse()?))
}

impl Config {
    /// Get the config file path.
    pub fn path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }

        let dirs = ProjectDirs::from("", "", "shellkit")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from `path`, defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Self =
            toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Save configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;

        Ok(())
    }

    /// Update one key from its string form. `none` clears optional keys.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "output_format" | "output" => {
                self.output_format = if value.eq_ignore_ascii_case("none") {
                    None
                } else {
                    Some(value.parse()?)
                };
            }
            "port_timeout_ms" | "timeout" => {
                let timeout: Option<u64> = optional(value)?;
                if let Some(ms) = timeout {
                    anyhow::ensure!(
                        (1..=60_000).contains(&ms),
                        "port_timeout_ms must be between 1 and 60000, got {ms}"
                    );
                }
                self.port_timeout_ms = timeout;
            }
            "hash_algorithm" => self.hash_algorithm = optional(value)?,
            "sri_algorithm" => self.sri_algorithm = optional(value)?,
            "phone_format" => self.phone_format = optional(value)?,
            "browser" => self.browser = optional(value)?,
            "open_selected" => self.open_selected = value.parse()?,
            "area_codes" => {
                if value.eq_ignore_ascii_case("none") {
                    self.area_codes = None;
                } else {
                    let codes = parse_list(value)
                        .iter()
                        .map(|c| c.parse::<u16>())
                        .collect::<std::result::Result<Vec<_>, _>>()
                        .context("area_codes must be comma-separated numbers")?;
                    // Reject bad codes now rather than on the next run
                    Catalog::default().with_area_codes(codes.clone())?;
                    self.area_codes = Some(codes);
                }
            }
            _ => {
                let Some(name) = key.strip_prefix("extensions.") else {
                    let known: Vec<String> = KEYS
                        .iter()
                        .map(|(k, d)| format!("  {k:<24}{d}"))
                        .collect();
                    anyhow::bail!(
                        "Unknown config key: {key}\n\nAvailable keys:\n{}",
                        known.join("\n")
                    );
                };
                let category: FileCategory = name.parse()?;
                if value.eq_ignore_ascii_case("none") {
                    self.extensions.remove(&category.to_string());
                } else {
                    let extensions = parse_list(value);
                    Catalog::default().with_extensions(category, extensions.clone())?;
                    self.extensions.insert(category.to_string(), extensions);
                }
            }
        }
        Ok(())
    }

    /// Build the constant catalog from built-ins plus overrides.
    pub fn catalog(&self) -> Result<Catalog> {
        let mut catalog = Catalog::default();
        if let Some(codes) = &self.area_codes {
            catalog = catalog.with_area_codes(codes.clone())?;
        }
        for (name, extensions) in &self.extensions {
            let category: FileCategory = name
                .parse()
                .with_context(|| format!("config key extensions.{name}"))?;
            catalog = catalog.with_extensions(category, extensions.clone())?;
        }
        Ok(catalog)
    }
}
