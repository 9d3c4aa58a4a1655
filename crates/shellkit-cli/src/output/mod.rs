//! Output formatting for different formats.

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text and tables
    #[default]
    Pretty,
    /// JSON array of records
    Json,
    /// CSV with a header row
    Csv,
    /// YAML sequence of records
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "table" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => anyhow::bail!(
                "Unknown output format: {}\n\
                 Valid formats: pretty, json, csv, yaml",
                s
            ),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Serialize records for a machine-readable format.
///
/// Returns `None` for [`OutputFormat::Pretty`], which every command renders
/// itself.
pub fn serialize<T: Serialize>(format: OutputFormat, records: &[T]) -> Result<Option<String>> {
    let text = match format {
        OutputFormat::Pretty => return Ok(None),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(records)?;
            json.push('\n');
            json
        }
        OutputFormat::Yaml => serde_yaml::to_string(records)?,
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for record in records {
                writer.serialize(record)?;
            }
            String::from_utf8(writer.into_inner()?)?
        }
    };
    Ok(Some(text))
}

/// Print records in `format`, calling `pretty` for the human-readable case.
pub fn emit<T: Serialize>(format: OutputFormat, records: &[T], pretty: impl FnOnce(&[T])) -> Result<()> {
    match serialize(format, records)? {
        Some(text) => print!("{text}"),
        None => pretty(records),
    }
    Ok(())
}

/// Render rows as a rounded table.
pub fn table<R: Tabled>(rows: impl IntoIterator<Item = R>) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Row {
        name: &'static str,
        size: u32,
    }

    const ROWS: [Row; 2] = [Row { name: "a.txt", size: 3 }, Row { name: "b c.txt", size: 10 }];

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("yml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Pretty);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_serialize_csv() {
        let csv = serialize(OutputFormat::Csv, &ROWS).unwrap().unwrap();
        assert_eq!(csv, "name,size\na.txt,3\nb c.txt,10\n");
    }

    #[test]
    fn test_serialize_json() {
        let json = serialize(OutputFormat::Json, &ROWS).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[1]["name"], "b c.txt");
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_serialize_yaml() {
        let yaml = serialize(OutputFormat::Yaml, &ROWS).unwrap().unwrap();
        assert!(yaml.contains("- name: a.txt\n  size: 3"));
    }

    #[test]
    fn test_pretty_is_left_to_caller() {
        assert!(serialize(OutputFormat::Pretty, &ROWS).unwrap().is_none());
    }
}
