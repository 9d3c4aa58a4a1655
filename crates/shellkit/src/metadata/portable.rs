use chrono::{DateTime, Local};
use shellkit_core::{ExtendedProperty, Result, ToolError};
use std::fs::{File, Metadata};
use std::io::Read;
use std::path::Path;
use std::time::{Duration, SystemTime};
use tracing::debug;

use super::media::{image_dimensions, wav_duration};
use super::MetadataProvider;

// Column indices as the Windows shell numbers them.
const NAME: u32 = 0;
const SIZE: u32 = 1;
const ITEM_TYPE: u32 = 2;
const DATE_MODIFIED: u32 = 3;
const DATE_CREATED: u32 = 4;
const DATE_ACCESSED: u32 = 5;
const ATTRIBUTES: u32 = 6;
const LENGTH: u32 = 27;
const DIMENSIONS: u32 = 31;

/// Bytes read from the start of a file for type and dimension sniffing.
///
/// JPEG frame headers follow any EXIF block, so this covers a thumbnail too.
const SNIFF_LEN: u64 = 256 * 1024;

/// Properties rebuilt from filesystem metadata and file headers.
#[derive(Debug, Clone, Copy, Default)]
pub struct PortableMetadata;

impl MetadataProvider for PortableMetadata {
    fn name(&self) -> &'static str {
        "portable"
    }

    fn properties(&self, path: &Path) -> Result<Vec<ExtendedProperty>> {
        let meta = std::fs::metadata(path).map_err(|e| ToolError::io(path, e))?;
        let header = if meta.is_file() { read_header(path)? } else { Vec::new() };

        let mut columns: Vec<(u32, &str, Option<String>)> = vec![
            (NAME, "Name", file_name(path)),
            (SIZE, "Size", meta.is_file().then(|| format_size(meta.len()))),
            (ITEM_TYPE, "Item type", Some(item_type(path, &meta, &header))),
            (DATE_MODIFIED, "Date modified", format_time(meta.modified())),
            (DATE_CREATED, "Date created", format_time(meta.created())),
            (DATE_ACCESSED, "Date accessed", format_time(meta.accessed())),
            (ATTRIBUTES, "Attributes", attributes(path, &meta)),
        ];

        if meta.is_file() {
            let length = self.duration(path)?.map(format_duration);
            columns.push((LENGTH, "Length", length));
            let dims = image_dimensions(&header).map(|(w, h)| format!("{w} x {h}"));
            columns.push((DIMENSIONS, "Dimensions", dims));
        }

        Ok(columns
            .into_iter()
            .filter_map(|(index, name, value)| {
                value.filter(|v| !v.is_empty()).map(|value| ExtendedProperty {
                    path: path.to_path_buf(),
                    index,
                    name: name.to_string(),
                    value,
                })
            })
            .collect())
    }

    fn duration(&self, path: &Path) -> Result<Option<Duration>> {
        if !path.exists() {
            return Err(ToolError::FileNotFound(path.to_path_buf()));
        }
        let is_wav = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("wav") || e.eq_ignore_ascii_case("wave"));
        if !is_wav {
            debug!(path = %path.display(), "no duration reader for this file type");
            return Ok(None);
        }
        wav_duration(path).map_err(|e| ToolError::io(path, e))
    }
}

fn read_header(path: &Path) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    File::open(path)
        .and_then(|f| f.take(SNIFF_LEN).read_to_end(&mut buf))
        .map_err(|e| ToolError::io(path, e))?;
    Ok(buf)
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}

fn item_type(path: &Path, meta: &Metadata, header: &[u8]) -> String {
    if meta.is_dir() {
        return "File folder".to_string();
    }
    if let Some(kind) = infer::get(header) {
        return kind.mime_type().to_string();
    }
    path.extension()
        .and_then(|e| e.to_str())
        .map_or_else(|| "File".to_string(), |e| format!("{} File", e.to_ascii_uppercase()))
}

/// Shell-style size: bytes below 1 KB, otherwise one decimal in KB/MB/GB.
pub(crate) fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{bytes} bytes");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

fn format_time(time: std::io::Result<SystemTime>) -> Option<String> {
    time.ok()
        .map(|t| DateTime::<Local>::from(t).format("%Y-%m-%d %H:%M").to_string())
}

pub(crate) fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

fn attributes(path: &Path, meta: &Metadata) -> Option<String> {
    let mut attrs = String::new();
    if meta.permissions().readonly() {
        attrs.push('R');
    }
    if path
        .file_name()
        .is_some_and(|n| n.to_string_lossy().starts_with('.'))
    {
        attrs.push('H');
    }
    if meta.is_dir() {
        attrs.push('D');
    }
    Some(attrs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::media::tests::write_wav;

    fn value_of(props: &[ExtendedProperty], index: u32) -> Option<&str> {
        props.iter().find(|p| p.index == index).map(|p| p.value.as_str())
    }

    #[test]
    fn test_text_file_properties() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello").unwrap();

        let props = PortableMetadata.properties(&path).unwrap();
        assert_eq!(value_of(&props, NAME), Some("notes.txt"));
        assert_eq!(value_of(&props, SIZE), Some("5 bytes"));
        assert_eq!(value_of(&props, ITEM_TYPE), Some("TXT File"));
        assert!(value_of(&props, DATE_MODIFIED).is_some());
        assert!(value_of(&props, LENGTH).is_none());
        assert!(props.windows(2).all(|w| w[0].index < w[1].index));
    }

    #[test]
    fn test_wav_length_and_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.wav");
        write_wav(&path, 8000, 2, 65);

        let props = PortableMetadata.properties(&path).unwrap();
        assert_eq!(value_of(&props, LENGTH), Some("00:01:05"));
        assert_eq!(value_of(&props, ITEM_TYPE), Some("audio/x-wav"));
    }

    #[test]
    fn test_directory_properties() {
        let dir = tempfile::tempdir().unwrap();
        let props = PortableMetadata.properties(dir.path()).unwrap();
        assert_eq!(value_of(&props, ITEM_TYPE), Some("File folder"));
        assert!(value_of(&props, SIZE).is_none());
        assert!(value_of(&props, ATTRIBUTES).unwrap().contains('D'));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = PortableMetadata.properties(&dir.path().join("gone.mp4")).unwrap_err();
        assert!(err.is_resource_absent());
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 bytes");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(3725)), "01:02:05");
    }
}
