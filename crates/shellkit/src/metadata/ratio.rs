use shellkit_core::{Result, SizeDurationRatio, ToolError};
use std::path::Path;

use super::MetadataProvider;

/// Kilobytes per second of playback for a media file.
///
/// Fails with [`ToolError::MissingMetadata`] when the provider cannot
/// report a positive duration.
pub fn size_duration_ratio(provider: &dyn MetadataProvider, path: &Path) -> Result<SizeDurationRatio> {
    let meta = std::fs::metadata(path).map_err(|e| ToolError::io(path, e))?;
    if !meta.is_file() {
        return Err(ToolError::invalid("path", path.display().to_string(), "a regular file"));
    }

    let duration = provider
        .duration(path)?
        .filter(|d| !d.is_zero())
        .ok_or_else(|| ToolError::MissingMetadata {
            path: path.to_path_buf(),
            property: "duration",
        })?;

    let size_kb = meta.len() as f64 / 1024.0;
    let duration_secs = duration.as_secs_f64();

    Ok(SizeDurationRatio {
        path: path.to_path_buf(),
        name: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        size_kb,
        duration_secs,
        ratio: size_kb / duration_secs,
    })
}
