//! Per-category file list cache.
//!
//! `<dir>/<category>-cache.txt` holds one absolute path per line. It is
//! written once and read back as-is until someone deletes it. The cache
//! only saves a rescan: when it cannot be read or written the directory
//! is walked instead.

use shellkit_core::{Catalog, FileCategory, Result, ToolError};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Location of a category's cache file
#[must_use]
pub fn cache_path(dir: &Path, category: FileCategory) -> PathBuf {
    dir.join(category.cache_file_name())
}

/// Read a cache file, `None` if it does not exist.
pub fn read(path: &Path) -> Result<Option<Vec<PathBuf>>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(
            content
                .lines()
                .map(|l| l.strip_suffix('\r').unwrap_or(l))
                .filter(|l| !l.is_empty())
                .map(PathBuf::from)
                .collect(),
        )),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ToolError::io(path, e)),
    }
}

/// Write a cache file. Last writer wins.
///
/// Nothing is written when a path is not valid UTF-8, since it could not
/// be read back unchanged.
pub fn write(path: &Path, files: &[PathBuf]) -> Result<()> {
    let mut content = String::new();
    for file in files {
        let Some(line) = file.to_str() else {
            return Err(ToolError::Unsupported(format!(
                "{} is not valid UTF-8 and cannot be cached",
                file.display()
            )));
        };
        content.push_str(line);
        content.push('\n');
    }
    std::fs::write(path, content).map_err(|e| ToolError::io(path, e))
}

/// Walk `dir` and collect every file of the category, sorted.
///
/// Unreadable entries are logged and skipped. Cache files are never listed.
pub fn scan(dir: &Path, catalog: &Catalog, category: FileCategory) -> Vec<PathBuf> {
    let cache_names: Vec<String> = FileCategory::ALL.iter().map(|c| c.cache_file_name()).collect();

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            let name = entry.file_name().to_string_lossy();
            !cache_names.iter().any(|c| *c == name)
        })
        .filter(|entry| catalog.matches(category, entry.path()))
        .map(walkdir::DirEntry::into_path)
        .collect();

    files.sort();
    debug!(dir = %dir.display(), %category, count = files.len(), "directory scanned");
    files
}

/// Load the category's list from cache, building the cache first if needed.
///
/// `refresh` deletes any existing cache before loading. Cache failures are
/// logged and never stop the scan.
pub fn load_or_build(dir: &Path, catalog: &Catalog, category: FileCategory, refresh: bool) -> Vec<PathBuf> {
    let path = cache_path(dir, category);

    if refresh {
        match std::fs::remove_file(&path) {
            Ok(()) => info!(cache = %path.display(), "cache removed"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(cache = %path.display(), error = %e, "could not remove cache"),
        }
    } else {
        match read(&path) {
            Ok(Some(files)) => {
                debug!(cache = %path.display(), count = files.len(), "using cached file list");
                return files;
            }
            Ok(None) => {}
            Err(e) => warn!(cache = %path.display(), error = %e, "unreadable cache, rescanning"),
        }
    }

    let files = scan(dir, catalog, category);
    match write(&path, &files) {
        Ok(()) => info!(cache = %path.display(), count = files.len(), "cache written"),
        Err(e) => warn!(cache = %path.display(), error = %e, "cache not written"),
    }
    files
}
