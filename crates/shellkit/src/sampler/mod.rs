//! Categorized random file sampler.
//!
//! Picks `count` distinct files of one category below a directory,
//! optionally restricted to paths containing a substring. The category's
//! file list is memoized on disk, see [`cache`].

pub mod cache;
mod opener;

use rand::seq::index;
use rand::Rng;
use shellkit_core::{Catalog, FileCategory, Result, ToolError};
use std::path::{Path, PathBuf};
use tracing::debug;

pub use opener::{open_all, FileOpener, SystemOpener};

/// Parameters for one sampling run
#[derive(Debug, Clone)]
pub struct SampleRequest {
    /// Directory to search (recursively)
    pub dir: PathBuf,
    /// Only consider paths containing this substring
    pub filter: Option<String>,
    /// File category
    pub category: FileCategory,
    /// Number of distinct files to pick
    pub count: usize,
    /// Rebuild the category cache before sampling
    pub refresh: bool,
}

impl SampleRequest {
    /// Request one file of `category` from `dir`
    pub fn new(dir: impl Into<PathBuf>, category: FileCategory) -> Self {
        Self {
            dir: dir.into(),
            filter: None,
            category,
            count: 1,
            refresh: false,
        }
    }

    /// Set the substring filter
    #[must_use]
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Set the sample size
    #[must_use]
    pub const fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Rebuild the cache first
    #[must_use]
    pub const fn refresh(mut self, refresh: bool) -> Self {
        self.refresh = refresh;
        self
    }
}

/// Draws random files using the catalog's extension tables
pub struct Sampler<'a> {
    catalog: &'a Catalog,
}

impl<'a> Sampler<'a> {
    /// Create a sampler over a catalog
    #[must_use]
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// All candidate files for the request, after the substring filter.
    pub fn candidates(&self, request: &SampleRequest) -> Result<Vec<PathBuf>> {
        let dir = canonical_dir(&request.dir)?;
        let files = cache::load_or_build(&dir, self.catalog, request.category, request.refresh);

        Ok(match request.filter.as_deref() {
            Some(needle) if !needle.is_empty() => files
                .into_iter()
                .filter(|p| p.to_string_lossy().contains(needle))
                .collect(),
            _ => files,
        })
    }

    /// Pick `request.count` distinct files uniformly at random.
    ///
    /// Never returns fewer files than requested: an empty candidate list is
    /// [`ToolError::NoMatchingFiles`] and a short one is
    /// [`ToolError::InsufficientFiles`].
    pub fn sample<R: Rng + ?Sized>(&self, request: &SampleRequest, rng: &mut R) -> Result<Vec<PathBuf>> {
        if request.count == 0 {
            return Err(ToolError::invalid("count", "0", "at least 1"));
        }

        let candidates = self.candidates(request)?;
        if candidates.is_empty() {
            return Err(ToolError::NoMatchingFiles {
                category: request.category.to_string(),
            });
        }
        if request.count > candidates.len() {
            return Err(ToolError::InsufficientFiles {
                category: request.category.to_string(),
                requested: request.count,
                available: candidates.len(),
            });
        }

        debug!(
            candidates = candidates.len(),
            count = request.count,
            "sampling without replacement"
        );

        Ok(index::sample(rng, candidates.len(), request.count)
            .into_iter()
            .map(|i| candidates[i].clone())
            .collect())
    }
}

fn canonical_dir(dir: &Path) -> Result<PathBuf> {
    let dir = std::fs::canonicalize(dir).map_err(|e| ToolError::io(dir, e))?;
    if !dir.is_dir() {
        return Err(ToolError::invalid("dir", dir.display().to_string(), "a directory"));
    }
    Ok(dir)
}
