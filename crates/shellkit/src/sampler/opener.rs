use shellkit_core::{Result, ToolError};
use std::path::Path;
use tracing::debug;

/// Something that can hand a file to the user
pub trait FileOpener {
    /// Open one file
    fn open(&self, path: &Path) -> Result<()>;
}

/// Opens files with the platform's default handler
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl FileOpener for SystemOpener {
    fn open(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "opening with default handler");
        open::that(path).map_err(|source| ToolError::Launch {
            program: format!("default handler for {}", path.display()),
            source,
        })
    }
}

/// Open every path, one result per path.
pub fn open_all(opener: &dyn FileOpener, paths: &[impl AsRef<Path>]) -> Vec<Result<()>> {
    paths.iter().map(|p| opener.open(p.as_ref())).collect()
}
