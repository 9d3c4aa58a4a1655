use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for shellkit operations
pub type Result<T> = std::result::Result<T, ToolError>;

/// Broad classification of a [`ToolError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A caller-supplied value fell outside its allowed domain.
    Validation,
    /// Something the operation needed was not there.
    ResourceAbsent,
    /// A network endpoint or OS facility failed.
    External,
}

/// Errors that can occur while running a toolkit operation
#[derive(Error, Debug)]
pub enum ToolError {
    /// Value outside its enumerated or ranged domain
    #[error("invalid {field} '{value}': expected {expected}")]
    InvalidValue {
        /// Name of the offending parameter
        field: &'static str,
        /// The rejected value
        value: String,
        /// Human-readable description of the accepted domain
        expected: String,
    },

    /// Input could not be decoded
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// File or directory does not exist
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// A file lacks a metadata property the operation requires
    #[error("{property} metadata not available for {}", path.display())]
    MissingMetadata {
        /// File that was inspected
        path: PathBuf,
        /// Property that was missing
        property: &'static str,
    },

    /// A category produced no files at all
    #[error("no matching {category} files found")]
    NoMatchingFiles {
        /// Category name
        category: String,
    },

    /// More files were requested than exist
    #[error("requested {requested} {category} files but only {available} available")]
    InsufficientFiles {
        /// Category name
        category: String,
        /// Requested sample size
        requested: usize,
        /// Matching files available
        available: usize,
    },

    /// No executable found for the requested browser
    #[error("browser not found: {0}")]
    BrowserNotFound(String),

    /// Host name could not be resolved
    #[error("could not resolve host {host}: {message}")]
    Resolve {
        /// Host that failed to resolve
        host: String,
        /// Resolver message
        message: String,
    },

    /// HTTP request failed
    #[error("HTTP request to {url} failed: {message}")]
    Http {
        /// Requested URL
        url: String,
        /// Failure detail
        message: String,
    },

    /// Capability not offered on this platform or by this provider
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// Spawning an external program failed
    #[error("failed to launch {program}: {source}")]
    Launch {
        /// Program that could not be run
        program: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Filesystem I/O error
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl ToolError {
    /// Build an [`ToolError::InvalidValue`].
    pub fn invalid(field: &'static str, value: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            value: value.into(),
            expected: expected.into(),
        }
    }

    /// Wrap an I/O error, mapping `NotFound` to [`ToolError::FileNotFound`].
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound(path)
        } else {
            Self::Io { path, source }
        }
    }

    /// Classify this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidValue { .. } | Self::InvalidInput(_) => ErrorKind::Validation,
            Self::FileNotFound(_)
            | Self::MissingMetadata { .. }
            | Self::NoMatchingFiles { .. }
            | Self::InsufficientFiles { .. }
            | Self::BrowserNotFound(_) => ErrorKind::ResourceAbsent,
            Self::Resolve { .. }
            | Self::Http { .. }
            | Self::Unsupported(_)
            | Self::Launch { .. }
            | Self::Io { .. } => ErrorKind::External,
        }
    }

    /// Returns true if the caller supplied a bad value
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self.kind(), ErrorKind::Validation)
    }

    /// Returns true if a file, property or program was missing
    #[must_use]
    pub const fn is_resource_absent(&self) -> bool {
        matches!(self.kind(), ErrorKind::ResourceAbsent)
    }

    /// Returns true if a network endpoint or OS facility failed
    #[must_use]
    pub const fn is_external(&self) -> bool {
        matches!(self.kind(), ErrorKind::External)
    }
}
