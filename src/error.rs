//! Error types for cacheopts
//!
//! Cache flag validation failures are `CacheOptError`; everything else the
//! binary can hit is folded into `CacheOptsError`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for cacheopts operations
pub type CacheOptsResult<T> = Result<T, CacheOptsError>;

/// Validation errors from a single `--cache` occurrence.
///
/// Messages are shown to users verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheOptError {
    #[error("invalid field '{0}' must be a key=value pair")]
    InvalidField(String),

    #[error("unknown cache field '{0}'")]
    UnknownField(String),

    #[error("invalid cache type '{0}'")]
    InvalidType(String),

    #[error("invalid cache format '{0}'")]
    InvalidFormat(String),

    #[error("cache 'name' is required")]
    NameRequired,
}

/// All errors that can occur in cacheopts
#[derive(Error, Debug)]
pub enum CacheOptsError {
    #[error(transparent)]
    Cache(#[from] CacheOptError),

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Invalid cache default in {path}: {source}")]
    ConfigCache {
        path: PathBuf,
        #[source]
        source: CacheOptError,
    },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl CacheOptsError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Cache(e) | Self::ConfigCache { source: e, .. } => e.hint(),
            Self::ConfigInvalid { .. } => Some("Fix the file, or pass --no-config to ignore it"),
            _ => None,
        }
    }
}

impl CacheOptError {
    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::InvalidField(_) | Self::UnknownField(_) => {
                Some("Use type=<build|launch>;format=<image|volume>;name=<name>")
            }
            Self::InvalidType(_) => Some("Cache type must be one of: build, launch"),
            Self::InvalidFormat(_) => Some("Cache format must be one of: image, volume"),
            Self::NameRequired => Some("Image caches need a name, e.g. name=registry.io/org/cache"),
        }
    }
}
