//! Cache roles, formats and the per-role specification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which lifecycle phase a cache applies to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheRole {
    /// Cache used while the image is being built
    #[default]
    Build,
    /// Cache used when the built image is launched
    Launch,
}

impl CacheRole {
    /// Roles in canonical render order
    pub const ALL: [CacheRole; 2] = [CacheRole::Build, CacheRole::Launch];

    /// Value used in the `type=` field
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Build => "build",
            Self::Launch => "launch",
        }
    }

    /// Parse a `type=` value (exact match)
    pub fn from_value(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == s)
    }
}

impl fmt::Display for CacheRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Backing storage for a cache
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheFormat {
    /// Stored as an image in a registry
    Image,
    /// Stored in a local volume
    #[default]
    Volume,
}

impl CacheFormat {
    /// Every accepted format. Parsing and help text are driven from this list.
    pub const ALL: &'static [CacheFormat] = &[CacheFormat::Image, CacheFormat::Volume];

    /// Value used in the `format=` field
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Volume => "volume",
        }
    }

    /// Parse a `format=` value (exact match)
    pub fn from_value(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|format| format.as_str() == s)
    }

    /// Whether a spec in this format must carry a name
    pub fn requires_name(&self) -> bool {
        matches!(self, Self::Image)
    }
}

impl fmt::Display for CacheFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cache configuration for one role.
///
/// The role itself is implied by the slot the spec is stored in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheSpec {
    /// Backing storage
    pub format: CacheFormat,
    /// Image reference or volume name (may be empty for volumes)
    pub name: String,
}

impl CacheSpec {
    /// Create a spec from its parts
    pub fn new(format: CacheFormat, name: impl Into<String>) -> Self {
        Self {
            format,
            name: name.into(),
        }
    }
}

/// Renders `format=<format>;name=<name>;`
impl fmt::Display for CacheSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "format={};name={};", self.format, self.name)
    }
}
