//! `--cache` flag parsing and accumulation
//!
//! Each flag occurrence is a `;`-separated list of `key=value` fields:
//!
//! ```text
//! type=<build|launch>;format=<image|volume>;name=<name>
//! ```
//!
//! Validation is fail-fast in a fixed order: every field must be a
//! `key=value` pair with a known key, then `type`, then `format`, then the
//! name requirement for image caches.

use crate::cache::spec::{CacheFormat, CacheRole, CacheSpec};
use crate::error::CacheOptError;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

const FIELD_SEPARATOR: char = ';';
const KEY_VALUE_SEPARATOR: char = '=';

/// A single parsed `--cache` occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheOccurrence {
    /// Slot the spec goes into
    pub role: CacheRole,
    /// Spec with defaults applied
    pub spec: CacheSpec,
}

/// Raw field values of one occurrence, last write wins
#[derive(Debug, Default)]
struct Fields<'a> {
    kind: Option<&'a str>,
    format: Option<&'a str>,
    name: Option<&'a str>,
}

impl<'a> Fields<'a> {
    fn parse(raw: &'a str) -> Result<Self, CacheOptError> {
        let pairs = raw
            .split(FIELD_SEPARATOR)
            .map(|token| {
                token
                    .split_once(KEY_VALUE_SEPARATOR)
                    .ok_or_else(|| CacheOptError::InvalidField(token.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut fields = Self::default();
        for (key, value) in pairs {
            match key {
                "type" => fields.kind = Some(value),
                "format" => fields.format = Some(value),
                "name" => fields.name = Some(value),
                _ => return Err(CacheOptError::UnknownField(key.to_string())),
            }
        }

        Ok(fields)
    }
}

impl FromStr for CacheOccurrence {
    type Err = CacheOptError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let fields = Fields::parse(raw)?;

        let role = match fields.kind {
            None | Some("") => CacheRole::default(),
            Some(value) => CacheRole::from_value(value)
                .ok_or_else(|| CacheOptError::InvalidType(value.to_string()))?,
        };

        let format = match fields.format {
            None | Some("") => CacheFormat::default(),
            Some(value) => CacheFormat::from_value(value)
                .ok_or_else(|| CacheOptError::InvalidFormat(value.to_string()))?,
        };

        let name = fields.name.unwrap_or_default();
        if format.requires_name() && name.is_empty() {
            return Err(CacheOptError::NameRequired);
        }

        Ok(Self {
            role,
            spec: CacheSpec::new(format, name),
        })
    }
}

/// Build and launch cache options accumulated from repeated `--cache` flags.
///
/// Each role holds at most one spec; a later occurrence for a role replaces
/// the earlier one. Unset roles render with default values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheOpts {
    build: Option<CacheSpec>,
    launch: Option<CacheSpec>,
}

impl CacheOpts {
    /// Create options with both roles unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one raw flag occurrence.
    ///
    /// On error the existing options are left untouched.
    pub fn set(&mut self, raw: &str) -> Result<(), CacheOptError> {
        let occurrence = raw.parse::<CacheOccurrence>()?;
        self.apply(occurrence);
        Ok(())
    }

    /// Store an already parsed occurrence in its role's slot
    pub fn apply(&mut self, occurrence: CacheOccurrence) {
        debug!(
            "Cache {} set to {} '{}'",
            occurrence.role, occurrence.spec.format, occurrence.spec.name
        );
        *self.slot_mut(occurrence.role) = Some(occurrence.spec);
    }

    /// Apply raw occurrences in order, stopping at the first invalid one
    pub fn from_occurrences<I, S>(occurrences: I) -> Result<Self, CacheOptError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut opts = Self::new();
        for raw in occurrences {
            opts.set(raw.as_ref())?;
        }
        Ok(opts)
    }

    /// Effective spec for a role (defaults when unset)
    pub fn get(&self, role: CacheRole) -> CacheSpec {
        self.slot(role).cloned().unwrap_or_default()
    }

    /// Effective build cache spec
    pub fn build(&self) -> CacheSpec {
        self.get(CacheRole::Build)
    }

    /// Effective launch cache spec
    pub fn launch(&self) -> CacheSpec {
        self.get(CacheRole::Launch)
    }

    /// Whether any occurrence has targeted this role
    pub fn is_set(&self, role: CacheRole) -> bool {
        self.slot(role).is_some()
    }

    fn slot(&self, role: CacheRole) -> Option<&CacheSpec> {
        match role {
            CacheRole::Build => self.build.as_ref(),
            CacheRole::Launch => self.launch.as_ref(),
        }
    }

    fn slot_mut(&mut self, role: CacheRole) -> &mut Option<CacheSpec> {
        match role {
            CacheRole::Build => &mut self.build,
            CacheRole::Launch => &mut self.launch,
        }
    }
}

/// Canonical form: `type=build;format=..;name=..;type=launch;format=..;name=..;`
impl fmt::Display for CacheOpts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let default = CacheSpec::default();
        for role in CacheRole::ALL {
            let spec = self.slot(role).unwrap_or(&default);
            write!(f, "type={};{}", role, spec)?;
        }
        Ok(())
    }
}
