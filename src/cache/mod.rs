//! Build and launch cache options
//!
//! A container image build uses two caches:
//!
//! | Role | Used by |
//! |------|---------|
//! | build | layers restored and saved while building |
//! | launch | layers reused when the image is launched |
//!
//! Each one is backed by either a registry image or a local volume and is
//! configured through repeated `--cache` flags (see [`CacheOpts`]).

pub mod opts;
pub mod spec;
pub mod volume;

pub use opts::{CacheOccurrence, CacheOpts};
pub use spec::{CacheFormat, CacheRole, CacheSpec};
pub use volume::default_volume_name;
