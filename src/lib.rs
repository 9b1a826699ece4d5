//! cacheopts - Build and launch cache options
//!
//! Parses repeated `--cache` flag occurrences into a build cache and a
//! launch cache specification for container image builds.

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod ui;

pub use cache::{CacheFormat, CacheOccurrence, CacheOpts, CacheRole, CacheSpec};
pub use error::{CacheOptError, CacheOptsError, CacheOptsResult};
