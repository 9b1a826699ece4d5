//! Terminal detection
//!
//! Commands use `cliclack` log lines in interactive terminals and plain
//! `[OK]`/`[WARN]` prefixed lines in CI or when piped.

mod context;

pub use context::UiContext;
