//! CLI argument definitions using clap derive

use crate::cache::CacheOccurrence;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// cacheopts - Build and launch cache options
///
/// Resolves repeated --cache flags into the build and launch cache
/// configuration of a container image build.
#[derive(Parser, Debug)]
#[command(name = "cacheopts")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "CACHEOPTS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Ignore cache defaults from the configuration file
    #[arg(long, global = true)]
    pub no_config: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve cache flags into the effective build and launch caches
    Resolve(ResolveArgs),

    /// Show or edit configuration
    Config(ConfigArgs),
}

/// Arguments for the resolve command
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Cache options (repeatable):
    /// type=<build|launch>;format=<image|volume>;name=<name>
    #[arg(long = "cache", value_name = "SPEC")]
    pub cache: Vec<CacheOccurrence>,

    /// Image being built, used to derive default volume names
    #[arg(long)]
    pub image: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

/// Output format for the resolve command
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Canonical flag string
    Plain,
}
