//! cacheopts - Build and launch cache options
//!
//! CLI entry point that dispatches to subcommands.

use cacheopts::cli::{Cli, Commands};
use cacheopts::config::{Config, ConfigManager};
use cacheopts::error::CacheOptsResult;
use clap::Parser;
use console::style;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Layer, Registry};

type FmtLayer = Box<dyn Layer<Registry> + Send + Sync>;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> CacheOptsResult<()> {
    let cli = Cli::parse();
    let log_handle = init_logging(cli.verbose);

    let config_manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };

    let config = if cli.no_config {
        Config::default()
    } else {
        config_manager.load().await?
    };

    if config.general.json_logs() {
        log_handle.reload(json_layer()).ok();
    }
    if cli.no_config {
        debug!("Config file ignored (--no-config)");
    }

    match cli.command {
        Commands::Resolve(args) => {
            let defaults = config_manager.cache_defaults(&config)?;
            cacheopts::cli::commands::resolve(args, defaults).await
        }
        Commands::Config(args) => {
            cacheopts::cli::commands::config(args, &config_manager, &config).await
        }
    }
}

/// 0 = warn, 1 = info, 2+ = debug
///
/// Starts with text output; the returned handle swaps in the JSON formatter
/// once the configuration has been read.
fn init_logging(verbose: u8) -> reload::Handle<FmtLayer, Registry> {
    let filter = match verbose {
        0 => EnvFilter::new("cacheopts=warn"),
        1 => EnvFilter::new("cacheopts=info"),
        _ => EnvFilter::new("cacheopts=debug"),
    };

    let (fmt_layer, handle) = reload::Layer::new(text_layer());
    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .init();

    handle
}

fn text_layer() -> FmtLayer {
    fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .boxed()
}

fn json_layer() -> FmtLayer {
    fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .boxed()
}
