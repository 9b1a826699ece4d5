//! Config command - show or initialize configuration

use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigManager};
use crate::error::CacheOptsResult;
use crate::ui::UiContext;
use console::style;
use std::path::Path;

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    manager: &ConfigManager,
    config: &Config,
) -> CacheOptsResult<()> {
    match args.action {
        None | Some(ConfigAction::Show) => show_config(config)?,
        Some(ConfigAction::Path) => show_path(manager),
        Some(ConfigAction::Init { force }) => init_config(manager, force).await?,
    }

    Ok(())
}

fn show_config(config: &Config) -> CacheOptsResult<()> {
    println!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

fn show_path(manager: &ConfigManager) {
    println!("{}", manager.path().display());
}

async fn init_config(manager: &ConfigManager, force: bool) -> CacheOptsResult<()> {
    let ctx = UiContext::detect();
    let path = manager.path();

    if path.exists() && !force {
        report_kept(&ctx, path);
        return Ok(());
    }

    manager.save(&Config::default()).await?;
    report_written(&ctx, path);

    Ok(())
}

fn report_written(ctx: &UiContext, path: &Path) {
    let message = format!("Wrote default configuration to {}", path.display());
    if ctx.use_fancy_output() {
        cliclack::log::success(message).ok();
    } else {
        println!("  {} {}", style("[OK]").green(), message);
    }
}

fn report_kept(ctx: &UiContext, path: &Path) {
    let message = format!("Kept existing configuration at {}", path.display());
    let hint = "pass --force to replace it with the defaults";
    if ctx.use_fancy_output() {
        cliclack::log::warning(format!("{} ({})", message, style(hint).dim())).ok();
    } else {
        println!("  {} {} ({})", style("[WARN]").yellow(), message, hint);
    }
}
