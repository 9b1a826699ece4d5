//! Resolve command - fold cache flags into the effective caches

use crate::cache::{CacheOpts, CacheRole};
use crate::cli::args::{OutputFormat, ResolveArgs};
use crate::error::CacheOptsResult;
use console::style;
use serde::Serialize;

/// Effective cache for one role, as shown to the user
#[derive(Debug, Serialize)]
struct ResolvedCache {
    role: CacheRole,
    format: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    volume: Option<String>,
}

/// Execute the resolve command
///
/// `defaults` holds the options loaded from configuration; flags given on
/// the command line replace them role by role.
pub async fn execute(args: ResolveArgs, defaults: CacheOpts) -> CacheOptsResult<()> {
    let mut opts = defaults;
    for occurrence in args.cache {
        opts.apply(occurrence);
    }

    match args.format {
        OutputFormat::Plain => println!("{}", opts),
        OutputFormat::Table => print_table(&resolve(&opts, args.image.as_deref())),
        OutputFormat::Json => print_json(&resolve(&opts, args.image.as_deref()))?,
    }

    Ok(())
}

fn resolve(opts: &CacheOpts, image: Option<&str>) -> Vec<ResolvedCache> {
    CacheRole::ALL
        .into_iter()
        .map(|role| {
            let spec = opts.get(role);
            let volume = image.and_then(|image_ref| spec.volume_name(role, image_ref));
            ResolvedCache {
                role,
                format: spec.format.to_string(),
                name: spec.name,
                volume,
            }
        })
        .collect()
}

fn print_table(caches: &[ResolvedCache]) {
    println!(
        "{:<8} {:<8} {:<40} {:<40}",
        style("ROLE").bold(),
        style("FORMAT").bold(),
        style("NAME").bold(),
        style("VOLUME").bold()
    );
    println!("{}", "-".repeat(96));

    for cache in caches {
        let name = if cache.name.is_empty() {
            style("-").dim().to_string()
        } else {
            cache.name.clone()
        };

        println!(
            "{:<8} {:<8} {:<40} {:<40}",
            cache.role,
            cache.format,
            name,
            cache.volume.as_deref().unwrap_or("-")
        );
    }
}

fn print_json(caches: &[ResolvedCache]) -> CacheOptsResult<()> {
    println!("{}", serde_json::to_string_pretty(caches)?);
    Ok(())
}
