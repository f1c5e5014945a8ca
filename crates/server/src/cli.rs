//! CLI argument parsing and subcommand dispatch.

use crate::app_config;

/// Parse CLI arguments and dispatch to the appropriate subcommand.
///
/// Returns `Ok(true)` if a subcommand was handled, `Ok(false)` if `serve`
/// should be started (handled by the caller). No subcommand means `serve`.
pub fn dispatch(config: &suggest_core::Config, args: &[String]) -> anyhow::Result<bool> {
    match args.get(1).map(|s| s.as_str()) {
        None | Some("serve") => Ok(false),
        Some("resolve") => {
            let query = args[2..].join(" ");
            if query.trim().is_empty() {
                anyhow::bail!("Usage: suggest-server resolve <query...>");
            }
            resolve(config, &query)?;
            Ok(true)
        }
        _ => {
            print_usage();
            Ok(true)
        }
    }
}

/// Resolve one query against the configured catalog and print the result.
fn resolve(config: &suggest_core::Config, query: &str) -> anyhow::Result<()> {
    let catalog = app_config::build_catalog(config)?;
    let resolver = suggest_catalog::Resolver::new(catalog.clone());
    let assembler = suggest_catalog::SnippetAssembler::new(catalog);

    let resolution = resolver.resolve(query);
    let names: Vec<&str> = resolution.components.iter().map(|c| c.as_str()).collect();

    println!("Components ({:?}): {}", resolution.tier, names.join(", "));
    println!();
    println!("{}", assembler.assemble(&resolution.components));
    Ok(())
}

fn print_usage() {
    println!("suggest-server v{}", env!("CARGO_PKG_VERSION"));
    println!("Usage: suggest-server <command>");
    println!("  serve                Start HTTP server (default)");
    println!("  resolve <query...>   Print components and snippet for a query");
}
