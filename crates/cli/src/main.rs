mod cli;
mod config;
mod server_client;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;

use suggest_analytics::UsageAggregate;
use suggest_catalog::{ComponentCatalog, Resolver, SnippetAssembler};

use crate::cli::{CliArgs, Command};
use crate::config::CliConfig;
use crate::server_client::ServerClient;

fn load_catalog(path: Option<&Path>) -> Result<Arc<ComponentCatalog>> {
    let catalog = match path {
        Some(p) => ComponentCatalog::from_path(p)
            .with_context(|| format!("failed to load catalog {}", p.display()))?,
        None => ComponentCatalog::builtin().context("built-in catalog is invalid")?,
    };
    Ok(Arc::new(catalog))
}

fn print_stats(stats: &UsageAggregate) {
    println!("Total searches:   {}", stats.total_queries);
    println!("Last 24 hours:    {}", stats.today_queries);
    println!("Components:       {}", stats.total_components);
    if stats.popular_queries.is_empty() {
        return;
    }
    println!();
    println!("Popular queries:");
    for (i, p) in stats.popular_queries.iter().enumerate() {
        println!("  {}. {} ({})", i + 1, p.query, p.count);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();
    let config = CliConfig::load(args.config.as_deref()).context("failed to load configuration")?;
    let client = ServerClient::new(&config.resolve_server_url(args.server.as_deref()));
    let catalog_path = config.resolve_catalog_path(args.catalog.as_deref());

    match args.command {
        Command::Resolve {
            query,
            components_only,
            record,
            json,
        } => {
            let query = query.join(" ");
            let catalog = load_catalog(catalog_path.as_deref())?;
            let resolution = Resolver::new(catalog.clone()).resolve(&query);
            let names: Vec<String> = resolution.components.iter().map(|c| c.to_string()).collect();
            let snippet = SnippetAssembler::new(catalog).assemble(&resolution.components);

            if json {
                let out = json!({
                    "components": names,
                    "snippet": snippet,
                    "tier": resolution.tier,
                    "matchedRules": resolution.matched_rules,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else if components_only {
                println!("{}", names.join("\n"));
            } else {
                println!("{}", names.join(", "));
                println!();
                println!("{snippet}");
            }

            if record {
                let reply = client.record_search(&query, &names).await?;
                eprintln!("Recorded search {} at {}", reply.record_id, client.base_url());
            }
        }
        Command::Stats { json } => {
            let stats = client.stats().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print_stats(&stats);
            }
        }
        Command::Components { snippets } => {
            let catalog = load_catalog(catalog_path.as_deref())?;
            for (id, template) in catalog.components() {
                if snippets {
                    println!("── {id} ──");
                    println!("{template}");
                    println!();
                } else {
                    println!("{id}");
                }
            }
        }
    }

    Ok(())
}
