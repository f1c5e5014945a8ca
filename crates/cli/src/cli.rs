use clap::{Parser, Subcommand};

/// Suggest design-system components for a UI description.
///
/// Resolution and snippet assembly run locally against the built-in (or
/// configured) catalog. Usage statistics and recording talk to a running
/// suggest-server.
#[derive(Parser, Debug)]
#[command(name = "suggest", version, about = "Component suggestions from UI descriptions")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Server URL for analytics (default: http://localhost:3001)
    #[arg(long, global = true, env = "SUGGEST_SERVER_URL")]
    pub server: Option<String>,

    /// Path to config file (default: ~/.config/suggest/config.toml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Component catalog YAML to use instead of the built-in one
    #[arg(long, global = true)]
    pub catalog: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a description to components and print the merged snippet
    Resolve {
        /// Free-text UI description, e.g. "login form with remember me"
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Print only the component names
        #[arg(long)]
        components_only: bool,

        /// Report the search to the server's usage analytics
        #[arg(long)]
        record: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show usage statistics from the server
    Stats {
        /// Print the raw JSON aggregate
        #[arg(long)]
        json: bool,
    },

    /// List catalog components
    Components {
        /// Include each component's template
        #[arg(long)]
        snippets: bool,
    },
}
