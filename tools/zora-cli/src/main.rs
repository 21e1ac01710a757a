//! Zora CLI - Developer tool for the marketplace slug codec and search.
//!
//! Commands:
//! - `zora slug encode|decode|vendor|route` - slug codec operations
//! - `zora search` - run the aggregation pipeline against a catalog file
//! - `zora trending` - show the trending-phrase list

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{SearchArgs, SlugArgs, TrendingArgs};

/// Zora CLI - slug codec and search aggregation tools
#[derive(Parser)]
#[command(name = "zora")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Product and vendor slug codec
    Slug(SlugArgs),

    /// Run a search against a catalog
    Search(SearchArgs),

    /// Show trending searches
    Trending(TrendingArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    let output = output::Output::new(cli.verbose, cli.json);

    let result = match cli.command {
        Commands::Slug(args) => commands::slug::run(args, &output),
        Commands::Search(args) => commands::search::run(args, &output).await,
        Commands::Trending(args) => commands::trending::run(args, &output),
    };

    if let Err(e) = result {
        output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
