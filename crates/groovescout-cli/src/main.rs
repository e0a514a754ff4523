use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod commands;
mod config;

#[derive(Debug, Parser)]
#[command(name = "groovescout", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the catalog dump (default: ~/.local/share/groovescout/catalog.json)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Fuzzy-search releases and user listings
    ///
    /// Matching is typo-tolerant: titles are weighted over artists,
    /// results come back best match first, and near-identical catalog
    /// entries are collapsed to one.
    Search {
        /// Free-text query (title, artist, or both)
        query: String,

        /// Maximum number of results
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show one release with its reconciled fields
    Show {
        /// Catalog row id
        id: i64,
    },
    /// Browse a reconciled window of the catalog
    Browse {
        /// Only show releases with this exact genre
        #[arg(long)]
        genre: Option<String>,

        /// Maximum number of releases
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show catalog and user-listing counts
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match cli.catalog {
        Some(path) => config::Config::load_with_catalog_path(path)?,
        None => config::Config::load()?,
    };

    match cli.command {
        Commands::Search { query, limit } => {
            let limit = limit.unwrap_or(config.search_limit);
            commands::search::run(&config, &query, limit).await?;
        }
        Commands::Show { id } => {
            commands::show::run(&config, id).await?;
        }
        Commands::Browse { genre, limit } => {
            let limit = limit.unwrap_or(config.search_limit);
            commands::browse::run(&config, genre.as_deref(), limit).await?;
        }
        Commands::Status => {
            commands::status::run(&config)?;
        }
    }

    Ok(())
}
