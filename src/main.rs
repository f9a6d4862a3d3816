use std::path::PathBuf;

use clap::{Parser, Subcommand};
use folio::render::render_listing;
use folio::server::{self, AppState};
use folio_core::config::Config;
use folio_core::view::{self, ListingQuery, SortOrder};
use folio_feeds::Aggregator;

#[derive(Parser)]
#[command(name = "folio", about = "Article feed aggregation for a portfolio site")]
struct Cli {
    /// Config file (defaults to ~/.config/folio/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the content feed endpoint.
    Serve {
        /// Override `server.bind`.
        #[arg(long)]
        bind: Option<String>,
    },
    /// Aggregate once and print the response body.
    Dump,
    /// Aggregate once and print one page of the merged listing.
    List {
        #[arg(long, default_value = view::ALL_CATEGORIES)]
        category: String,
        #[arg(long)]
        oldest: bool,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Command::Serve { bind } => server::serve(&config, bind.as_deref()).await,
        Command::Dump => {
            let response = AppState::from_config(&config)?.respond().await;
            println!("{}", serde_json::to_string_pretty(&response.body)?);
            if !response.is_ok() {
                anyhow::bail!("content feed unavailable");
            }
            Ok(())
        }
        Command::List { category, oldest, page } => {
            let entries = Aggregator::from_config(&config)?.aggregate().await.merged();
            let query = ListingQuery {
                category,
                order: if oldest { SortOrder::Oldest } else { SortOrder::Newest },
                page,
                ..Default::default()
            };
            let listing = view::list(&entries, &query);
            print!("{}", render_listing(&listing, query.per_page, &view::categories(&entries)));
            Ok(())
        }
    }
}
