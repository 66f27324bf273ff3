//! Book Finder - Entry Point
//!
//! Runs a single search or an interactive session reading one query per line.

use std::time::Duration;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use book_finder::config::{CATALOG_URL_ENV, TIMEOUT_ENV, api};
use book_finder::formatters::{OutputFormat, render};
use book_finder::{BookSearchService, CatalogClient, Config, SearchSession};

#[derive(Parser, Debug)]
#[command(name = "book-finder")]
#[command(about = "Search a book catalog by ISBN, author or title")]
#[command(version)]
struct Cli {
    /// Search text (ISBN, author or title)
    query: Option<String>,

    /// Read one query per line from stdin until EOF
    #[arg(long, short = 'i', conflicts_with = "query")]
    interactive: bool,

    /// Output format
    #[arg(long, default_value = "markdown")]
    format: OutputFormat,

    /// Catalog volumes endpoint
    #[arg(long, default_value = api::CATALOG_URL, env = CATALOG_URL_ENV)]
    catalog_url: String,

    /// Whole-request timeout in seconds (transport default if unset)
    #[arg(long, env = TIMEOUT_ENV)]
    timeout_secs: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    // stdout carries results only
    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

async fn run_interactive(mut session: SearchSession, format: OutputFormat) -> anyhow::Result<()> {
    let mut reader = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let mut line = String::new();

    tracing::info!("Interactive mode, one query per line");

    loop {
        line.clear();
        if reader.read_line(&mut line).await? == 0 {
            tracing::info!("Stdin closed, shutting down");
            break;
        }

        session.set_query(line.trim_end_matches(['\r', '\n']));
        let books = session.submit().await;

        let output = render(books, format)?;
        stdout.write_all(output.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        catalog_url = %cli.catalog_url,
        "Starting book finder"
    );

    let mut config = Config::new(cli.catalog_url);
    if let Some(secs) = cli.timeout_secs {
        config = config.with_request_timeout(Duration::from_secs(secs));
    }

    let service = BookSearchService::new(CatalogClient::new(config)?);

    if cli.interactive {
        return run_interactive(SearchSession::new(service), cli.format).await;
    }

    let query = cli.query.unwrap_or_default();
    let books = service.search(&query).await;
    println!("{}", render(&books, cli.format)?);

    Ok(())
}
