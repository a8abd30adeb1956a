use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use newsmill_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "newsmill")]
#[command(author, version, about = "Feed aggregator and static news-site builder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch all configured feeds and store new articles
    Fetch,
    /// Build the static site from stored articles
    Build,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    match cli.command {
        Commands::Fetch => commands::fetch::run(&config).await,
        Commands::Build => commands::build::run(&config),
    }
}
