mod commands;
mod output;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use webhallen_api::{Client, Config};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "webhallen")]
#[command(about = "Look up and search products in the Webhallen catalogue")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API root to send requests to [env: WEBHALLEN_BASE_URL]
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds [env: WEBHALLEN_TIMEOUT_SECS, default: 10]
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a single product by ID
    Product(commands::product::ProductArgs),
    /// Search products by free text
    Search(commands::search::SearchArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("webhallen=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    // Flags win over the environment, which wins over the defaults.
    let mut config = Config::from_env();
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url);
    }
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    let mut client = Client::with_config(config).context("failed to create client")?;

    let result = match &cli.command {
        Commands::Product(args) => commands::product::run(args, &client, &format).await,
        Commands::Search(args) => commands::search::run(args, &client, &format).await,
    };

    client.close();
    result
}
