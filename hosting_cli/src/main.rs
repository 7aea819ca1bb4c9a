mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use hosting_lib::{Client, ConnectionConfig};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "hostingctl")]
#[command(about = "Manage DNS, SSL, DRaaS and account resources through the hosting API")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API key (overrides HOSTING_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// API base URL (overrides HOSTING_API_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// DNS zones and records
    Dns(commands::dns::DnsArgs),
    /// Disaster recovery solutions and failover plans
    Draas(commands::draas::DraasArgs),
    /// SSL certificates
    Ssl(commands::ssl::SslArgs),
    /// Account contacts and credits
    Account(commands::account::AccountArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hosting_lib=info".parse()?)
                .add_directive("hosting_api=warn".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "md" | "markdown" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let mut config = ConnectionConfig::from_env();
    if let Some(api_key) = &cli.api_key {
        config = config.with_api_key(api_key);
    }
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url);
    }
    if config.api_key.is_none() {
        eprintln!("Warning: no API key set; use --api-key or HOSTING_API_KEY");
    }
    let client = Client::new(config)?;

    match &cli.command {
        Commands::Dns(args) => commands::dns::run(args, &client, &format).await?,
        Commands::Draas(args) => commands::draas::run(args, &client, &format).await?,
        Commands::Ssl(args) => commands::ssl::run(args, &client, &format).await?,
        Commands::Account(args) => commands::account::run(args, &client, &format).await?,
    }

    Ok(())
}
