use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cep_proxy::{
    cache::AddressCache,
    config::Config,
    services::{ListingService, LookupService},
    sources::ViaCepClient,
    web::WebServer,
};

#[derive(Parser)]
#[command(name = "cep-proxy")]
#[command(version)]
#[command(about = "A CEP lookup proxy service with in-memory caching backed by ViaCEP")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Listening IP address
    #[arg(short = 'H', long, value_name = "IP")]
    host: Option<String>,

    /// Listening port
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,

    /// Upstream ViaCEP base URL (overrides config file)
    #[arg(short = 'u', long, value_name = "URL")]
    upstream_url: Option<String>,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with specified level
    let log_filter = if cli.log_level == "trace" {
        format!("cep_proxy={},tower_http=trace", cli.log_level)
    } else {
        format!("cep_proxy={}", cli.log_level)
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CEP Proxy Service v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration from specified file
    std::env::set_var("CONFIG_FILE", &cli.config);
    let mut config = Config::load()?;
    info!("Configuration loaded from: {}", cli.config);

    // Override config with CLI arguments
    if let Some(host) = cli.host {
        config.web.host = host;
    }
    if let Some(port) = cli.port {
        config.web.port = port;
    }
    if let Some(upstream_url) = cli.upstream_url {
        config.upstream.base_url = upstream_url;
    }

    info!("Using upstream: {}", config.upstream.base_url);

    // The cache is owned here and injected into both services; it lives
    // for the whole process and starts empty on every restart.
    let cache = AddressCache::new();
    let source = Arc::new(ViaCepClient::new(&config.upstream));

    let lookup = LookupService::new(cache.clone(), source);
    let listing = ListingService::new(cache);

    let web_server = WebServer::new(&config, lookup, listing)?;

    info!(
        "Starting web server on {}:{}",
        web_server.host(),
        web_server.port()
    );
    web_server.serve().await?;

    Ok(())
}
