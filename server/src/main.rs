use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod loader;
mod render;

#[derive(Parser)]
struct Opt {
    /// Configuration file
    #[clap(long, default_value = "recipes.toml")]
    config: PathBuf,
    /// Listen on this address instead of the configured one
    #[clap(long)]
    listen: Option<SocketAddr>,
}

/// Possible server errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Address parse failed: {0}")]
    AddrParseError(#[from] std::net::AddrParseError),
    #[error("Could not read configuration: {0}")]
    ConfigurationError(#[from] toml::de::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Recipe backend request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Malformed recipe: {0}")]
    ShapeError(#[from] models::ShapeError),
}

/// Server result type.
pub type Result<T> = std::result::Result<T, AppError>;

async fn try_main() -> Result<()> {
    if let Err(err) = dotenv::dotenv() {
        info!("No .env loaded: {}", err);
    }

    let opts = Opt::parse();
    let mut config = config::Config::new(&opts.config)?;

    if let Some(listen) = opts.listen {
        config.listen = listen;
    }

    info!("Using recipe API at {}", config.api.base);

    let state = api::State::new(config.api.clone());
    api::run(state, &config).await
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(err) = try_main().await {
        error!("{}", err);
        std::process::exit(1);
    }
}
