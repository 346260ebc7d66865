use anyhow::Result;
use inventory_service::{config, server};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Validates a log filter directive such as `info` or `inventory_service=debug`
fn validate_log_level(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level).map_err(|e| {
        anyhow::anyhow!(
            "Invalid log level: '{}' ({}). Use a level such as error, warn, info, debug, trace or a target=level directive",
            level,
            e
        )
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    let filter = match validate_log_level(&log_level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .init();

    info!("Starting inventory service with log level: {}", log_level);
    info!("Inventory file: {}", config.storage.path);

    // A malformed inventory file must not be served.
    if let Err(e) = server::run(config).await {
        error!("Inventory service failed: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
