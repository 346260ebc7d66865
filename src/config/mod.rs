mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, io::ErrorKind, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the configuration named by `CONFIG_PATH`, falling back to
/// `config.yaml` and then to built-in defaults when that file is absent.
pub async fn load() -> Result<Config> {
    let mut config = match env::var("CONFIG_PATH") {
        Ok(path) => load_from(&path).await?,
        Err(_) => match load_from(DEFAULT_CONFIG_PATH).await {
            Err(Error::Io(e)) if e.kind() == ErrorKind::NotFound => {
                debug!("No {} found, using default configuration", DEFAULT_CONFIG_PATH);
                Config::default()
            }
            other => other?,
        },
    };

    if let Ok(path) = env::var("INVENTORY_FILE") {
        config.storage.path = path;
    }

    validate(&config)?;
    Ok(config)
}

pub async fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    parse(&config_str)
}

pub fn parse(config_str: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(config_str)?;
    validate(&config)?;
    Ok(config)
}

/// Checks that hold however the configuration was assembled.
pub fn validate(config: &Config) -> Result<()> {
    if config.storage.path.trim().is_empty() {
        return Err(Error::config("storage.path must not be empty"));
    }
    Ok(())
}
