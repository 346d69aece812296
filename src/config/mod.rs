mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(&config_path).await?;
    let mut config: Config = serde_yaml::from_str(&config_str)?;

    // The environment always wins over the file for the model credential.
    if let Ok(key) = env::var("LLM_API_KEY") {
        config.llm.api_key = key;
    }

    config.validate()?;

    Ok(config)
}

impl Config {
    /// Startup validation; a missing credential must fail here, not on the
    /// first request.
    pub fn validate(&self) -> Result<()> {
        if self.llm.api_key.trim().is_empty() {
            return Err(Error::config(
                "Model API key is not set; provide llm.api_key in the config file or the LLM_API_KEY environment variable",
            ));
        }
        if self.llm.model.trim().is_empty() {
            return Err(Error::config("llm.model must not be empty"));
        }
        Ok(())
    }
}
