use serde::{Deserialize, Serialize};

use super::error::{BreachCheckError, Result};

pub const DEFAULT_API_BASE_URL: &str = "https://haveibeenpwned.com/api/v3";
pub const DEFAULT_PASSWORDS_BASE_URL: &str = "https://api.pwnedpasswords.com";
pub const DEFAULT_USER_AGENT: &str = "breach-check";

/// Runtime configuration for the API client.
///
/// The API key always comes from the `HIBP_API_KEY` environment variable;
/// user agent and base URLs can be overridden from an optional TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(skip)]
    pub api_key: Option<String>,
    pub user_agent: String,
    pub api_base_url: String,
    pub passwords_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            passwords_base_url: DEFAULT_PASSWORDS_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Build a config with the required credential taken from the environment.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("HIBP_API_KEY").map_err(|_| {
            BreachCheckError::Config("HIBP_API_KEY environment variable not set".to_string())
        })?;

        let mut config = load_config_file().unwrap_or_default();
        config.api_key = Some(api_key);
        Ok(config)
    }
}

/// Look for an override file in the usual locations.
fn load_config_file() -> Option<Config> {
    let config_paths = ["config/default.toml", "breach_check.toml", ".breach_check.toml"];

    for path in config_paths {
        if std::path::Path::new(path).exists() {
            match std::fs::read_to_string(path) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {}", path);
                        return Some(config);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config from {}: {}", path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config from {}: {}", path, e);
                }
            }
        }
    }

    None
}
