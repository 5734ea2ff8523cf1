use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Widget configuration
#[derive(Debug, Deserialize, Clone)]
pub struct WidgetConfig {
    /// Base URL of the recipe API, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_base_url() -> String {
    "https://www.themealdb.com/api/json/v1/1".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; RecipeFinder/1.0)".to_string()
}

impl WidgetConfig {
    /// Load configuration from file and environment variables
    ///
    /// See [`load_config`] for the lookup order.
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with RECIPE_FINDER__ prefix
/// 2. config.toml file in current directory
/// 3. Default values
///
/// Environment variable format: RECIPE_FINDER__TIMEOUT
pub fn load_config() -> Result<WidgetConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        .add_source(
            Environment::with_prefix("RECIPE_FINDER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
