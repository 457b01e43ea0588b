//! Configuration management for the CropWeather advisory client
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with CWA_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Advisory API configuration
    pub api: ApiConfig,

    /// Retry policy for the weather-analysis endpoint
    pub retry: RetryConfig,

    /// In-memory cache configuration
    pub cache: CacheConfig,

    /// Localization configuration
    pub i18n: I18nConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the advisory service
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RetryConfig {
    /// Total attempts, including the first try
    pub max_attempts: u32,

    /// Delay before the first retry, in milliseconds
    pub initial_delay_ms: u64,

    /// Ceiling on the doubling delay, in milliseconds
    pub max_delay_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CacheConfig {
    /// How long a fetched weather report stays valid
    pub weather_ttl_secs: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct I18nConfig {
    /// Directory holding {lang}/translation.json bundles
    pub locales_dir: String,

    /// Language used when no selection has been persisted
    pub default_language: String,

    /// File persisting the user's language selection between runs
    pub selection_file: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("CWA_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("api.base_url", "http://localhost:8000")?
            .set_default("api.timeout_secs", 30)?
            .set_default("retry.max_attempts", 3)?
            .set_default("retry.initial_delay_ms", 500)?
            .set_default("retry.max_delay_ms", 5000)?
            .set_default("cache.weather_ttl_secs", 600)?
            .set_default("i18n.locales_dir", "locales")?
            .set_default("i18n.default_language", "en")?
            .set_default("i18n.selection_file", ".cropweather-language")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (CWA_ prefix)
            .add_source(
                Environment::with_prefix("CWA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay_ms: 500,
            max_delay_ms: 5000,
        }
    }
}
