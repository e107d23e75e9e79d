use std::{env, net::SocketAddr, path::Path, sync::OnceLock};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::AppResult;

/// Application configuration.
///
/// Contains all configuration settings for the library service.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Distribution metadata configuration
    pub distribution: DistributionConfig,
    /// Server configuration settings
    pub server: ServerConfig,
    /// Tracing configuration
    pub tracing: TracingConfig,
}

/// Server configuration settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// HTTP server bind address
    pub http_address: SocketAddr,
}

/// Tracing configuration.
///
/// Controls how tracing data is output from the service.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind")]
pub enum TracingConfig {
    /// Log events only, no span export
    Memory,
    /// Log events and export spans to standard output
    Stdout,
}

/// Distribution metadata configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DistributionConfig {
    /// Distribution name
    pub name: String,
    /// Distribution version
    pub version: Option<String>,
}

const CONFIG_PATH_ENV: &str = "LIBRARY_CONFIG_PATH";
const ENV_PREFIX: &str = "LIBRARY";
const VERSION: &str = env!("CARGO_PKG_VERSION");

const DISTRIBUTION_VERSION_KEY: &str = "distribution.version";

impl AppConfig {
    /// Gets the global application configuration instance.
    ///
    /// # Panics
    ///
    /// Will panic if the configuration cannot be loaded.
    pub fn get() -> &'static Self {
        static INSTANCE: OnceLock<AppConfig> = OnceLock::new();
        INSTANCE.get_or_init(|| Self::load().expect("failed to load configuration"))
    }

    /// Loads configuration from files and environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration files cannot be read or parsed.
    pub fn load() -> AppResult<Self> {
        let config_path = env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| "config".to_string());
        let config_dir = Path::new(&config_path);

        let mut config_builder =
            Config::builder().set_default(DISTRIBUTION_VERSION_KEY, VERSION)?;

        // Initial "default" configuration file
        config_builder = config_builder.add_source(File::from(config_dir.join("default")));

        // Local overrides, not checked in
        config_builder =
            config_builder.add_source(File::from(config_dir.join("local")).required(false));

        // Settings from the environment, e.g. `LIBRARY__SERVER__HTTP_ADDRESS`
        config_builder =
            config_builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

        Ok(config_builder.build()?.try_deserialize()?)
    }
}
