//! Configuration management for the Digital Twin Engine.
//!
//! Configuration is loaded from (in priority order):
//! 1. Environment variables (`TWIN__` prefix, `__` separator,
//!    e.g. `TWIN__NEO4J__URI`)
//! 2. Config file (`twin.toml`)
//!
//! Neo4j credentials have no defaults: a missing URI, user, or password is
//! a startup-fatal [`ConfigError`] so the process never serves requests it
//! cannot persist.

use thiserror::Error;

/// Errors raised while loading configuration at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Read(#[from] config::ConfigError),

    #[error("Missing required configuration key: {0}")]
    MissingKey(&'static str),
}

/// Connection settings for the Neo4j graph database.
#[derive(Debug, Clone)]
pub struct Neo4jConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    pub max_connections: u32,
    pub fetch_size: usize,
}

/// Settings for the HTTP listener.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub bind: String,
}

/// Top-level engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub neo4j: Neo4jConfig,
    pub http: HttpConfig,
}

fn default_bind() -> String {
    "0.0.0.0:8000".to_string()
}

impl EngineConfig {
    /// Load configuration from `<file_prefix>.toml` (optional) and
    /// `TWIN__`-prefixed environment variables.
    pub fn load(file_prefix: &str) -> Result<Self, ConfigError> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(file_prefix).required(false))
            .add_source(
                config::Environment::with_prefix("TWIN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Self::from_config(&cfg)
    }

    /// Extract and check the engine configuration from a built config tree.
    pub fn from_config(cfg: &config::Config) -> Result<Self, ConfigError> {
        let neo4j = Neo4jConfig {
            uri: required_string(cfg, "neo4j.uri")?,
            user: required_string(cfg, "neo4j.user")?,
            password: required_string(cfg, "neo4j.password")?,
            max_connections: cfg.get_int("neo4j.max_connections").unwrap_or(16) as u32,
            fetch_size: cfg.get_int("neo4j.fetch_size").unwrap_or(256) as usize,
        };

        let http = HttpConfig {
            bind: cfg.get_string("http.bind").unwrap_or_else(|_| default_bind()),
        };

        Ok(Self { neo4j, http })
    }
}

fn required_string(
    cfg: &config::Config,
    key: &'static str,
) -> Result<String, ConfigError> {
    match cfg.get_string(key) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingKey(key)),
    }
}
