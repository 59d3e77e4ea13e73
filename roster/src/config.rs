//! Configuration management using Figment
//!
//! Configuration is loaded from multiple sources with the following precedence (highest to lowest):
//! 1. Environment variables (prefix: ROSTER_, nested keys split on `__`)
//! 2. Current working directory: ./config.toml
//! 3. XDG config directory: ~/.config/roster/config.toml
//! 4. System directory: /etc/roster/config.toml
//! 5. Default values

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

const ENV_PREFIX: &str = "ROSTER_";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Service configuration
    pub service: ServiceConfig,

    /// Paging limits for search
    #[serde(default)]
    pub pagination: PaginationConfig,

    /// Database configuration (optional; the in-memory store is used without it)
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
}

/// Service-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name
    pub name: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level or `EnvFilter` directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum request body size in megabytes
    #[serde(default = "default_body_limit_mb")]
    pub body_limit_mb: usize,

    /// Environment (dev, staging, production)
    #[serde(default = "default_environment")]
    pub environment: String,
}

/// Page size limits applied to search requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Page size used when the caller gives none
    #[serde(default = "default_page_size")]
    pub default_size: u32,

    /// Largest page size served; larger requests are clamped
    #[serde(default = "default_page_size")]
    pub max_size: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_size: default_page_size(),
            max_size: default_page_size(),
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout_secs: u64,

    /// Create the `users` table on startup when missing
    #[serde(default = "default_true")]
    pub ensure_schema: bool,
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_body_limit_mb() -> usize {
    1
}

fn default_environment() -> String {
    "dev".to_string()
}

fn default_page_size() -> u32 {
    100
}

fn default_max_connections() -> u32 {
    10
}

fn default_connection_timeout() -> u64 {
    5
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from the standard locations
    pub fn load() -> Result<Self> {
        let config_paths = Self::find_config_paths();

        tracing::debug!("Searching for config files in order:");
        for path in &config_paths {
            tracing::debug!("  - {}", path.display());
        }

        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // lowest priority first
        for path in config_paths.iter().rev() {
            if path.exists() {
                tracing::info!("Loading configuration from: {}", path.display());
                figment = figment.merge(Toml::file(path));
            }
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config = figment.extract()?;
        Ok(config)
    }

    /// Load configuration from a single file, still honouring environment overrides
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;

        Ok(config)
    }

    /// Candidate config file paths, highest priority first
    fn find_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("config.toml")];

        let xdg_dirs = xdg::BaseDirectories::with_prefix("roster");
        if let Some(path) = xdg_dirs.find_config_file("config.toml") {
            paths.push(path);
        }

        paths.push(PathBuf::from("/etc/roster/config.toml"));
        paths
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                name: "roster".to_string(),
                port: default_port(),
                log_level: default_log_level(),
                timeout_secs: default_timeout(),
                body_limit_mb: default_body_limit_mb(),
                environment: default_environment(),
            },
            pagination: PaginationConfig::default(),
            database: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.service.port, 8080);
        assert_eq!(config.service.log_level, "info");
        assert_eq!(config.pagination.default_size, 100);
        assert_eq!(config.pagination.max_size, 100);
        assert!(config.database.is_none());
    }

    #[test]
    fn test_load_from_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "roster.toml",
                r#"
[service]
name = "roster-test"
port = 9090

[pagination]
default_size = 25

[database]
url = "postgres://localhost/roster"
"#,
            )?;

            let config = Config::load_from("roster.toml").map_err(|e| e.to_string())?;
            assert_eq!(config.service.name, "roster-test");
            assert_eq!(config.service.port, 9090);
            assert_eq!(config.service.log_level, "info");
            assert_eq!(config.pagination.default_size, 25);
            assert_eq!(config.pagination.max_size, 100);
            let database = config.database.ok_or("database section missing")?;
            assert_eq!(database.url, "postgres://localhost/roster");
            assert_eq!(database.max_connections, 10);
            assert!(database.ensure_schema);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "roster.toml",
                r#"
[service]
name = "from-file"
port = 7000
"#,
            )?;
            jail.set_env("ROSTER_SERVICE__PORT", "7100");
            jail.set_env("ROSTER_PAGINATION__MAX_SIZE", "50");

            let config = Config::load_from("roster.toml").map_err(|e| e.to_string())?;
            assert_eq!(config.service.name, "from-file");
            assert_eq!(config.service.port, 7100);
            assert_eq!(config.pagination.max_size, 50);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_value_is_config_error() {
        Jail::expect_with(|jail| {
            jail.set_env("ROSTER_SERVICE__PORT", "not-a-port");
            let result = Config::load_from("missing.toml");
            assert!(matches!(result, Err(crate::Error::Config(_))));
            Ok(())
        });
    }
}
