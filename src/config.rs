//! Configuration management for knowledge-reinforce
//!
//! This module handles loading, parsing, and validation of configuration files,
//! and resolves the database URL from either the file or the environment.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DB_HOST_ENV, DB_NAME_ENV, DB_PASSWORD_ENV, DB_USER_ENV, LOCAL_CONFIG_FILE,
    TEST_DATABASE_SUFFIX,
};

/// Errors raised while resolving database settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Environment variable {0} is not set")]
    MissingVariable(&'static str),

    #[error("Invalid database URL: {0}")]
    InvalidUrl(String),
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

/// Database connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Full connection URL. When unset the URL is built from DB_USER, DB_PASSWORD, DB_HOST and DB_NAME
    pub url: Option<String>,
    /// Upper bound of the connection pool
    pub max_connections: u32,
    /// Log every SQL statement through the sqlx logger
    pub sqlx_logging: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
    /// Minimum level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 5,
            sqlx_logging: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl DatabaseConfig {
    /// Configuration pointing at an explicit URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Resolve the connection URL.
    ///
    /// An explicit `url` wins. Otherwise a MySQL URL is assembled from the
    /// DB_USER, DB_PASSWORD, DB_HOST and DB_NAME environment variables.
    pub fn resolve_url(&self) -> Result<String, ConfigError> {
        match &self.url {
            Some(url) if url.trim().is_empty() => Err(ConfigError::InvalidUrl(url.clone())),
            Some(url) => Ok(url.clone()),
            None => Self::url_from_env(""),
        }
    }

    /// Same as [`resolve_url`](Self::resolve_url) but targets the `<DB_NAME>_test` database
    /// when the URL comes from the environment.
    pub fn resolve_test_url(&self) -> Result<String, ConfigError> {
        match &self.url {
            Some(_) => self.resolve_url(),
            None => Self::url_from_env(TEST_DATABASE_SUFFIX),
        }
    }

    fn url_from_env(name_suffix: &str) -> Result<String, ConfigError> {
        let user = env_var(DB_USER_ENV)?;
        let password = env_var(DB_PASSWORD_ENV)?;
        let host = env_var(DB_HOST_ENV)?;
        let name = env_var(DB_NAME_ENV)?;
        Ok(mysql_url(&user, &password, &host, &format!("{}{}", name, name_suffix)))
    }
}

fn env_var(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVariable(name))
}

/// Build a MySQL connection URL from its parts.
pub fn mysql_url(user: &str, password: &str, host: &str, database: &str) -> String {
    format!("mysql://{}:{}@{}/{}", user, password, host, database)
}

impl LoggingConfig {
    /// Parsed log level filter.
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level
            .parse::<log::LevelFilter>()
            .map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file();

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
            if xdg_config.exists() {
                return Some(xdg_config);
            }
        }

        None
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.database.max_connections == 0 {
            anyhow::bail!("max_connections must be at least 1");
        }

        if let Some(url) = &self.database.url {
            if url.trim().is_empty() {
                anyhow::bail!("database url cannot be empty; remove it to use DB_* environment variables");
            }
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# knowledge-reinforce configuration file\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(CONFIG_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join(CONFIG_FILE_NAME))
    }
}
