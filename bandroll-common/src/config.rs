//! Configuration loading
//!
//! Bootstrap settings are resolved in this priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! A missing TOML file is not an error: a warning is logged and defaults are
//! used. A file that exists but does not parse is a configuration error.

use crate::db::init::DEFAULT_MAX_CONNECTIONS;
use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5730;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Bootstrap configuration loaded from TOML file
///
/// Every field is optional so a partial file only overrides what it names.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Path to SQLite database file
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    #[serde(default)]
    pub host: Option<String>,

    #[serde(default)]
    pub port: Option<u16>,

    /// Connection pool size
    #[serde(default)]
    pub max_connections: Option<u32>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default)]
    pub level: Option<String>,
}

/// Compiled-in fallbacks
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub config_path: PathBuf,
    pub max_connections: u32,
    pub log_level: String,
}

impl CompiledDefaults {
    pub fn for_current_platform() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database_path: default_data_dir().join("bandroll.db"),
            config_path: default_config_path(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Values supplied on the command line (clap already folds in env vars)
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database_path: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
}

/// Fully resolved service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub max_connections: u32,
    pub log_level: String,
}

impl ServiceConfig {
    /// Resolve the configuration from overrides, the TOML file and defaults
    pub fn resolve(overrides: Overrides) -> Result<Self> {
        let defaults = CompiledDefaults::for_current_platform();
        let config_path = overrides
            .config_path
            .clone()
            .unwrap_or_else(|| defaults.config_path.clone());
        let toml_config = load_toml_config(&config_path)?;

        Ok(Self::merge(overrides, toml_config, defaults))
    }

    /// Apply the priority order to already-loaded sources
    pub fn merge(overrides: Overrides, toml: TomlConfig, defaults: CompiledDefaults) -> Self {
        Self {
            host: overrides.host.or(toml.host).unwrap_or(defaults.host),
            port: overrides.port.or(toml.port).unwrap_or(defaults.port),
            database_path: overrides
                .database_path
                .or(toml.database_path)
                .unwrap_or(defaults.database_path),
            max_connections: toml.max_connections.unwrap_or(defaults.max_connections),
            log_level: toml.logging.level.unwrap_or(defaults.log_level),
        }
    }

    /// `host:port` string for binding the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Load the TOML bootstrap file
///
/// Returns `TomlConfig::default()` when the file does not exist.
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    if !path.exists() {
        warn!(
            "Config file {} not found, using defaults",
            path.display()
        );
        return Ok(TomlConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config = toml::from_str::<TomlConfig>(&content)
        .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))?;

    info!("Loaded config file {}", path.display());
    Ok(config)
}

/// `<config dir>/bandroll/config.toml`
fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("bandroll").join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("./bandroll.toml"))
}

/// OS-dependent default data folder
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("bandroll"))
        .unwrap_or_else(|| PathBuf::from("./bandroll_data"))
}
