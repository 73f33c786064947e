//! Configuration loading and setting resolution
//!
//! Every setting resolves in the same priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Built-in default (fallback)
//!
//! Command line and environment are merged by clap before they reach this
//! module, so resolution here only sees "explicit value → TOML → default".

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Environment variable naming an explicit TOML config file
pub const CONFIG_PATH_ENV: &str = "DIMP_CONFIG";

/// Bootstrap configuration loaded from TOML
///
/// All fields are optional. Anything missing falls back to built-in
/// defaults owned by the consuming binary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// sqlx connection URL for the local store
    #[serde(default)]
    pub database_url: Option<String>,

    /// Spreadsheet holding the person rows
    #[serde(default)]
    pub spreadsheet_path: Option<PathBuf>,

    /// Directory that photo filenames are resolved against
    #[serde(default)]
    pub images_dir: Option<PathBuf>,

    /// Delay between records, in milliseconds
    #[serde(default)]
    pub pacing_ms: Option<u64>,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// External identity service section (optional)
    #[serde(default)]
    pub artemis: Option<ArtemisToml>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// `[artemis]` table of the TOML file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtemisToml {
    pub base_url: Option<String>,
    pub app_key: Option<String>,
    pub app_secret: Option<String>,
    /// Skip TLS certificate validation (the deployed service uses a
    /// self-signed certificate)
    pub accept_invalid_certs: Option<bool>,
    pub timeout_secs: Option<u64>,
}

/// Locate the TOML config file
///
/// Priority: explicit path → `DIMP_CONFIG` → `<config_dir>/dimp/<file_name>`.
/// The platform default is only returned when the file exists; explicit
/// paths are returned as given so a typo surfaces as a read error.
pub fn resolve_config_path(cli_arg: Option<&Path>, file_name: &str) -> Option<PathBuf> {
    if let Some(path) = cli_arg {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    dirs::config_dir()
        .map(|d| d.join("dimp").join(file_name))
        .filter(|p| p.exists())
}

/// Read and parse a TOML config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Read TOML {} failed: {}", path.display(), e)))?;

    let config: TomlConfig = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse TOML {} failed: {}", path.display(), e)))?;

    Ok(config)
}

/// TOML settings plus the file they came from
///
/// Loading usually happens before logging is set up, so the caller reports
/// `source` once the subscriber is installed (see [`LoadedConfig::log_source`]).
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: TomlConfig,
    /// `None` when no file was found and built-in defaults apply
    pub source: Option<PathBuf>,
}

impl LoadedConfig {
    pub fn log_source(&self) {
        match &self.source {
            Some(path) => info!("Loaded configuration from {}", path.display()),
            None => info!("No TOML config file found, using built-in defaults"),
        }
    }
}

/// Load the TOML config if one is found, otherwise return defaults
pub fn load_optional_toml_config(cli_arg: Option<&Path>, file_name: &str) -> Result<LoadedConfig> {
    match resolve_config_path(cli_arg, file_name) {
        Some(path) => Ok(LoadedConfig {
            config: load_toml_config(&path)?,
            source: Some(path),
        }),
        None => Ok(LoadedConfig::default()),
    }
}

/// Resolve one setting: explicit (CLI/ENV) → TOML → default
pub fn resolve_setting<T: std::fmt::Debug>(
    name: &str,
    explicit: Option<T>,
    toml_value: Option<T>,
    default: T,
) -> T {
    if let Some(value) = explicit {
        debug!(setting = name, ?value, "Setting from command line or environment");
        return value;
    }
    if let Some(value) = toml_value {
        debug!(setting = name, ?value, "Setting from TOML config");
        return value;
    }
    debug!(setting = name, value = ?default, "Setting from built-in default");
    default
}

/// Resolve a required credential: environment → TOML
///
/// Blank values are treated as absent.
pub fn resolve_credential(env_var: &str, toml_value: Option<&str>) -> Result<String> {
    let env_value = std::env::var(env_var).ok().filter(|v| is_valid_key(v));
    let toml_value = toml_value.filter(|v| is_valid_key(v));

    if env_value.is_some() && toml_value.is_some() {
        warn!(
            "{} found in environment and TOML config. Using environment (highest priority).",
            env_var
        );
    }

    env_value
        .or_else(|| toml_value.map(str::to_string))
        .ok_or_else(|| {
            Error::Config(format!(
                "{} not configured. Set the environment variable or the matching key in the [artemis] TOML table",
                env_var
            ))
        })
}

/// Validate a key/secret value (non-empty, non-whitespace)
pub fn is_valid_key(key: &str) -> bool {
    !key.trim().is_empty()
}
