//! Configuration resolution for dimp-import
//!
//! Provides multi-tier configuration resolution with CLI/ENV → TOML → default
//! priority. Artemis credentials come from the environment or the `[artemis]`
//! TOML table and are never compiled in.

use dimp_common::config::{resolve_credential, resolve_setting, ArtemisToml, TomlConfig};
use dimp_common::Result;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// TOML file name looked up in the platform config directory
pub const CONFIG_FILE_NAME: &str = "dimp-import.toml";

pub const DEFAULT_DATABASE_URL: &str = "sqlite://dimp.db?mode=rwc";
pub const DEFAULT_SPREADSHEET_PATH: &str = "src/docs/personas_extraidas.xlsx";
pub const DEFAULT_IMAGES_DIR: &str = "src/extracted_images";
pub const DEFAULT_PACING_MS: u64 = 1500;

pub const ARTEMIS_URL_ENV: &str = "ARTEMIS_URL";
pub const ARTEMIS_APP_KEY_ENV: &str = "ARTEMIS_APP_KEY";
pub const ARTEMIS_SECRET_KEY_ENV: &str = "ARTEMIS_SECRET_KEY";

/// Connection settings for the Artemis gateway
#[derive(Clone)]
pub struct ArtemisConfig {
    /// Scheme, host and port, without trailing slash
    pub base_url: String,
    pub app_key: String,
    pub app_secret: String,
    /// Skip TLS certificate validation. On by default: the deployed gateway
    /// presents a self-signed certificate.
    pub accept_invalid_certs: bool,
    /// Per-request timeout; `None` keeps the HTTP client default
    pub timeout: Option<Duration>,
}

impl ArtemisConfig {
    pub fn new(base_url: &str, app_key: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            app_key: app_key.into(),
            app_secret: app_secret.into(),
            accept_invalid_certs: true,
            timeout: None,
        }
    }

    /// Resolve from environment, then the `[artemis]` TOML table
    pub fn resolve(toml: Option<&ArtemisToml>) -> Result<Self> {
        let base_url = resolve_credential(ARTEMIS_URL_ENV, toml.and_then(|t| t.base_url.as_deref()))?;
        let app_key = resolve_credential(ARTEMIS_APP_KEY_ENV, toml.and_then(|t| t.app_key.as_deref()))?;
        let app_secret =
            resolve_credential(ARTEMIS_SECRET_KEY_ENV, toml.and_then(|t| t.app_secret.as_deref()))?;

        let mut config = Self::new(&base_url, app_key, app_secret);
        if let Some(accept) = toml.and_then(|t| t.accept_invalid_certs) {
            config.accept_invalid_certs = accept;
        }
        config.timeout = toml.and_then(|t| t.timeout_secs).map(Duration::from_secs);

        Ok(config)
    }
}

impl std::fmt::Debug for ArtemisConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArtemisConfig")
            .field("base_url", &self.base_url)
            .field("app_key", &self.app_key)
            .field("app_secret", &"<redacted>")
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Values given on the command line or through their environment variables
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub database_url: Option<String>,
    pub spreadsheet_path: Option<PathBuf>,
    pub images_dir: Option<PathBuf>,
    pub pacing_ms: Option<u64>,
    /// Store locally, never call the external service
    pub local_only: bool,
}

/// Complete importer configuration
#[derive(Debug, Clone)]
pub struct ImportConfig {
    pub database_url: String,
    pub spreadsheet_path: PathBuf,
    pub images_dir: PathBuf,
    pub pacing: Duration,
    /// `None` when running local-only
    pub artemis: Option<ArtemisConfig>,
}

impl ImportConfig {
    /// Merge overrides, TOML and built-in defaults
    ///
    /// # Errors
    ///
    /// Returns a configuration error when forwarding is enabled and any
    /// Artemis credential is missing.
    pub fn resolve(overrides: ConfigOverrides, toml: &TomlConfig) -> Result<Self> {
        let database_url = resolve_setting(
            "database_url",
            overrides.database_url,
            toml.database_url.clone(),
            DEFAULT_DATABASE_URL.to_string(),
        );
        let spreadsheet_path = resolve_setting(
            "spreadsheet_path",
            overrides.spreadsheet_path,
            toml.spreadsheet_path.clone(),
            PathBuf::from(DEFAULT_SPREADSHEET_PATH),
        );
        let images_dir = resolve_setting(
            "images_dir",
            overrides.images_dir,
            toml.images_dir.clone(),
            PathBuf::from(DEFAULT_IMAGES_DIR),
        );
        let pacing_ms = resolve_setting("pacing_ms", overrides.pacing_ms, toml.pacing_ms, DEFAULT_PACING_MS);

        let artemis = if overrides.local_only {
            info!("Local-only mode: records will not be forwarded to Artemis");
            None
        } else {
            Some(ArtemisConfig::resolve(toml.artemis.as_ref())?)
        };

        Ok(Self {
            database_url,
            spreadsheet_path,
            images_dir,
            pacing: Duration::from_millis(pacing_ms),
            artemis,
        })
    }
}
