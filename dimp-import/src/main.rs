//! dimp-import - Detainee batch importer
//!
//! Reads person rows from a spreadsheet, stores each as `tdetenido` +
//! `tdetalledetencion` rows, then registers the person (and photo) with the
//! Artemis identity service.
//!
//! Exit status is non-zero when the batch cannot start or finish (bad
//! configuration, unreadable spreadsheet, unreachable store). Per-record
//! failures are reported in the summary and do not affect the exit status.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};

use dimp_common::config::load_optional_toml_config;
use dimp_import::artemis::ArtemisClient;
use dimp_import::config::{ConfigOverrides, ImportConfig, CONFIG_FILE_NAME};
use dimp_import::services::{log_report, read_person_records, BatchRunner, RecordProcessor};

/// Command-line arguments for dimp-import
#[derive(Parser, Debug)]
#[command(name = "dimp-import")]
#[command(about = "Import detainee records into the local store and Artemis")]
#[command(version)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, env = "DIMP_CONFIG")]
    config: Option<PathBuf>,

    /// sqlx database URL of the local store
    #[arg(long, env = "DIMP_DATABASE_URL")]
    database_url: Option<String>,

    /// Spreadsheet with the person rows
    #[arg(short, long, env = "DIMP_SPREADSHEET")]
    spreadsheet: Option<PathBuf>,

    /// Directory that photo filenames are relative to
    #[arg(short, long, env = "DIMP_IMAGES_DIR")]
    images_dir: Option<PathBuf>,

    /// Pause between records, in milliseconds
    #[arg(long, env = "DIMP_PACING_MS")]
    pacing_ms: Option<u64>,

    /// Store records locally without calling Artemis
    #[arg(long)]
    local_only: bool,

    /// Write the batch summary as JSON to this file
    #[arg(long)]
    summary_json: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let loaded = load_optional_toml_config(args.config.as_deref(), CONFIG_FILE_NAME)
        .context("Failed to load configuration file")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&loaded.config.logging.level)),
        )
        .init();

    info!(
        "Starting dimp-import v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    loaded.log_source();

    match run(args, loaded.config).await {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("Fatal error, import aborted: {:#}", e);
            Err(e)
        }
    }
}

async fn run(args: Args, toml_config: dimp_common::config::TomlConfig) -> Result<()> {
    let overrides = ConfigOverrides {
        database_url: args.database_url,
        spreadsheet_path: args.spreadsheet,
        images_dir: args.images_dir,
        pacing_ms: args.pacing_ms,
        local_only: args.local_only,
    };
    let config = ImportConfig::resolve(overrides, &toml_config).context("Invalid configuration")?;

    info!("Spreadsheet: {}", config.spreadsheet_path.display());
    info!("Images: {}", config.images_dir.display());

    let records = read_person_records(&config.spreadsheet_path).context("Failed to read spreadsheet")?;
    if records.is_empty() {
        warn!("No records to import");
        return Ok(());
    }

    let db_pool = dimp_import::db::init_database_pool(&config.database_url)
        .await
        .context("Failed to connect to the local store")?;
    info!("Database connection established");

    let mut processor = RecordProcessor::new(db_pool.clone(), config.images_dir.clone());
    if let Some(artemis) = &config.artemis {
        let client = ArtemisClient::new(artemis).context("Failed to create Artemis client")?;
        info!("Forwarding to Artemis at {}", artemis.base_url);
        processor = processor.with_identity_service(Arc::new(client));
    }

    let runner = BatchRunner::new(processor, config.pacing);
    let summary = runner.run(&records).await;
    log_report(&summary);

    if let Some(path) = args.summary_json {
        let json = serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
        tokio::fs::write(&path, json)
            .await
            .with_context(|| format!("Failed to write summary to {}", path.display()))?;
        info!("Summary written to {}", path.display());
    }

    db_pool.close().await;
    info!("Database connection closed");

    Ok(())
}
