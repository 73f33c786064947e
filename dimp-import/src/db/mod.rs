//! Local store access for dimp-import
//!
//! The importer writes two tables: `tdetenido` (one row per person) and
//! `tdetalledetencion` (one detention event referencing that person).

pub mod detainees;
pub mod detention_details;

pub use detainees::insert_detainee;
pub use detention_details::insert_detention_detail;

use dimp_common::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Initialize database connection pool
///
/// Foreign keys are enforced on every connection; the detention detail
/// insert relies on it to reject unknown detainee ids.
pub async fn init_database_pool(database_url: &str) -> Result<SqlitePool> {
    tracing::debug!("Connecting to database: {}", database_url);

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    // Records are processed one at a time; a single long-lived connection
    // also keeps `sqlite::memory:` databases alive for the whole run.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    init_tables(&pool).await?;

    Ok(pool)
}

/// Create the importer tables if they don't exist
///
/// Bootstrap only: existing tables are left untouched.
pub async fn init_tables(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tdetenido (
            iiddetenido INTEGER PRIMARY KEY AUTOINCREMENT,
            snombre TEXT NOT NULL,
            sapellidopaterno TEXT NOT NULL,
            sapellidomaterno TEXT NOT NULL DEFAULT '',
            snombrenormalizado TEXT NOT NULL DEFAULT '',
            irepeticiones INTEGER NOT NULL DEFAULT 0,
            salias TEXT NOT NULL DEFAULT '',
            ssexo TEXT NOT NULL DEFAULT 'M',
            dtfecha TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tdetalledetencion (
            iiddetalledetencion INTEGER PRIMARY KEY AUTOINCREMENT,
            iiddetenido INTEGER NOT NULL REFERENCES tdetenido(iiddetenido),
            sremision TEXT NOT NULL,
            dtfecha TEXT NOT NULL,
            shora TEXT NOT NULL DEFAULT '',
            stipoevento TEXT NOT NULL DEFAULT '',
            sfundamento TEXT NOT NULL DEFAULT '',
            sconsistente TEXT NOT NULL DEFAULT '',
            saliasdetencion TEXT NOT NULL DEFAULT '',
            iedad INTEGER NOT NULL DEFAULT 0,
            sgradoestudio TEXT NOT NULL DEFAULT '',
            socupacion TEXT NOT NULL DEFAULT '',
            scalle TEXT NOT NULL DEFAULT '',
            scolonia TEXT NOT NULL DEFAULT '',
            sciudad_municipio TEXT NOT NULL DEFAULT ''
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Database tables initialized (tdetenido, tdetalledetencion)");

    Ok(())
}
