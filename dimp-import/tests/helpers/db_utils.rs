//! Database Test Utilities

use sqlx::{FromRow, SqlitePool};

/// Create an in-memory store with the importer tables
pub async fn create_test_db() -> SqlitePool {
    dimp_import::db::init_database_pool("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database")
}

/// Row count of a table
pub async fn count_rows(pool: &SqlitePool, table_name: &str) -> i64 {
    let query = format!("SELECT COUNT(*) FROM {}", table_name);
    sqlx::query_scalar(&query).fetch_one(pool).await.unwrap()
}

/// Subset of `tdetalledetencion` checked by tests
#[derive(Debug, FromRow)]
pub struct DetailRow {
    pub iiddetalledetencion: i64,
    pub iiddetenido: i64,
    pub sremision: String,
    pub stipoevento: String,
    pub sconsistente: String,
    pub saliasdetencion: String,
    pub iedad: i64,
}

pub async fn detention_details_for(pool: &SqlitePool, detainee_id: i64) -> Vec<DetailRow> {
    sqlx::query_as::<_, DetailRow>(
        r#"
        SELECT iiddetalledetencion, iiddetenido, sremision, stipoevento,
               sconsistente, saliasdetencion, iedad
        FROM tdetalledetencion
        WHERE iiddetenido = ?
        ORDER BY iiddetalledetencion
        "#,
    )
    .bind(detainee_id)
    .fetch_all(pool)
    .await
    .unwrap()
}
