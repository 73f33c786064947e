//! Detainee (`tdetenido`) persistence

use chrono::Local;
use dimp_common::Result;
use sqlx::{Sqlite, Transaction};

use crate::models::DetaineePersonEntity;

/// Insert one detainee row inside the caller's transaction
///
/// `dtfecha` falls back to the current local timestamp. Returns the
/// store-assigned `iiddetenido`.
pub async fn insert_detainee(
    tx: &mut Transaction<'_, Sqlite>,
    detainee: &DetaineePersonEntity,
) -> Result<i64> {
    let dtfecha = detainee.dtfecha.unwrap_or_else(|| Local::now().naive_local());

    let result = sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO tdetenido (
            snombre, sapellidopaterno, sapellidomaterno, snombrenormalizado,
            irepeticiones, salias, ssexo, dtfecha
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING iiddetenido
        "#,
    )
    .bind(&detainee.snombre)
    .bind(&detainee.sapellidopaterno)
    .bind(&detainee.sapellidomaterno)
    .bind(&detainee.snombrenormalizado)
    .bind(detainee.irepeticiones)
    .bind(&detainee.salias)
    .bind(&detainee.ssexo)
    .bind(dtfecha)
    .fetch_one(&mut **tx)
    .await;

    match result {
        Ok(id) => {
            tracing::debug!(iiddetenido = id, snombre = %detainee.snombre, "Inserted detainee");
            Ok(id)
        }
        Err(e) => {
            tracing::error!(snombre = %detainee.snombre, error = %e, "Detainee insert failed");
            Err(e.into())
        }
    }
}
