//! Detention detail (`tdetalledetencion`) persistence

use chrono::Local;
use dimp_common::Result;
use sqlx::{Sqlite, Transaction};

use crate::models::DetentionDetailEntity;

/// Insert one detention detail row inside the caller's transaction
///
/// `dtfecha` falls back to the current local date. The referenced detainee
/// is not looked up here; an unknown `iiddetenido` is rejected by the
/// foreign key constraint. Returns the store-assigned `iiddetalledetencion`.
pub async fn insert_detention_detail(
    tx: &mut Transaction<'_, Sqlite>,
    detail: &DetentionDetailEntity,
) -> Result<i64> {
    let dtfecha = detail.dtfecha.unwrap_or_else(|| Local::now().date_naive());

    let result = sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO tdetalledetencion (
            iiddetenido, sremision, dtfecha, shora, stipoevento, sfundamento,
            sconsistente, saliasdetencion, iedad, sgradoestudio, socupacion,
            scalle, scolonia, sciudad_municipio
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING iiddetalledetencion
        "#,
    )
    .bind(detail.iiddetenido)
    .bind(&detail.sremision)
    .bind(dtfecha)
    .bind(&detail.shora)
    .bind(&detail.stipoevento)
    .bind(&detail.sfundamento)
    .bind(&detail.sconsistente)
    .bind(&detail.saliasdetencion)
    .bind(detail.iedad)
    .bind(&detail.sgradoestudio)
    .bind(&detail.socupacion)
    .bind(&detail.scalle)
    .bind(&detail.scolonia)
    .bind(&detail.sciudad_municipio)
    .fetch_one(&mut **tx)
    .await;

    match result {
        Ok(id) => {
            tracing::debug!(
                iiddetalledetencion = id,
                iiddetenido = detail.iiddetenido,
                sremision = %detail.sremision,
                "Inserted detention detail"
            );
            Ok(id)
        }
        Err(e) => {
            tracing::error!(
                iiddetenido = detail.iiddetenido,
                sremision = %detail.sremision,
                error = %e,
                "Detention detail insert failed"
            );
            Err(e.into())
        }
    }
}
