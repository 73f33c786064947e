//! `tdetalledetencion` row: one detention event for a detainee

use chrono::{Local, NaiveDate, NaiveTime};

use super::PersonRecord;

/// Event type recorded for every imported row
pub const EVENT_TYPE_DISPOSITION: &str = "DISPOSICIÓN";

/// Detention event row
///
/// Defaults (see [`Default`]): text fields empty, `iedad` 0, `dtfecha`
/// `None` (replaced by the current date at insert time). `iiddetenido` must
/// reference an existing `tdetenido` row; the store's foreign key enforces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetentionDetailEntity {
    pub iiddetenido: i64,
    /// Remission code, see [`crate::services::codes::remission_code`]
    pub sremision: String,
    pub dtfecha: Option<NaiveDate>,
    /// Time of day, `HH:MM` 24-hour
    pub shora: String,
    pub stipoevento: String,
    pub sfundamento: String,
    pub sconsistente: String,
    pub saliasdetencion: String,
    pub iedad: i32,
    pub sgradoestudio: String,
    pub socupacion: String,
    pub scalle: String,
    pub scolonia: String,
    pub sciudad_municipio: String,
}

impl DetentionDetailEntity {
    /// Disposition event for an imported record, stamped with the current local time
    pub fn disposition(iiddetenido: i64, sremision: String, record: &PersonRecord) -> Self {
        Self::disposition_at(iiddetenido, sremision, record, Local::now().time())
    }

    /// Disposition event stamped with an explicit time of day
    pub fn disposition_at(
        iiddetenido: i64,
        sremision: String,
        record: &PersonRecord,
        time: NaiveTime,
    ) -> Self {
        Self {
            iiddetenido,
            sremision,
            shora: time.format("%H:%M").to_string(),
            stipoevento: EVENT_TYPE_DISPOSITION.to_string(),
            sconsistente: record.observation.clone().unwrap_or_default(),
            saliasdetencion: record.alias.clone().unwrap_or_default(),
            ..Default::default()
        }
    }
}
