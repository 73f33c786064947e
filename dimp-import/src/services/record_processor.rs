//! Per-record import workflow
//!
//! **Algorithm:**
//! 1. Validate required fields (no I/O on failure)
//! 2. Local phase, one transaction:
//!    a. Insert `tdetenido`
//!    b. Insert `tdetalledetencion` referencing it
//!    c. Commit (any failure rolls back both rows)
//! 3. External phase, only after commit and only when an identity service is
//!    configured:
//!    a. Load the photo if the record names one (read failure → no photo)
//!    b. Register the person
//!    c. Attach the face when a photo was loaded
//!
//! External failures are returned inside the outcome and never undo the
//! local phase.

use sqlx::SqlitePool;
use std::path::PathBuf;
use std::sync::Arc;

use super::codes::{person_code, remission_code};
use super::photo::load_photo_base64;
use crate::artemis::{FaceAddition, IdentityService, PersonRegistration};
use crate::db::{insert_detainee, insert_detention_detail};
use crate::error::{ExternalPhaseError, RecordError};
use crate::models::{
    DetaineePersonEntity, DetentionDetailEntity, ExternalRegistration, LocalIds, PersonRecord,
    RecordOutcome,
};

/// Runs the two-phase workflow for single records
pub struct RecordProcessor {
    db: SqlitePool,
    identity: Option<Arc<dyn IdentityService>>,
    images_dir: PathBuf,
}

impl RecordProcessor {
    /// Local-only processor; add forwarding with [`Self::with_identity_service`]
    pub fn new(db: SqlitePool, images_dir: impl Into<PathBuf>) -> Self {
        Self {
            db,
            identity: None,
            images_dir: images_dir.into(),
        }
    }

    pub fn with_identity_service(mut self, identity: Arc<dyn IdentityService>) -> Self {
        self.identity = Some(identity);
        self
    }

    /// Process the record at zero-based `index` of the batch
    ///
    /// # Errors
    ///
    /// - [`RecordError::Validation`]: nothing was written or sent
    /// - [`RecordError::Store`]: the local transaction was rolled back and
    ///   the external phase was not attempted
    pub async fn process(&self, record: &PersonRecord, index: usize) -> Result<RecordOutcome, RecordError> {
        if let Err(e) = record.validate() {
            tracing::warn!(index, ordinal = %record.ordinal, error = %e, "Record skipped");
            return Err(e);
        }

        let local = self.store_locally(record, index).await?;

        let Some(identity) = self.identity.as_deref() else {
            return Ok(RecordOutcome {
                local,
                has_photo: false,
                external: None,
            });
        };

        let face_data = self.load_face(record).await;
        let has_photo = face_data.is_some();
        let external = register_externally(identity, record, person_code(index), face_data.as_deref()).await;

        match &external {
            Ok(registration) => tracing::info!(
                index,
                person_code = %registration.person_code,
                person_id = %registration.person_id,
                face_attached = registration.face_attached,
                "External registration succeeded"
            ),
            Err(e) => tracing::error!(
                index,
                detainee_id = local.detainee_id,
                error = %e,
                "External registration failed, local rows kept"
            ),
        }

        Ok(RecordOutcome {
            local,
            has_photo,
            external: Some(external),
        })
    }

    /// Local phase: both inserts in one transaction
    async fn store_locally(&self, record: &PersonRecord, index: usize) -> Result<LocalIds, RecordError> {
        let remission = remission_code(index);
        let mut tx = self.db.begin().await?;

        let inserted = async {
            let detainee_id = insert_detainee(&mut tx, &DetaineePersonEntity::from_record(record)).await?;
            let detail = DetentionDetailEntity::disposition(detainee_id, remission.clone(), record);
            let detention_detail_id = insert_detention_detail(&mut tx, &detail).await?;
            Ok::<_, dimp_common::Error>((detainee_id, detention_detail_id))
        }
        .await;

        match inserted {
            Ok((detainee_id, detention_detail_id)) => {
                tx.commit().await?;
                tracing::info!(
                    index,
                    detainee_id,
                    detention_detail_id,
                    remission = %remission,
                    "Local store committed"
                );
                Ok(LocalIds {
                    detainee_id,
                    detention_detail_id,
                    remission_code: remission,
                })
            }
            Err(e) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::warn!(index, error = %rollback_err, "Rollback failed");
                }
                tracing::error!(index, error = %e, "Local store failed, transaction rolled back");
                Err(RecordError::Store(e))
            }
        }
    }

    async fn load_face(&self, record: &PersonRecord) -> Option<String> {
        let filename = record.photo_filename.as_deref()?;

        match load_photo_base64(&self.images_dir, filename).await {
            Ok(data) => Some(data),
            Err(e) => {
                tracing::warn!(error = %e, "Photo unavailable, registering without face");
                None
            }
        }
    }
}

/// External phase: register the person, then attach the face if there is one
async fn register_externally(
    identity: &dyn IdentityService,
    record: &PersonRecord,
    person_code: String,
    face_data: Option<&str>,
) -> Result<ExternalRegistration, ExternalPhaseError> {
    let registration = PersonRegistration::new(person_code.clone(), record, face_data);

    let person_id = identity
        .register_person(&registration)
        .await
        .map_err(ExternalPhaseError::Registration)?;

    let face_attached = match face_data {
        Some(face) => {
            identity
                .add_face(&FaceAddition::new(person_id.clone(), record, face))
                .await
                .map_err(|source| ExternalPhaseError::FaceAttachment {
                    person_id: person_id.clone(),
                    source,
                })?;
            true
        }
        None => false,
    };

    Ok(ExternalRegistration {
        person_code,
        person_id,
        face_attached,
    })
}
