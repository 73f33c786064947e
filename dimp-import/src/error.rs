//! Error types for dimp-import
//!
//! Severity follows the stage that failed:
//! - [`RecordError`]: the record was not imported (batch continues)
//! - [`ExternalPhaseError`]: the record was imported locally, forwarding failed
//!
//! Fatal startup errors (configuration, spreadsheet, store connection) are
//! reported through `anyhow` in the binary.

use thiserror::Error;

use crate::artemis::ArtemisError;

/// Failure that prevents a record from being stored locally
#[derive(Debug, Error)]
pub enum RecordError {
    /// Required input field missing; nothing was written or sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// Local store failure; the record's transaction was rolled back
    #[error("Store error: {0}")]
    Store(#[from] dimp_common::Error),
}

impl From<sqlx::Error> for RecordError {
    fn from(err: sqlx::Error) -> Self {
        RecordError::Store(dimp_common::Error::Database(err))
    }
}

/// Failure of the best-effort forwarding phase
#[derive(Debug, Error)]
pub enum ExternalPhaseError {
    /// Person registration call failed
    #[error("Person registration failed: {0}")]
    Registration(#[source] ArtemisError),

    /// Person was registered but attaching the face failed
    #[error("Face attachment failed for person {person_id}: {source}")]
    FaceAttachment {
        person_id: String,
        #[source]
        source: ArtemisError,
    },
}

impl ExternalPhaseError {
    /// Remote person id, when registration succeeded before the failure
    pub fn person_id(&self) -> Option<&str> {
        match self {
            ExternalPhaseError::Registration(_) => None,
            ExternalPhaseError::FaceAttachment { person_id, .. } => Some(person_id.as_str()),
        }
    }
}
