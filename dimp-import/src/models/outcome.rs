//! Per-record outcomes and the batch summary

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ExternalPhaseError, RecordError};

/// Identifiers produced by a committed local phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalIds {
    pub detainee_id: i64,
    pub detention_detail_id: i64,
    pub remission_code: String,
}

/// Successful external registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalRegistration {
    /// Person code sent to the service
    pub person_code: String,
    /// Opaque id returned by the service
    pub person_id: String,
    /// Whether a face was attached after registration
    pub face_attached: bool,
}

/// Result of processing one record whose local phase committed
#[derive(Debug)]
pub struct RecordOutcome {
    pub local: LocalIds,
    /// A photo was loaded and encoded for this record
    pub has_photo: bool,
    /// External phase result; `None` when forwarding is disabled
    pub external: Option<Result<ExternalRegistration, ExternalPhaseError>>,
}

impl RecordOutcome {
    /// Remote person id, if registration got that far
    pub fn external_id(&self) -> Option<&str> {
        match &self.external {
            Some(Ok(registration)) => Some(registration.person_id.as_str()),
            Some(Err(err)) => err.person_id(),
            None => None,
        }
    }

    pub fn external_error(&self) -> Option<&ExternalPhaseError> {
        match &self.external {
            Some(Err(err)) => Some(err),
            _ => None,
        }
    }
}

/// Which stage rejected or degraded a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Validation,
    Local,
    External,
}

/// One entry in the summary's error list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordFailure {
    /// Zero-based index in the batch
    pub index: usize,
    pub person: String,
    pub kind: FailureKind,
    pub message: String,
}

/// Batch statistics
///
/// `successes` counts records whose local phase committed, whatever
/// happened remotely. `external_failures` is a subset of `successes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub total: usize,
    pub successes: usize,
    pub local_failures: usize,
    pub validation_failures: usize,
    pub external_failures: usize,
    pub with_photo: usize,
    pub without_photo: usize,
    pub failures: Vec<RecordFailure>,
}

impl BatchSummary {
    pub fn new(run_id: Uuid, total: usize) -> Self {
        Self {
            run_id,
            started_at: Utc::now(),
            finished_at: None,
            total,
            successes: 0,
            local_failures: 0,
            validation_failures: 0,
            external_failures: 0,
            with_photo: 0,
            without_photo: 0,
            failures: Vec::new(),
        }
    }

    /// Account for a record whose local phase committed
    pub fn record_success(&mut self, index: usize, person: String, outcome: &RecordOutcome) {
        self.successes += 1;
        if outcome.has_photo {
            self.with_photo += 1;
        } else {
            self.without_photo += 1;
        }

        if let Some(err) = outcome.external_error() {
            self.external_failures += 1;
            self.failures.push(RecordFailure {
                index,
                person,
                kind: FailureKind::External,
                message: err.to_string(),
            });
        }
    }

    /// Account for a record rejected before or during the local phase
    pub fn record_failure(&mut self, index: usize, person: String, err: &RecordError) {
        let kind = match err {
            RecordError::Validation(_) => {
                self.validation_failures += 1;
                FailureKind::Validation
            }
            RecordError::Store(_) => {
                self.local_failures += 1;
                FailureKind::Local
            }
        };

        self.failures.push(RecordFailure {
            index,
            person,
            kind,
            message: err.to_string(),
        });
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Report lines, in display order
    pub fn report_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Records imported: {}/{}", self.successes, self.total),
            format!("Local store failures: {}", self.local_failures),
            format!("Validation failures: {}", self.validation_failures),
            format!("External service failures: {}", self.external_failures),
            format!("With photo: {}", self.with_photo),
            format!("Without photo: {}", self.without_photo),
        ];

        for (n, failure) in self.failures.iter().enumerate() {
            lines.push(format!(
                "{}. [{:?}] #{} {}: {}",
                n + 1,
                failure.kind,
                failure.index + 1,
                failure.person,
                failure.message
            ));
        }

        lines
    }
}
