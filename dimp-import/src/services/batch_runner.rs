//! Sequential batch import
//!
//! Records run strictly one after another in input order: the index of each
//! record is what makes its remission and person codes unique. A fixed
//! pause separates records to keep the load on the external service low.

use std::time::Duration;
use uuid::Uuid;

use super::record_processor::RecordProcessor;
use crate::models::{BatchSummary, PersonRecord};

pub struct BatchRunner {
    processor: RecordProcessor,
    pacing: Duration,
}

impl BatchRunner {
    pub fn new(processor: RecordProcessor, pacing: Duration) -> Self {
        Self { processor, pacing }
    }

    /// Import every record, continuing past per-record failures
    pub async fn run(&self, records: &[PersonRecord]) -> BatchSummary {
        let run_id = Uuid::new_v4();
        let total = records.len();
        let mut summary = BatchSummary::new(run_id, total);

        tracing::info!(%run_id, total, pacing_ms = self.pacing.as_millis() as u64, "Starting batch import");

        for (index, record) in records.iter().enumerate() {
            let person = record.display_name();
            tracing::info!(%run_id, "[{}/{}] Processing {}", index + 1, total, person);

            match self.processor.process(record, index).await {
                Ok(outcome) => summary.record_success(index, person, &outcome),
                Err(e) => {
                    tracing::error!(%run_id, index, error = %e, "Record not imported");
                    summary.record_failure(index, person, &e);
                }
            }

            if index + 1 < total && !self.pacing.is_zero() {
                tokio::time::sleep(self.pacing).await;
            }
        }

        summary.finish();
        tracing::info!(
            %run_id,
            successes = summary.successes,
            local_failures = summary.local_failures,
            validation_failures = summary.validation_failures,
            external_failures = summary.external_failures,
            "Batch import complete"
        );

        summary
    }
}

/// Log the summary report line by line
pub fn log_report(summary: &BatchSummary) {
    tracing::info!(run_id = %summary.run_id, "Import summary");
    for line in summary.report_lines() {
        tracing::info!("{}", line);
    }
}
