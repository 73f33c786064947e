//! Data models for dimp-import
//!
//! - Input rows read from the spreadsheet
//! - Local store rows (`tdetenido`, `tdetalledetencion`)
//! - Per-record outcomes and batch statistics

pub mod detainee;
pub mod detention_detail;
pub mod outcome;
pub mod person_record;

pub use detainee::DetaineePersonEntity;
pub use detention_detail::DetentionDetailEntity;
pub use outcome::{BatchSummary, ExternalRegistration, FailureKind, LocalIds, RecordFailure, RecordOutcome};
pub use person_record::PersonRecord;
