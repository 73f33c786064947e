//! Import services
//!
//! - Spreadsheet reading and photo loading
//! - Code generation from batch position
//! - Per-record processing and the sequential batch runner

pub mod batch_runner;
pub mod codes;
pub mod photo;
pub mod record_processor;
pub mod spreadsheet;

pub use batch_runner::{log_report, BatchRunner};
pub use photo::{load_photo_base64, PhotoError};
pub use record_processor::RecordProcessor;
pub use spreadsheet::{read_person_records, SpreadsheetError};
