//! dimp-import library interface
//!
//! Reads person rows from a spreadsheet, stores each one as a detainee plus
//! a detention detail in the local store, then forwards it to the Artemis
//! identity service on a best-effort basis.

pub mod artemis;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;

pub use crate::error::{ExternalPhaseError, RecordError};
