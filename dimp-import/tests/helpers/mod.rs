//! Test Helper Utilities
//!
//! Shared utilities for testing dimp-import

#![allow(dead_code, unused_imports)]

pub mod db_utils;
pub mod fake_identity;
pub mod log_capture;
pub mod mock_artemis;

// Re-export commonly used items
pub use db_utils::{count_rows, create_test_db, detention_details_for};
pub use fake_identity::{FakeIdentityService, Failure};
pub use log_capture::LogCapture;
pub use mock_artemis::{spawn_mock_artemis, CapturedRequest, MockArtemis};

use dimp_import::models::PersonRecord;

/// The reference row: `["1","Perez","Lopez","Juan","",null,"Alias1","Obs1","photo1.jpg"]`
pub fn juan_perez() -> PersonRecord {
    PersonRecord {
        ordinal: "1".to_string(),
        paternal_surname: "Perez".to_string(),
        maternal_surname: "Lopez".to_string(),
        given_name1: "Juan".to_string(),
        given_name2: None,
        birth_date: None,
        alias: Some("Alias1".to_string()),
        observation: Some("Obs1".to_string()),
        photo_filename: Some("photo1.jpg".to_string()),
    }
}

/// Minimal valid record without photo
pub fn person(ordinal: usize, given: &str, paternal: &str) -> PersonRecord {
    PersonRecord {
        ordinal: ordinal.to_string(),
        given_name1: given.to_string(),
        paternal_surname: paternal.to_string(),
        ..Default::default()
    }
}
