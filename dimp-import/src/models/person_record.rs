//! Input record read from the spreadsheet

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::RecordError;

/// One spreadsheet row
///
/// Required text fields are stored trimmed (possibly empty, validation
/// happens in [`PersonRecord::validate`]). Optional fields are `None` when
/// the cell was blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    /// Ordinal number from the first column
    pub ordinal: String,
    pub paternal_surname: String,
    pub maternal_surname: String,
    pub given_name1: String,
    pub given_name2: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub alias: Option<String>,
    pub observation: Option<String>,
    /// Photo filename, relative to the images directory
    pub photo_filename: Option<String>,
}

impl PersonRecord {
    /// Reject records missing given name 1 or paternal surname
    pub fn validate(&self) -> Result<(), RecordError> {
        let mut missing = Vec::new();
        if self.given_name1.trim().is_empty() {
            missing.push("given name");
        }
        if self.paternal_surname.trim().is_empty() {
            missing.push("paternal surname");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(RecordError::Validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )))
        }
    }

    /// Given names joined with a single space (`"Juan Carlos"`, or `"Juan"`)
    pub fn given_names(&self) -> String {
        join_present(&[Some(self.given_name1.as_str()), self.given_name2.as_deref()])
    }

    /// Surnames joined with a single space (`"Perez Lopez"`)
    pub fn family_names(&self) -> String {
        join_present(&[
            Some(self.paternal_surname.as_str()),
            Some(self.maternal_surname.as_str()),
        ])
    }

    /// Short label for logs and error reports
    pub fn display_name(&self) -> String {
        join_present(&[
            Some(self.given_name1.as_str()),
            Some(self.paternal_surname.as_str()),
        ])
    }
}

fn join_present(parts: &[Option<&str>]) -> String {
    parts
        .iter()
        .flatten()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
