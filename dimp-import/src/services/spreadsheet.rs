//! Spreadsheet input
//!
//! First worksheet only, first row is headers. Columns by position:
//!
//! | # | Content           |
//! |---|-------------------|
//! | 0 | ordinal           |
//! | 1 | paternal surname  |
//! | 2 | maternal surname  |
//! | 3 | given name 1      |
//! | 4 | given name 2      |
//! | 5 | birth date        |
//! | 6 | alias             |
//! | 7 | observation       |
//! | 8 | photo filename    |
//!
//! Rows whose first cell is empty are skipped.

use calamine::{open_workbook_auto, Data, Range, Reader};
use chrono::{Duration, NaiveDate};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::PersonRecord;

const COL_ORDINAL: usize = 0;
const COL_PATERNAL: usize = 1;
const COL_MATERNAL: usize = 2;
const COL_NAME1: usize = 3;
const COL_NAME2: usize = 4;
const COL_BIRTH_DATE: usize = 5;
const COL_ALIAS: usize = 6;
const COL_OBSERVATION: usize = 7;
const COL_PHOTO: usize = 8;

/// Text date layouts accepted in the birth date column
const DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%Y-%m-%d", "%d-%m-%Y"];

#[derive(Debug, Error)]
pub enum SpreadsheetError {
    #[error("Failed to open spreadsheet {}: {message}", .path.display())]
    Open { path: PathBuf, message: String },

    #[error("Spreadsheet {} has no worksheets", .0.display())]
    NoWorksheet(PathBuf),

    #[error("Failed to read first worksheet of {}: {message}", .path.display())]
    Read { path: PathBuf, message: String },
}

/// Read every person row from the first worksheet
pub fn read_person_records(path: &Path) -> Result<Vec<PersonRecord>, SpreadsheetError> {
    let mut workbook = open_workbook_auto(path).map_err(|e| SpreadsheetError::Open {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| SpreadsheetError::NoWorksheet(path.to_path_buf()))?
        .map_err(|e| SpreadsheetError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let records = records_from_range(&range);
    tracing::info!(path = %path.display(), records = records.len(), "Spreadsheet loaded");

    Ok(records)
}

/// Map a worksheet range, skipping the header row
pub fn records_from_range(range: &Range<Data>) -> Vec<PersonRecord> {
    records_from_rows(range.rows())
}

pub fn records_from_rows<'a>(rows: impl Iterator<Item = &'a [Data]>) -> Vec<PersonRecord> {
    rows.skip(1).filter_map(person_record_from_row).collect()
}

/// Map one data row; `None` when the ordinal cell is empty
pub fn person_record_from_row(row: &[Data]) -> Option<PersonRecord> {
    let text = |col: usize| row.get(col).and_then(cell_text);

    let ordinal = text(COL_ORDINAL)?;

    Some(PersonRecord {
        ordinal,
        paternal_surname: text(COL_PATERNAL).unwrap_or_default(),
        maternal_surname: text(COL_MATERNAL).unwrap_or_default(),
        given_name1: text(COL_NAME1).unwrap_or_default(),
        given_name2: text(COL_NAME2),
        birth_date: row.get(COL_BIRTH_DATE).and_then(cell_date),
        alias: text(COL_ALIAS),
        observation: text(COL_OBSERVATION),
        photo_filename: text(COL_PHOTO),
    })
}

/// Cell as trimmed text; blank cells and error cells are `None`
fn cell_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty | Data::Error(_) => return None,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        // Whole numbers show without the trailing ".0"
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_datetime()?.date().format("%Y-%m-%d").to_string(),
    };

    (!text.is_empty()).then_some(text)
}

fn cell_date(cell: &Data) -> Option<NaiveDate> {
    match cell {
        Data::DateTime(dt) => dt.as_datetime().map(|d| d.date()),
        Data::DateTimeIso(s) => s.get(..10).and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()),
        Data::String(s) => {
            let s = s.trim();
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
        }
        Data::Float(serial) => excel_serial_to_date(*serial),
        Data::Int(serial) => excel_serial_to_date(*serial as f64),
        _ => None,
    }
}

/// Excel 1900 date system serial number to date
fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !(1.0..=2_958_465.0).contains(&serial) {
        return None;
    }
    NaiveDate::from_ymd_opt(1899, 12, 30)?.checked_add_signed(Duration::days(serial.trunc() as i64))
}
