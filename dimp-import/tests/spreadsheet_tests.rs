//! Spreadsheet reader tests against a real workbook
//!
//! `fixtures/personas_two_sheets.xlsx` has two worksheets:
//! - "Personas": header row, Juan Perez (ordinal 1, birth date as a serial
//!   number), a row with a blank ordinal, Luis Gomez (ordinal 3, birth date as
//!   `dd/mm/yyyy` text)
//! - "Notas": header row and one person row that must never be imported

use chrono::NaiveDate;
use std::path::PathBuf;

use dimp_import::services::{read_person_records, SpreadsheetError};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_reads_first_sheet_without_header_or_blank_ordinals() {
    let records = read_person_records(&fixture("personas_two_sheets.xlsx")).unwrap();

    let ordinals: Vec<&str> = records.iter().map(|r| r.ordinal.as_str()).collect();
    assert_eq!(ordinals, vec!["1", "3"]);
}

#[test]
fn test_second_sheet_is_ignored() {
    let records = read_person_records(&fixture("personas_two_sheets.xlsx")).unwrap();

    assert!(records.iter().all(|r| r.ordinal != "99"));
    assert!(records.iter().all(|r| r.paternal_surname != "Otro"));
}

#[test]
fn test_row_columns_map_by_position() {
    let records = read_person_records(&fixture("personas_two_sheets.xlsx")).unwrap();
    let expected_birth = NaiveDate::from_ymd_opt(1990, 4, 15);

    let juan = &records[0];
    assert_eq!(juan.paternal_surname, "Perez");
    assert_eq!(juan.maternal_surname, "Lopez");
    assert_eq!(juan.given_name1, "Juan");
    assert_eq!(juan.given_name2, None);
    assert_eq!(juan.birth_date, expected_birth);
    assert_eq!(juan.alias.as_deref(), Some("Alias1"));
    assert_eq!(juan.observation.as_deref(), Some("Obs1"));
    assert_eq!(juan.photo_filename.as_deref(), Some("photo1.jpg"));

    let luis = &records[1];
    assert_eq!(luis.given_names(), "Luis Carlos");
    assert_eq!(luis.family_names(), "Gomez Diaz");
    assert_eq!(luis.birth_date, expected_birth);
    assert_eq!(luis.alias, None);
    assert_eq!(luis.photo_filename.as_deref(), Some("photo3.jpg"));
}

#[test]
fn test_non_spreadsheet_file_is_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("personas.xlsx");
    std::fs::write(&path, b"this is not a zip archive").unwrap();

    let err = read_person_records(&path).unwrap_err();
    assert!(matches!(err, SpreadsheetError::Open { .. }));
}
