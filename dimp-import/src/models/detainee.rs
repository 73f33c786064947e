//! `tdetenido` row: a person, independent of any detention event

use chrono::NaiveDateTime;

use super::PersonRecord;

/// Default sex code for imported detainees
pub const DEFAULT_SEX_CODE: &str = "M";

/// Detainee identity row
///
/// Defaults (see [`Default`]):
/// - text fields: empty string
/// - `irepeticiones`: 0
/// - `ssexo`: `"M"`
/// - `dtfecha`: `None`, replaced by the current timestamp at insert time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetaineePersonEntity {
    /// Full given name (name 1 + name 2)
    pub snombre: String,
    pub sapellidopaterno: String,
    pub sapellidomaterno: String,
    /// Uppercase, accent-folded `name paternal maternal`
    pub snombrenormalizado: String,
    pub irepeticiones: i32,
    pub salias: String,
    pub ssexo: String,
    pub dtfecha: Option<NaiveDateTime>,
}

impl Default for DetaineePersonEntity {
    fn default() -> Self {
        Self {
            snombre: String::new(),
            sapellidopaterno: String::new(),
            sapellidomaterno: String::new(),
            snombrenormalizado: String::new(),
            irepeticiones: 0,
            salias: String::new(),
            ssexo: DEFAULT_SEX_CODE.to_string(),
            dtfecha: None,
        }
    }
}

impl DetaineePersonEntity {
    /// Build the row for an input record
    pub fn from_record(record: &PersonRecord) -> Self {
        let snombre = record.given_names();
        let snombrenormalizado = normalize_name(&format!(
            "{} {} {}",
            snombre, record.paternal_surname, record.maternal_surname
        ));

        Self {
            snombre,
            sapellidopaterno: record.paternal_surname.trim().to_string(),
            sapellidomaterno: record.maternal_surname.trim().to_string(),
            snombrenormalizado,
            salias: record.alias.clone().unwrap_or_default(),
            ..Default::default()
        }
    }
}

/// Uppercase, fold Spanish accented vowels, collapse whitespace
///
/// `Ñ` is a distinct letter and is kept.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .map(|word| word.chars().flat_map(char::to_uppercase).map(fold_accent).collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

fn fold_accent(c: char) -> char {
    match c {
        'Á' | 'À' | 'Ä' | 'Â' => 'A',
        'É' | 'È' | 'Ë' | 'Ê' => 'E',
        'Í' | 'Ì' | 'Ï' | 'Î' => 'I',
        'Ó' | 'Ò' | 'Ö' | 'Ô' => 'O',
        'Ú' | 'Ù' | 'Ü' | 'Û' => 'U',
        other => other,
    }
}
