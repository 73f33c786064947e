//! Identifiers derived from a record's position in the batch
//!
//! Both codes are unique within one run because records are processed
//! sequentially and each index is used once. Nothing prevents a second run
//! from producing the same codes again.

pub const REMISSION_CODE_BASE: usize = 10_000;
pub const PERSON_CODE_BASE: usize = 1_000_000;
pub const CODE_WIDTH: usize = 7;

/// `sremision` for the record at zero-based `index` (`0` → `"0010000"`)
pub fn remission_code(index: usize) -> String {
    format!("{:0width$}", REMISSION_CODE_BASE + index, width = CODE_WIDTH)
}

/// Artemis `personCode` for the record at zero-based `index`
///
/// Numbered from the one-based position: `0` → `"1000001"`.
pub fn person_code(index: usize) -> String {
    format!("{:0width$}", PERSON_CODE_BASE + index + 1, width = CODE_WIDTH)
}
