//! Data row parsing
//!
//! Extracts the fields needed for one earnings record from a decoded data
//! row. Rows are best-effort: anything incomplete or nonsensical is skipped
//! with a reason rather than failing the run, so one garbage row never blocks
//! the well-formed remainder of a statement.

use std::fmt;

use crate::header::HeaderColumns;

/// Fields extracted from one well-formed data row.
///
/// `external_rider_id` and `rider_name` are kept exactly as the sheet
/// carried them; callers trim the identifier for assignment lookup but
/// persist the raw values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFields {
    pub external_rider_id: String,
    pub rider_name: String,
    pub order_count: i32,
}

/// Why a data row was excluded from processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingRiderId,
    MissingOrderCount,
    UnparsableOrderCount,
    NonPositiveOrderCount,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            SkipReason::MissingRiderId => "rider identifier cell is empty",
            SkipReason::MissingOrderCount => "order count cell is empty",
            SkipReason::UnparsableOrderCount => "order count is not an integer",
            SkipReason::NonPositiveOrderCount => "order count is not positive",
        };
        f.write_str(reason)
    }
}

/// Outcome of parsing one data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Parsed(RowFields),
    Skipped(SkipReason),
}

/// Extract earnings fields from a data row using the resolved columns.
///
/// The rider-name column is optional; when unresolved or empty the name is
/// carried as "". The required columns must have been checked with
/// [`HeaderColumns::require`] before the row loop starts; a ragged row that
/// is too short for them is skipped like an empty cell.
pub fn parse_row(row: &[String], columns: &HeaderColumns) -> RowOutcome {
    let external_rider_id = match cell(row, columns.rider_id) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => return RowOutcome::Skipped(SkipReason::MissingRiderId),
    };

    let raw_count = match cell(row, columns.order_count) {
        Some(value) if !value.is_empty() => value,
        _ => return RowOutcome::Skipped(SkipReason::MissingOrderCount),
    };

    let order_count = match raw_count.trim().parse::<i32>() {
        Ok(count) => count,
        Err(_) => return RowOutcome::Skipped(SkipReason::UnparsableOrderCount),
    };
    if order_count <= 0 {
        return RowOutcome::Skipped(SkipReason::NonPositiveOrderCount);
    }

    let rider_name = cell(row, columns.rider_name)
        .map(|value| value.to_string())
        .unwrap_or_default();

    RowOutcome::Parsed(RowFields {
        external_rider_id,
        rider_name,
        order_count,
    })
}

fn cell(row: &[String], index: Option<usize>) -> Option<&str> {
    index.and_then(|i| row.get(i)).map(String::as_str)
}
