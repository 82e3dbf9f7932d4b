//! Spreadsheet decoding
//!
//! Turns uploaded bytes into a [`SheetGrid`]: an ordered sequence of rows,
//! each an ordered sequence of string cells. CSV and Excel produce the same
//! grid shape, so header resolution and row processing never need to know
//! which format was uploaded. Excel cell types are normalized on the way in
//! (an integral float renders without a fractional part, an empty cell as "").

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};

use crate::error::SheetError;

/// Supported statement file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    Csv,
    Xlsx,
    Xls,
}

impl SheetFormat {
    /// Map a lowercased file extension onto a decodable format.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "csv" => Some(SheetFormat::Csv),
            "xlsx" => Some(SheetFormat::Xlsx),
            "xls" => Some(SheetFormat::Xls),
            _ => None,
        }
    }
}

/// Decoded spreadsheet: rows of raw string cells, header row included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetGrid {
    pub rows: Vec<Vec<String>>,
}

impl SheetGrid {
    /// Split into (header, data rows). A sheet without at least one data row
    /// beyond the header is a structural failure, reported as an error value
    /// so the caller can mark the upload failed rather than crash.
    pub fn split_header(&self) -> Result<(&[String], &[Vec<String>]), SheetError> {
        match self.rows.split_first() {
            Some((header, data)) if !data.is_empty() => Ok((header, data)),
            _ => Err(SheetError::TooFewRows),
        }
    }
}

/// Decode file bytes into a [`SheetGrid`] according to the declared format.
pub fn decode_sheet(bytes: &[u8], format: SheetFormat) -> Result<SheetGrid, SheetError> {
    let grid = match format {
        SheetFormat::Csv => decode_csv(bytes)?,
        SheetFormat::Xlsx | SheetFormat::Xls => decode_excel(bytes)?,
    };

    tracing::debug!(format = ?format, rows = grid.rows.len(), "Decoded statement sheet");
    Ok(grid)
}

fn decode_csv(bytes: &[u8]) -> Result<SheetGrid, SheetError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| SheetError::Decode(e.to_string()))?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }

    Ok(SheetGrid { rows })
}

fn decode_excel(bytes: &[u8]) -> Result<SheetGrid, SheetError> {
    let cursor = Cursor::new(bytes);
    let mut workbook =
        open_workbook_auto_from_rs(cursor).map_err(|e| SheetError::Decode(e.to_string()))?;

    // Statements arrive as single-sheet exports; only the first sheet counts.
    let sheet_count = workbook.sheet_names().len();
    if sheet_count > 1 {
        tracing::debug!(sheet_count, "Workbook has multiple sheets, reading the first only");
    }

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| SheetError::Decode("workbook contains no worksheets".to_string()))?
        .map_err(|e| SheetError::Decode(e.to_string()))?;

    let rows = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    Ok(SheetGrid { rows })
}

/// Normalize an Excel cell to the string form CSV would have produced.
/// Counts typically arrive as floats ("10.0"); an integral float must render
/// as "10" or the order-count parse downstream would reject it.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.is_finite() && f.abs() < 9_007_199_254_740_992.0 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
