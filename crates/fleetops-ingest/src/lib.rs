//! Spreadsheet ingestion pipeline (database-free half)
//!
//! Takes uploaded order-statement bytes through three stages:
//!
//! 1. [`decoder`] - CSV/XLSX/XLS bytes into a uniform grid of string cells,
//!    so downstream stages never know which format was uploaded.
//! 2. [`header`] - fuzzy matching of the first row against the known column
//!    roles (rider identifier, rider name, order count).
//! 3. [`row`] - per-row soft validation into either parsed fields or a
//!    skip reason.
//!
//! Rider matching, pricing, and persistence live in the API crate; everything
//! here is pure and unit-testable without a database.

pub mod decoder;
pub mod error;
pub mod header;
pub mod row;
pub mod validator;

pub use decoder::{decode_sheet, SheetFormat, SheetGrid};
pub use error::SheetError;
pub use header::{resolve_header, HeaderColumns};
pub use row::{parse_row, RowFields, RowOutcome, SkipReason};
pub use validator::SheetValidator;
