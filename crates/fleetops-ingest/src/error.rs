/// Structural failures while turning an uploaded file into processable rows.
///
/// Every variant invalidates the whole upload before row processing begins;
/// per-row problems are never errors (see [`crate::row::SkipReason`]).
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("Unsupported file type: {extension} (allowed: {allowed:?})")]
    UnsupportedExtension {
        extension: String,
        allowed: Vec<String>,
    },

    #[error("File too large: {size} bytes (max: {max} bytes)")]
    FileTooLarge { size: usize, max: usize },

    #[error("Empty file")]
    EmptyFile,

    #[error("File must contain a header row and at least one data row")]
    TooFewRows,

    #[error("Could not identify required column(s): {0}")]
    MissingColumns(String),

    #[error("Failed to decode spreadsheet: {0}")]
    Decode(String),
}
