use std::path::Path;

use crate::error::SheetError;

/// Pre-decode validation of an uploaded statement file.
///
/// Runs before any parsing work: the fail-fast gate for file type and size.
/// Limits come from configuration so deployments can restrict the accepted
/// formats without a rebuild.
pub struct SheetValidator {
    max_file_size: usize,
    allowed_extensions: Vec<String>,
}

impl SheetValidator {
    pub fn new(max_file_size: usize, allowed_extensions: Vec<String>) -> Self {
        Self {
            max_file_size,
            allowed_extensions,
        }
    }

    /// Validate file size
    pub fn validate_file_size(&self, size: usize) -> Result<(), SheetError> {
        if size == 0 {
            return Err(SheetError::EmptyFile);
        }

        if size > self.max_file_size {
            return Err(SheetError::FileTooLarge {
                size,
                max: self.max_file_size,
            });
        }

        Ok(())
    }

    /// Validate the file extension and return it lowercased.
    pub fn validate_extension(&self, filename: &str) -> Result<String, SheetError> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .ok_or_else(|| SheetError::UnsupportedExtension {
                extension: filename.to_string(),
                allowed: self.allowed_extensions.clone(),
            })?;

        if !self.allowed_extensions.contains(&extension) {
            return Err(SheetError::UnsupportedExtension {
                extension,
                allowed: self.allowed_extensions.clone(),
            });
        }

        Ok(extension)
    }
}
