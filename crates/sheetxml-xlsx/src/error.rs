//! XLSX cell serialization error types

use thiserror::Error;

/// Result type for XLSX operations
pub type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Errors that can occur while serializing cells
#[derive(Debug, Error)]
pub enum XlsxError {
    /// IO error from the output sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// XML error
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The cell's value is not allowed for its declared type
    #[error("Validation error: {0}")]
    Validation(String),

    /// The value cannot be rendered as text or as a number
    #[error("Conversion error: {0}")]
    Conversion(String),

    /// Cells handed to the sheet data writer out of row-major order
    #[error("Cell {current} written after {previous}; cells must be in row-major order")]
    OutOfOrder { previous: String, current: String },

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] sheetxml_core::Error),
}

impl XlsxError {
    pub(crate) fn conversion<S: Into<String>>(msg: S) -> Self {
        XlsxError::Conversion(msg.into())
    }
}
