//! # sheetxml
//!
//! Serialize spreadsheet cells into SpreadsheetML (`.xlsx`) worksheet XML.
//!
//! This is the cell layer only: every [`Cell`] becomes one `<c>` element
//! with inline strings, serial or ISO 8601 dates, and shared/array formula
//! metadata. Package assembly, shared strings and styles live elsewhere.
//!
//! ## Features
//!
//! - Streaming (`Incremental`) and in-memory (`Subtree`) writers with
//!   identical output
//! - 1900 and 1904 date systems, including the 1900 leap-year quirk
//! - Shared and array formulas
//! - Hyperlink collection per worksheet
//! - `<sheetData>`/`<row>` grouping with row-major order checks
//!
//! ## Example
//!
//! ```rust
//! use sheetxml::prelude::*;
//!
//! let mut worksheet = WorksheetContext::new();
//! let settings = WorkbookSettings::default();
//! let mut writer = SheetDataWriter::new(Vec::new(), WriterOptions::default());
//!
//! writer.write_cell(&Cell::new("A1", "Total"), &mut worksheet, &settings).unwrap();
//! writer.write_cell(&Cell::new("B1", "=SUM(B2:B9)"), &mut worksheet, &settings).unwrap();
//!
//! let xml = String::from_utf8(writer.finish().unwrap()).unwrap();
//! assert!(xml.starts_with(r#"<sheetData><row r="1">"#));
//! ```

pub mod prelude;

// Re-export core types
pub use sheetxml_core::{
    Cell,
    CellAddress,
    CellError,
    CellRange,
    CellValue,
    DataType,
    DateSystem,
    // Error types
    Error,
    FormulaAttributes,
    FormulaKind,
    Hyperlink,
    Result,
    SharedString,
    WorkbookSettings,
    WorksheetContext,
    MAX_COLS,
    MAX_ROWS,
};

// Re-export writer types
pub use sheetxml_xlsx::{
    codec, CellAttributes, CellWriter, IncrementalCellWriter, SheetDataWriter, SheetWriter,
    SubtreeCellWriter, WriteStrategy, WriterOptions, XlsxError, XlsxResult, XmlElement,
};
