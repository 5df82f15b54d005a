//! # sheetxml-core
//!
//! Core data structures for the sheetxml cell serializer.
//!
//! This crate provides the inputs the XLSX cell writer consumes:
//! - [`Cell`] - A coordinate, declared [`DataType`], [`CellValue`], style id and hyperlink
//! - [`CellAddress`] and [`CellRange`] - A1-style addressing
//! - [`WorksheetContext`] - Shared-formula table and the hyperlink collection of one sheet
//! - [`WorkbookSettings`] - Workbook-wide date handling
//!
//! None of these types point back at each other; the writer receives the
//! worksheet and workbook context explicitly on every call.
//!
//! ## Example
//!
//! ```rust
//! use sheetxml_core::{Cell, DataType, FormulaAttributes, WorksheetContext};
//!
//! let cell = Cell::new("B2", "=SUM(A1:A2)");
//! assert_eq!(cell.data_type(), DataType::Formula);
//!
//! let mut sheet = WorksheetContext::new();
//! let shared = FormulaAttributes::shared_master(0, "B2:B9").unwrap();
//! sheet.set_formula_attributes("B2", shared).unwrap();
//! assert!(sheet.formula_attributes("B2").is_some());
//! ```

pub mod cell;
pub mod error;
pub mod formula;
pub mod hyperlink;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use cell::{Cell, CellAddress, CellError, CellRange, CellValue, DataType, SharedString};
pub use error::{Error, Result};
pub use formula::{FormulaAttributes, FormulaKind};
pub use hyperlink::Hyperlink;
pub use workbook::{DateSystem, WorkbookSettings};
pub use worksheet::WorksheetContext;

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;
