//! Prelude module - common imports for sheetxml users
//!
//! ```rust
//! use sheetxml::prelude::*;
//! ```

pub use crate::{
    // Cell types
    Cell,
    CellAddress,
    CellError,
    CellRange,
    CellValue,
    DataType,
    // Settings and context
    DateSystem,
    FormulaAttributes,
    Hyperlink,
    WorkbookSettings,
    WorksheetContext,
    // Writers
    CellWriter,
    SheetDataWriter,
    SheetWriter,
    WriteStrategy,
    WriterOptions,
    // Error types
    XlsxError,
    XlsxResult,
};
