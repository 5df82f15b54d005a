//! # sheetxml-xlsx
//!
//! SpreadsheetML (`.xlsx` worksheet XML) cell serialization for sheetxml.
//!
//! Each [`Cell`](sheetxml_core::Cell) becomes one `<c>` element. Two
//! strategies are available, see [`writer`]; both produce identical bytes.
//!
//! ```
//! use sheetxml_core::{Cell, WorkbookSettings, WorksheetContext};
//! use sheetxml_xlsx::{CellWriter, SheetWriter, WriteStrategy};
//!
//! let mut writer = SheetWriter::new(Vec::new(), WriteStrategy::Incremental);
//! let mut worksheet = WorksheetContext::new();
//! let settings = WorkbookSettings::default();
//!
//! writer.write_cell(&Cell::new("A1", 42), &mut worksheet, &settings, false).unwrap();
//! writer.write_cell(&Cell::new("B1", "=A1*2"), &mut worksheet, &settings, false).unwrap();
//!
//! let xml = String::from_utf8(writer.into_inner()).unwrap();
//! assert_eq!(xml, r#"<c r="A1" t="n"><v>42</v></c><c r="B1"><f>A1*2</f></c>"#);
//! ```

pub mod attributes;
pub mod codec;
pub mod error;
pub mod formula;
pub mod writer;

pub use attributes::{resolve, CellAttributes};
pub use error::{XlsxError, XlsxResult};
pub use writer::{
    CellWriter, IncrementalCellWriter, SheetDataWriter, SheetWriter, SubtreeCellWriter,
    WriteStrategy, WriterOptions, XmlElement,
};
