//! Cell writers
//!
//! Two interchangeable strategies serialize a [`Cell`] into a `<c>` element:
//!
//! - [`IncrementalCellWriter`] streams events straight to the sink and keeps
//!   nothing in memory, for very large sheets.
//! - [`SubtreeCellWriter`] builds the whole `<c>` element as an
//!   [`XmlElement`] and hands it to the sink in one call.
//!
//! Both produce byte-identical output. The strategy is picked once through
//! [`WriterOptions`] when the [`SheetWriter`] is created.

mod incremental;
mod sheet_data;
mod subtree;

pub use incremental::IncrementalCellWriter;
pub use sheet_data::SheetDataWriter;
pub use subtree::{SubtreeCellWriter, XmlElement};

use std::io::Write;

use quick_xml::Writer;
use sheetxml_core::{Cell, CellValue, DataType, WorkbookSettings, WorksheetContext};

use crate::attributes::{self, CellAttributes};
use crate::codec;
use crate::error::{XlsxError, XlsxResult};
use crate::formula::{self, FormulaXmlAttributes};

/// Serializes one cell at a time into a sink
pub trait CellWriter {
    /// Write `cell` as a complete `<c>` element
    ///
    /// `styled` controls whether the cell's style id is written as `s`.
    /// Cells already written stay in the sink when this fails.
    fn write_cell(
        &mut self,
        cell: &Cell,
        worksheet: &mut WorksheetContext,
        settings: &WorkbookSettings,
        styled: bool,
    ) -> XlsxResult<()>;
}

/// Output strategy for cell elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteStrategy {
    /// Forward-only event stream
    #[default]
    Incremental,
    /// Build each element in memory, then emit it
    Subtree,
}

/// Writer configuration, fixed for the lifetime of a writer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriterOptions {
    pub strategy: WriteStrategy,
    /// Write `s` for cells that carry a style id
    pub styled: bool,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            strategy: WriteStrategy::Incremental,
            styled: true,
        }
    }
}

impl WriterOptions {
    pub fn with_strategy(mut self, strategy: WriteStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }
}

/// A cell writer using the strategy chosen at construction
pub enum SheetWriter<W: Write> {
    Incremental(IncrementalCellWriter<W>),
    Subtree(SubtreeCellWriter<W>),
}

impl<W: Write> SheetWriter<W> {
    /// Create a writer over `inner` using `strategy`
    pub fn new(inner: W, strategy: WriteStrategy) -> Self {
        Self::from_xml_writer(Writer::new(inner), strategy)
    }

    /// Wrap an existing XML writer, e.g. one positioned inside `<sheetData>`
    pub fn from_xml_writer(writer: Writer<W>, strategy: WriteStrategy) -> Self {
        log::debug!("using {:?} cell write strategy", strategy);
        match strategy {
            WriteStrategy::Incremental => {
                SheetWriter::Incremental(IncrementalCellWriter::from_xml_writer(writer))
            }
            WriteStrategy::Subtree => {
                SheetWriter::Subtree(SubtreeCellWriter::from_xml_writer(writer))
            }
        }
    }

    pub fn strategy(&self) -> WriteStrategy {
        match self {
            SheetWriter::Incremental(_) => WriteStrategy::Incremental,
            SheetWriter::Subtree(_) => WriteStrategy::Subtree,
        }
    }

    /// The underlying XML writer, for surrounding markup
    pub fn xml_writer(&mut self) -> &mut Writer<W> {
        match self {
            SheetWriter::Incremental(w) => w.xml_writer(),
            SheetWriter::Subtree(w) => w.xml_writer(),
        }
    }

    /// Consume the writer and return the sink
    pub fn into_inner(self) -> W {
        match self {
            SheetWriter::Incremental(w) => w.into_inner(),
            SheetWriter::Subtree(w) => w.into_inner(),
        }
    }
}

impl<W: Write> CellWriter for SheetWriter<W> {
    fn write_cell(
        &mut self,
        cell: &Cell,
        worksheet: &mut WorksheetContext,
        settings: &WorkbookSettings,
        styled: bool,
    ) -> XlsxResult<()> {
        match self {
            SheetWriter::Incremental(w) => w.write_cell(cell, worksheet, settings, styled),
            SheetWriter::Subtree(w) => w.write_cell(cell, worksheet, settings, styled),
        }
    }
}

/// The single child structure of a `<c>` element
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CellContent {
    /// No children
    Empty,
    /// `<f>` with optional shared/array attributes
    Formula {
        attributes: FormulaXmlAttributes,
        body: String,
    },
    /// `<is><t>..</t></is>`
    InlineString { text: String, preserve_space: bool },
    /// `<v>..</v>`
    Value(String),
}

impl CellContent {
    /// Choose the child structure for a resolved cell value
    pub(crate) fn classify(
        cell: &Cell,
        value: &CellValue,
        worksheet: &WorksheetContext,
    ) -> XlsxResult<Self> {
        if value.is_blank() {
            return Ok(CellContent::Empty);
        }

        match cell.data_type() {
            DataType::Formula => {
                let source = value.as_text().ok_or_else(|| {
                    XlsxError::Conversion(format!(
                        "formula cell {} holds {} instead of formula text",
                        cell.coordinate(),
                        value.type_name()
                    ))
                })?;
                Ok(CellContent::Formula {
                    attributes: formula::lookup(worksheet, cell.coordinate()),
                    body: formula::formula_body(source).to_string(),
                })
            }
            DataType::String => {
                let text = codec::safe_stringify(value)?;
                let preserve_space = needs_space_preserve(&text);
                Ok(CellContent::InlineString {
                    text,
                    preserve_space,
                })
            }
            _ => Ok(CellContent::Value(codec::safe_stringify(value)?)),
        }
    }
}

/// Attributes and child structure of `cell`, ready to write
///
/// The hyperlink is recorded only after every fallible step has passed.
pub(crate) fn prepare(
    cell: &Cell,
    worksheet: &mut WorksheetContext,
    settings: &WorkbookSettings,
    styled: bool,
) -> XlsxResult<(CellAttributes, CellContent)> {
    let (value, attrs) = attributes::resolve_value(cell, settings, styled)?;
    let content = CellContent::classify(cell, &value, worksheet)?;
    attributes::record_hyperlink(cell, worksheet);
    Ok((attrs, content))
}

/// Leading or trailing whitespace would be dropped by readers without `xml:space`
pub(crate) fn needs_space_preserve(text: &str) -> bool {
    text != text.trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetxml_core::FormulaAttributes;

    fn classify(cell: &Cell) -> CellContent {
        CellContent::classify(cell, cell.value(), &WorksheetContext::new()).unwrap()
    }

    #[test]
    fn test_blank_values_are_empty_for_every_type() {
        for data_type in [
            DataType::Number,
            DataType::Boolean,
            DataType::String,
            DataType::Formula,
            DataType::Date,
            DataType::Error,
            DataType::Empty,
        ] {
            let null = Cell::new("A1", CellValue::Null).with_type(data_type);
            let empty = Cell::new("A1", "").with_type(data_type);
            assert_eq!(classify(&null), CellContent::Empty);
            assert_eq!(classify(&empty), CellContent::Empty);
        }
    }

    #[test]
    fn test_formula_content() {
        let mut ws = WorksheetContext::new();
        ws.set_formula_attributes("A3", FormulaAttributes::shared(1))
            .unwrap();
        let cell = Cell::new("A3", "=A1+A2");
        let content = CellContent::classify(&cell, cell.value(), &ws).unwrap();
        assert_eq!(
            content,
            CellContent::Formula {
                attributes: vec![("t", "shared".to_string()), ("si", "1".to_string())],
                body: "A1+A2".to_string(),
            }
        );
    }

    #[test]
    fn test_formula_requires_text() {
        let cell = Cell::new("A1", 3).with_type(DataType::Formula);
        let err = CellContent::classify(&cell, cell.value(), &WorksheetContext::new());
        assert!(matches!(err, Err(XlsxError::Conversion(_))));
    }

    #[test]
    fn test_string_whitespace() {
        assert_eq!(
            classify(&Cell::new("A1", "  hi  ")),
            CellContent::InlineString {
                text: "  hi  ".to_string(),
                preserve_space: true
            }
        );
        assert_eq!(
            classify(&Cell::new("A1", "hi")),
            CellContent::InlineString {
                text: "hi".to_string(),
                preserve_space: false
            }
        );
        assert!(needs_space_preserve("line\n"));
        assert!(needs_space_preserve("\tx"));
        assert!(!needs_space_preserve("a b"));
    }

    #[test]
    fn test_value_content() {
        assert_eq!(
            classify(&Cell::new("A1", 42)),
            CellContent::Value("42".to_string())
        );
        assert_eq!(
            classify(&Cell::new("A1", false)),
            CellContent::Value("0".to_string())
        );
        assert_eq!(
            classify(&Cell::new("A1", "#N/A").with_type(DataType::Error)),
            CellContent::Value("#N/A".to_string())
        );
    }

    #[test]
    fn test_options_defaults() {
        let options = WriterOptions::default();
        assert_eq!(options.strategy, WriteStrategy::Incremental);
        assert!(options.styled);

        let options = options
            .with_strategy(WriteStrategy::Subtree)
            .with_styled(false);
        assert_eq!(options.strategy, WriteStrategy::Subtree);
        assert!(!options.styled);
    }

    #[test]
    fn test_sheet_writer_strategy() {
        let writer = SheetWriter::new(Vec::new(), WriteStrategy::Subtree);
        assert_eq!(writer.strategy(), WriteStrategy::Subtree);
        let writer = SheetWriter::new(Vec::new(), WriteStrategy::Incremental);
        assert_eq!(writer.strategy(), WriteStrategy::Incremental);
    }
}
