//! Streaming cell writer

use std::io::Write;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use sheetxml_core::{Cell, WorkbookSettings, WorksheetContext};

use super::{CellContent, CellWriter};
use crate::error::XlsxResult;

/// Writes each cell node by node to a forward-only sink
///
/// No element tree is kept; memory use is independent of sheet size.
pub struct IncrementalCellWriter<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> IncrementalCellWriter<W> {
    pub fn new(inner: W) -> Self {
        Self::from_xml_writer(Writer::new(inner))
    }

    pub fn from_xml_writer(writer: Writer<W>) -> Self {
        Self { writer }
    }

    pub fn xml_writer(&mut self) -> &mut Writer<W> {
        &mut self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    /// `<name attrs>text</name>`, or `<name attrs/>` when `text` is empty
    fn write_text_element(
        &mut self,
        name: &str,
        attributes: &[(&str, &str)],
        text: &str,
    ) -> XlsxResult<()> {
        let mut start = BytesStart::new(name);
        for &(key, value) in attributes {
            start.push_attribute((key, value));
        }
        if text.is_empty() {
            self.writer.write_event(Event::Empty(start))?;
        } else {
            self.writer.write_event(Event::Start(start))?;
            self.writer.write_event(Event::Text(BytesText::new(text)))?;
            self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        }
        Ok(())
    }
}

impl<W: Write> CellWriter for IncrementalCellWriter<W> {
    fn write_cell(
        &mut self,
        cell: &Cell,
        worksheet: &mut WorksheetContext,
        settings: &WorkbookSettings,
        styled: bool,
    ) -> XlsxResult<()> {
        let (attrs, content) = super::prepare(cell, worksheet, settings, styled)?;

        let start = attrs.to_start();
        if content == CellContent::Empty {
            self.writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        self.writer.write_event(Event::Start(start))?;
        match &content {
            CellContent::Formula { attributes, body } => {
                let pairs: Vec<(&str, &str)> = attributes
                    .iter()
                    .map(|(name, value)| (*name, value.as_str()))
                    .collect();
                self.write_text_element("f", &pairs, body)?;
            }
            CellContent::InlineString {
                text,
                preserve_space,
            } => {
                self.writer
                    .write_event(Event::Start(BytesStart::new("is")))?;
                let space: &[(&str, &str)] = if *preserve_space {
                    &[("xml:space", "preserve")]
                } else {
                    &[]
                };
                self.write_text_element("t", space, text)?;
                self.writer.write_event(Event::End(BytesEnd::new("is")))?;
            }
            CellContent::Value(text) => {
                self.write_text_element("v", &[], text)?;
            }
            CellContent::Empty => {}
        }
        self.writer.write_event(Event::End(BytesEnd::new("c")))?;
        Ok(())
    }
}
