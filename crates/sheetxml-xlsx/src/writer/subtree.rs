//! Element-tree cell writer

use std::io::Write;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use sheetxml_core::{Cell, WorkbookSettings, WorksheetContext};

use super::{CellContent, CellWriter};
use crate::error::XlsxResult;

/// An owned XML element with attributes, optional text and children
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlElement {
    pub name: &'static str,
    pub attributes: Vec<(&'static str, String)>,
    pub text: Option<String>,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    pub fn with_attributes(mut self, attributes: Vec<(&'static str, String)>) -> Self {
        self.attributes.extend(attributes);
        self
    }

    /// Set the text content; empty text is treated as none
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.text = if text.is_empty() { None } else { Some(text) };
        self
    }

    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Serialize the element and its descendants
    ///
    /// Elements without text or children use the empty-element form.
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> quick_xml::Result<()> {
        let mut start = BytesStart::new(self.name);
        for (key, value) in &self.attributes {
            start.push_attribute((*key, value.as_str()));
        }

        if self.text.is_none() && self.children.is_empty() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        writer.write_event(Event::Start(start))?;
        if let Some(text) = &self.text {
            writer.write_event(Event::Text(BytesText::new(text)))?;
        }
        for child in &self.children {
            child.write_to(writer)?;
        }
        writer.write_event(Event::End(BytesEnd::new(self.name)))?;
        Ok(())
    }
}

/// Builds each `<c>` element in memory, then writes it in one call
pub struct SubtreeCellWriter<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> SubtreeCellWriter<W> {
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

    /// The complete `<c>` element for `cell`, without writing it
    ///
    /// Like writing, this appends the cell's hyperlink to `worksheet`.
    pub fn build_cell(
        cell: &Cell,
        worksheet: &mut WorksheetContext,
        settings: &WorkbookSettings,
        styled: bool,
    ) -> XlsxResult<XmlElement> {
        let (attrs, content) = super::prepare(cell, worksheet, settings, styled)?;

        let element = XmlElement::new("c").with_attributes(attrs.to_vec());
        let element = match content {
            CellContent::Empty => element,
            CellContent::Formula { attributes, body } => {
                element.with_child(XmlElement::new("f").with_attributes(attributes).with_text(body))
            }
            CellContent::InlineString {
                text,
                preserve_space,
            } => {
                let mut t = XmlElement::new("t");
                if preserve_space {
                    t = t.with_attribute("xml:space", "preserve");
                }
                element.with_child(XmlElement::new("is").with_child(t.with_text(text)))
            }
            CellContent::Value(text) => element.with_child(XmlElement::new("v").with_text(text)),
        };
        Ok(element)
    }
}

impl<W: Write> CellWriter for SubtreeCellWriter<W> {
    fn write_cell(
        &mut self,
        cell: &Cell,
        worksheet: &mut WorksheetContext,
        settings: &WorkbookSettings,
        styled: bool,
    ) -> XlsxResult<()> {
        let element = Self::build_cell(cell, worksheet, settings, styled)?;
        element.write_to(&mut self.writer)?;
        Ok(())
    }
}
