//! The cell handed to the writer

use super::{CellAddress, CellValue, DataType};
use crate::error::{Error, Result};
use crate::hyperlink::Hyperlink;

/// A single cell ready for serialization
///
/// A cell knows its coordinate, declared type, value, style id and optional
/// hyperlink. It holds no reference to a worksheet or workbook.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    coordinate: String,
    data_type: DataType,
    value: CellValue,
    style_id: Option<u32>,
    hyperlink: Option<Hyperlink>,
}

impl Cell {
    /// Create a cell whose data type is inferred from the value
    ///
    /// ```
    /// use sheetxml_core::{Cell, DataType};
    ///
    /// assert_eq!(Cell::new("A1", 42).data_type(), DataType::Number);
    /// assert_eq!(Cell::new("A2", "=A1*2").data_type(), DataType::Formula);
    /// assert_eq!(Cell::new("A3", "").data_type(), DataType::Empty);
    /// ```
    pub fn new<C, V>(coordinate: C, value: V) -> Self
    where
        C: Into<String>,
        V: Into<CellValue>,
    {
        let value = value.into();
        Self {
            coordinate: coordinate.into(),
            data_type: value.inferred_type(),
            value,
            style_id: None,
            hyperlink: None,
        }
    }

    /// Create a cell from 0-based row/column indices
    pub fn at<V: Into<CellValue>>(row: u32, col: u16, value: V) -> Self {
        Self::new(CellAddress::new(row, col).to_a1_string(), value)
    }

    /// Override the declared data type
    pub fn with_type(mut self, data_type: DataType) -> Self {
        self.data_type = data_type;
        self
    }

    /// Attach a style id allocated by the style table
    pub fn with_style(mut self, style_id: u32) -> Self {
        self.style_id = Some(style_id);
        self
    }

    /// Attach a hyperlink. An empty link reference is anchored to this cell.
    pub fn with_hyperlink(mut self, mut hyperlink: Hyperlink) -> Self {
        if hyperlink.reference.is_empty() {
            hyperlink.reference = self.coordinate.clone();
        }
        self.hyperlink = Some(hyperlink);
        self
    }

    /// The A1-style coordinate, e.g. `"B7"`
    pub fn coordinate(&self) -> &str {
        &self.coordinate
    }

    /// The declared data type
    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// The raw value
    pub fn value(&self) -> &CellValue {
        &self.value
    }

    pub fn style_id(&self) -> Option<u32> {
        self.style_id
    }

    pub fn hyperlink(&self) -> Option<&Hyperlink> {
        self.hyperlink.as_ref()
    }

    /// Parse the coordinate into an address
    pub fn address(&self) -> Result<CellAddress> {
        if self.coordinate.is_empty() {
            return Err(Error::InvalidAddress("cell has no coordinate".into()));
        }
        CellAddress::parse(&self.coordinate)
    }
}
