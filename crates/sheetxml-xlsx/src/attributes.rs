//! Attribute resolution for `<c>` elements
//!
//! Computes the `r`/`s`/`t` attributes of a cell and the value that ends up
//! on the wire, converting date cells to serial numbers or ISO 8601 text.

use std::borrow::Cow;

use quick_xml::events::BytesStart;
use sheetxml_core::{Cell, CellValue, DataType, WorkbookSettings, WorksheetContext};

use crate::codec;
use crate::error::{XlsxError, XlsxResult};
use crate::writer::CellContent;

/// Type code written for inline strings
pub const INLINE_STRING: &str = "inlineStr";

/// Attributes of a `<c>` element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellAttributes {
    /// Cell coordinate (`r`)
    pub reference: String,
    /// Style id (`s`)
    pub style: Option<String>,
    /// Type code (`t`); absent for formulas
    pub cell_type: Option<&'static str>,
}

impl CellAttributes {
    /// Attribute pairs in wire order: `r`, `s`, `t`
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        std::iter::once(("r", self.reference.as_str()))
            .chain(self.style.as_deref().map(|s| ("s", s)))
            .chain(self.cell_type.map(|t| ("t", t)))
    }

    /// Owned attribute pairs, for building element trees
    pub fn to_vec(&self) -> Vec<(&'static str, String)> {
        self.iter()
            .map(|(name, value)| (name, value.to_string()))
            .collect()
    }

    /// Start tag for the `<c>` element
    pub(crate) fn to_start(&self) -> BytesStart<'static> {
        let mut start = BytesStart::new("c");
        for (name, value) in self.iter() {
            start.push_attribute((name, value));
        }
        start
    }
}

/// Resolve the attributes and wire value of `cell`
///
/// Appends the cell's hyperlink, if any, to `worksheet`. Call once per cell
/// per pass; a second call appends the hyperlink again. The hyperlink is only
/// recorded once every check on the cell has passed, so a failed cell leaves
/// `worksheet` untouched.
///
/// Fails with [`XlsxError::Validation`] for a date cell whose value carries a
/// timezone, and with [`XlsxError::Conversion`] when the value cannot be
/// rendered for the cell's type.
pub fn resolve<'a>(
    cell: &'a Cell,
    worksheet: &mut WorksheetContext,
    settings: &WorkbookSettings,
    styled: bool,
) -> XlsxResult<(Cow<'a, CellValue>, CellAttributes)> {
    let (value, attributes) = resolve_value(cell, settings, styled)?;
    CellContent::classify(cell, &value, worksheet)?;
    record_hyperlink(cell, worksheet);
    Ok((value, attributes))
}

/// Attributes and wire value of `cell`, without touching the worksheet
pub(crate) fn resolve_value<'a>(
    cell: &'a Cell,
    settings: &WorkbookSettings,
    styled: bool,
) -> XlsxResult<(Cow<'a, CellValue>, CellAttributes)> {
    let data_type = cell.data_type();
    log::trace!("resolving {} cell {}", data_type, cell.coordinate());

    let mut attributes = CellAttributes {
        reference: cell.coordinate().to_string(),
        style: if styled {
            cell.style_id().map(|id| id.to_string())
        } else {
            None
        },
        cell_type: match data_type {
            DataType::String => Some(INLINE_STRING),
            DataType::Formula => None,
            other => Some(other.code()),
        },
    };

    let mut value = Cow::Borrowed(cell.value());

    if data_type == DataType::Date && !value.is_blank() {
        if value.has_timezone() {
            log::warn!(
                "rejecting timezone-aware date in cell {}",
                cell.coordinate()
            );
            return Err(XlsxError::Validation(format!(
                "cell {}: dates with timezones are not supported; convert the value to a naive date/time first",
                cell.coordinate()
            )));
        }

        if settings.iso_dates && !value.is_duration() {
            value = Cow::Owned(CellValue::text(codec::to_iso8601(&value)?));
        } else {
            attributes.cell_type = Some(DataType::Number.code());
            value = Cow::Owned(CellValue::Number(codec::to_serial(
                &value,
                settings.date_system,
            )?));
        }
    }

    Ok((value, attributes))
}

pub(crate) fn record_hyperlink(cell: &Cell, worksheet: &mut WorksheetContext) {
    if let Some(hyperlink) = cell.hyperlink() {
        worksheet.push_hyperlink(hyperlink.clone());
    }
}
