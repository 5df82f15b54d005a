//! `<sheetData>` writer grouping cells into rows

use std::io::Write;

use quick_xml::events::{BytesEnd, BytesStart, Event};
use sheetxml_core::{Cell, CellAddress, WorkbookSettings, WorksheetContext};

use super::{CellWriter, SheetWriter, WriterOptions};
use crate::error::{XlsxError, XlsxResult};

/// Writes a `<sheetData>` block, opening a `<row>` for each new row
///
/// Cells must arrive in row-major order; anything else is rejected with
/// [`XlsxError::OutOfOrder`] before any bytes for it are written.
pub struct SheetDataWriter<W: Write> {
    writer: SheetWriter<W>,
    styled: bool,
    last: Option<CellAddress>,
    started: bool,
}

impl<W: Write> SheetDataWriter<W> {
    pub fn new(inner: W, options: WriterOptions) -> Self {
        Self {
            writer: SheetWriter::new(inner, options.strategy),
            styled: options.styled,
            last: None,
            started: false,
        }
    }

    /// Write one cell, opening the sheet data and row elements as needed
    pub fn write_cell(
        &mut self,
        cell: &Cell,
        worksheet: &mut WorksheetContext,
        settings: &WorkbookSettings,
    ) -> XlsxResult<()> {
        let address = cell.address()?;

        if let Some(previous) = &self.last {
            if (address.row, address.col) <= (previous.row, previous.col) {
                log::warn!(
                    "cell {} arrived after {}; rejecting",
                    cell.coordinate(),
                    previous
                );
                return Err(XlsxError::OutOfOrder {
                    previous: previous.to_string(),
                    current: cell.coordinate().to_string(),
                });
            }
        }

        if !self.started {
            self.writer
                .xml_writer()
                .write_event(Event::Start(BytesStart::new("sheetData")))?;
            self.started = true;
        }

        let new_row = self.last.map_or(true, |previous| previous.row != address.row);
        if new_row {
            if self.last.is_some() {
                self.writer
                    .xml_writer()
                    .write_event(Event::End(BytesEnd::new("row")))?;
            }
            let row_number = address.row_number().to_string();
            let mut start = BytesStart::new("row");
            start.push_attribute(("r", row_number.as_str()));
            self.writer.xml_writer().write_event(Event::Start(start))?;
        }

        // The row is open even if the cell itself fails below.
        self.last = Some(address);
        self.writer
            .write_cell(cell, worksheet, settings, self.styled)
    }

    /// Write every cell from `cells`, stopping at the first error
    pub fn write_cells<'a, I>(
        &mut self,
        cells: I,
        worksheet: &mut WorksheetContext,
        settings: &WorkbookSettings,
    ) -> XlsxResult<usize>
    where
        I: IntoIterator<Item = &'a Cell>,
    {
        let mut count = 0;
        for cell in cells {
            self.write_cell(cell, worksheet, settings)?;
            count += 1;
        }
        log::debug!("wrote {} cells", count);
        Ok(count)
    }

    /// Close any open elements and return the sink
    ///
    /// A writer that never received a cell produces `<sheetData/>`.
    pub fn finish(mut self) -> XlsxResult<W> {
        let xml = self.writer.xml_writer();
        if self.started {
            xml.write_event(Event::End(BytesEnd::new("row")))?;
            xml.write_event(Event::End(BytesEnd::new("sheetData")))?;
        } else {
            xml.write_event(Event::Empty(BytesStart::new("sheetData")))?;
        }
        Ok(self.writer.into_inner())
    }
}
