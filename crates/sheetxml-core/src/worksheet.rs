//! Worksheet-level state consulted and updated while writing cells

use ahash::AHashMap;

use crate::cell::CellAddress;
use crate::error::{Error, Result};
use crate::formula::FormulaAttributes;
use crate::hyperlink::Hyperlink;

/// Per-worksheet context for one serialization pass
///
/// Holds the shared/array formula table keyed by coordinate and the hyperlink
/// collection that cell serialization appends to. Owned by the caller and
/// passed to the writer by reference; each worksheet has its own.
#[derive(Debug, Clone, Default)]
pub struct WorksheetContext {
    formula_attributes: AHashMap<String, FormulaAttributes>,
    hyperlinks: Vec<Hyperlink>,
}

impl WorksheetContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Register formula metadata for the cell at `coordinate`
    ///
    /// Fails if the coordinate is not a valid address, or if the formula has
    /// a range that does not contain the cell.
    pub fn set_formula_attributes<S: Into<String>>(
        &mut self,
        coordinate: S,
        attributes: FormulaAttributes,
    ) -> Result<()> {
        let coordinate = coordinate.into();
        let addr = CellAddress::parse(&coordinate)?;
        if let Some(range) = &attributes.range {
            if !range.contains(&addr) {
                return Err(Error::InvalidRange(format!(
                    "{} does not contain its formula cell {}",
                    range, coordinate
                )));
            }
        }
        self.formula_attributes.insert(coordinate, attributes);
        Ok(())
    }

    /// Formula metadata registered for `coordinate`, if any
    pub fn formula_attributes(&self, coordinate: &str) -> Option<&FormulaAttributes> {
        self.formula_attributes.get(coordinate)
    }

    /// Append a hyperlink to the collection
    pub fn push_hyperlink(&mut self, hyperlink: Hyperlink) {
        self.hyperlinks.push(hyperlink);
    }

    /// Hyperlinks collected so far, in cell write order
    pub fn hyperlinks(&self) -> &[Hyperlink] {
        &self.hyperlinks
    }

    /// Drain the collected hyperlinks
    pub fn take_hyperlinks(&mut self) -> Vec<Hyperlink> {
        std::mem::take(&mut self.hyperlinks)
    }
}
