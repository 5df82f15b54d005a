//! Shared and array formula metadata

use crate::cell::CellRange;
use crate::error::Result;

/// How a formula is stored on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormulaKind {
    /// Stored once and referenced by index from the other cells of its range
    Shared,
    /// Array (CSE) formula covering a range
    Array,
}

impl FormulaKind {
    /// Value of the `t` attribute on `<f>`
    pub fn xlsx_type(&self) -> &'static str {
        match self {
            FormulaKind::Shared => "shared",
            FormulaKind::Array => "array",
        }
    }
}

/// Metadata attached to a formula cell's `<f>` element
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormulaAttributes {
    pub kind: FormulaKind,
    /// Range covered by the formula (`ref`); only present on the master cell
    pub range: Option<CellRange>,
    /// Shared formula index (`si`)
    pub shared_index: Option<u32>,
}

impl FormulaAttributes {
    /// Master cell of a shared formula, carrying the formula text and its range
    pub fn shared_master(index: u32, range: &str) -> Result<Self> {
        Ok(Self {
            kind: FormulaKind::Shared,
            range: Some(CellRange::parse(range)?),
            shared_index: Some(index),
        })
    }

    /// Dependent cell of a shared formula, referring to the master by index
    pub fn shared(index: u32) -> Self {
        Self {
            kind: FormulaKind::Shared,
            range: None,
            shared_index: Some(index),
        }
    }

    /// Array formula over `range`
    pub fn array(range: &str) -> Result<Self> {
        Ok(Self {
            kind: FormulaKind::Array,
            range: Some(CellRange::parse(range)?),
            shared_index: None,
        })
    }

    /// Attribute pairs in wire order: `t`, `ref`, `si`
    pub fn to_xml_attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = vec![("t", self.kind.xlsx_type().to_string())];
        if let Some(range) = &self.range {
            attrs.push(("ref", range.to_a1_string()));
        }
        if let Some(si) = self.shared_index {
            attrs.push(("si", si.to_string()));
        }
        attrs
    }
}
