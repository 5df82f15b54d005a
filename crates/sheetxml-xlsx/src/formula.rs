//! Formula metadata lookup for `<f>` elements

use sheetxml_core::WorksheetContext;

/// Ordered `(name, value)` attribute pairs for an `<f>` element
pub type FormulaXmlAttributes = Vec<(&'static str, String)>;

/// Attributes for the `<f>` element of the formula cell at `coordinate`
///
/// Returns an empty list for a plain formula, i.e. when the worksheet has no
/// shared or array metadata registered for the cell.
pub fn lookup(worksheet: &WorksheetContext, coordinate: &str) -> FormulaXmlAttributes {
    worksheet
        .formula_attributes(coordinate)
        .map(|attrs| attrs.to_xml_attributes())
        .unwrap_or_default()
}

/// Formula source with its leading `=` removed
///
/// Source without the marker is written as is.
pub fn formula_body(source: &str) -> &str {
    source.strip_prefix('=').unwrap_or(source)
}
