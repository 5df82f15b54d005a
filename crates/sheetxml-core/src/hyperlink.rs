//! Cell hyperlinks
//!
//! Hyperlinks are not written inside `<c>`. Serializing a cell that carries
//! one appends a copy to the worksheet's collection, which package assembly
//! later turns into the `<hyperlinks>` block and its relationships.

/// A hyperlink attached to a cell
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hyperlink {
    /// Cell the link is anchored to (`ref`)
    pub reference: String,
    /// External target such as a URL; resolved to a relationship id on write
    pub target: Option<String>,
    /// In-workbook location such as `Sheet2!A1`
    pub location: Option<String>,
    /// Hover text
    pub tooltip: Option<String>,
    /// Display text
    pub display: Option<String>,
    /// Relationship id, assigned during package assembly
    pub id: Option<String>,
}

impl Hyperlink {
    /// Link to an external target
    pub fn external<R: Into<String>, T: Into<String>>(reference: R, target: T) -> Self {
        Self {
            reference: reference.into(),
            target: Some(target.into()),
            ..Self::default()
        }
    }

    /// Link to a location inside the workbook
    pub fn internal<R: Into<String>, L: Into<String>>(reference: R, location: L) -> Self {
        Self {
            reference: reference.into(),
            location: Some(location.into()),
            ..Self::default()
        }
    }

    pub fn with_tooltip<S: Into<String>>(mut self, tooltip: S) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn with_display<S: Into<String>>(mut self, display: S) -> Self {
        self.display = Some(display.into());
        self
    }

    /// Whether the link leaves the workbook
    pub fn is_external(&self) -> bool {
        self.target.is_some()
    }
}
