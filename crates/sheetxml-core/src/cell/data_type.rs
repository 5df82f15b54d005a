//! Declared cell data types

use std::fmt;

/// The declared type of a cell
///
/// The declared type, not the value variant, selects the `t` attribute and
/// the child structure of the serialized `<c>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DataType {
    /// Numeric value (`n`)
    Number,
    /// Boolean value (`b`)
    Boolean,
    /// Text, written as an inline string (`s`)
    String,
    /// Formula source (`f`); never written as a `t` attribute
    Formula,
    /// Date, time or duration (`d`)
    Date,
    /// Error literal (`e`)
    Error,
    /// No value
    #[default]
    Empty,
}

impl DataType {
    /// Single-letter type code
    ///
    /// Empty cells share the numeric code.
    pub fn code(&self) -> &'static str {
        match self {
            DataType::Number | DataType::Empty => "n",
            DataType::Boolean => "b",
            DataType::String => "s",
            DataType::Formula => "f",
            DataType::Date => "d",
            DataType::Error => "e",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::Number => "number",
            DataType::Boolean => "boolean",
            DataType::String => "string",
            DataType::Formula => "formula",
            DataType::Date => "date",
            DataType::Error => "error",
            DataType::Empty => "empty",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(DataType::Number.code(), "n");
        assert_eq!(DataType::Empty.code(), "n");
        assert_eq!(DataType::String.code(), "s");
        assert_eq!(DataType::Date.code(), "d");
    }
}
