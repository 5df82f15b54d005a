//! Cell value types

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};

use super::DataType;

/// The raw value held by a cell
///
/// The variant does not have to agree with the cell's declared [`DataType`];
/// the declared type decides how the value is serialized.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// No value
    Null,

    /// Boolean value (TRUE/FALSE)
    Boolean(bool),

    /// Floating point number
    Number(f64),

    /// Integer, kept apart from [`CellValue::Number`] so it serializes without rounding
    Integer(i64),

    /// Text, also used for formula source such as `=SUM(A1:A2)`
    Text(SharedString),

    /// Error value (#VALUE!, #REF!, etc.)
    Error(CellError),

    /// Calendar date
    Date(NaiveDate),

    /// Date and time without timezone
    DateTime(NaiveDateTime),

    /// Time of day without timezone
    Time(NaiveTime),

    /// Elapsed time
    Duration(Duration),

    /// Date and time carrying a UTC offset. Cannot be written to a date cell.
    ZonedDateTime(DateTime<FixedOffset>),

    /// Time of day carrying a UTC offset. Cannot be written to a date cell.
    ZonedTime(NaiveTime, FixedOffset),
}

impl CellValue {
    /// Create a new text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        CellValue::Text(SharedString::new(s.into()))
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Null or empty text. Blank cells are written without children.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Check if the value carries timezone information
    pub fn has_timezone(&self) -> bool {
        matches!(self, CellValue::ZonedDateTime(_) | CellValue::ZonedTime(..))
    }

    /// Check if the value is an elapsed time rather than a point in time
    pub fn is_duration(&self) -> bool {
        matches!(self, CellValue::Duration(_))
    }

    /// Try to get the value as text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// The data type a cell holding this value would naturally have
    pub fn inferred_type(&self) -> DataType {
        match self {
            CellValue::Null => DataType::Empty,
            CellValue::Text(s) if s.is_empty() => DataType::Empty,
            CellValue::Text(s) if s.len() > 1 && s.as_str().starts_with('=') => DataType::Formula,
            CellValue::Text(_) => DataType::String,
            CellValue::Boolean(_) => DataType::Boolean,
            CellValue::Number(_) | CellValue::Integer(_) => DataType::Number,
            CellValue::Error(_) => DataType::Error,
            CellValue::Date(_)
            | CellValue::DateTime(_)
            | CellValue::Time(_)
            | CellValue::Duration(_)
            | CellValue::ZonedDateTime(_)
            | CellValue::ZonedTime(..) => DataType::Date,
        }
    }

    /// Get the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Null => "null",
            CellValue::Boolean(_) => "boolean",
            CellValue::Number(_) => "number",
            CellValue::Integer(_) => "integer",
            CellValue::Text(_) => "text",
            CellValue::Error(_) => "error",
            CellValue::Date(_) => "date",
            CellValue::DateTime(_) => "datetime",
            CellValue::Time(_) => "time",
            CellValue::Duration(_) => "duration",
            CellValue::ZonedDateTime(_) => "zoned datetime",
            CellValue::ZonedTime(..) => "zoned time",
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Null
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Integer(n as i64)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Integer(n)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::text(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::text(s)
    }
}

impl From<CellError> for CellValue {
    fn from(e: CellError) -> Self {
        CellValue::Error(e)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::Date(d)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(dt: NaiveDateTime) -> Self {
        CellValue::DateTime(dt)
    }
}

impl From<NaiveTime> for CellValue {
    fn from(t: NaiveTime) -> Self {
        CellValue::Time(t)
    }
}

impl From<Duration> for CellValue {
    fn from(d: Duration) -> Self {
        CellValue::Duration(d)
    }
}

impl From<DateTime<FixedOffset>> for CellValue {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        CellValue::ZonedDateTime(dt)
    }
}

impl From<(NaiveTime, FixedOffset)> for CellValue {
    fn from((time, offset): (NaiveTime, FixedOffset)) -> Self {
        CellValue::ZonedTime(time, offset)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(CellValue::Null, Into::into)
    }
}

/// Spreadsheet error literals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellError {
    /// #NULL! - Incorrect range operator
    Null,
    /// #DIV/0! - Division by zero
    Div0,
    /// #VALUE! - Wrong type of argument or operand
    Value,
    /// #REF! - Invalid cell reference
    Ref,
    /// #NAME? - Unrecognized formula name
    Name,
    /// #NUM! - Invalid numeric value
    Num,
    /// #N/A - Value not available
    Na,
    /// #GETTING_DATA - External data is loading
    GettingData,
    /// #SPILL! - Dynamic array cannot spill
    Spill,
    /// #CALC! - Calculation error
    Calc,
}

impl CellError {
    /// Get the literal written into `<v>`
    pub fn as_str(&self) -> &'static str {
        match self {
            CellError::Null => "#NULL!",
            CellError::Div0 => "#DIV/0!",
            CellError::Value => "#VALUE!",
            CellError::Ref => "#REF!",
            CellError::Name => "#NAME?",
            CellError::Num => "#NUM!",
            CellError::Na => "#N/A",
            CellError::GettingData => "#GETTING_DATA",
            CellError::Spill => "#SPILL!",
            CellError::Calc => "#CALC!",
        }
    }

    /// Parse an error literal (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "#NULL!" => Some(CellError::Null),
            "#DIV/0!" => Some(CellError::Div0),
            "#VALUE!" => Some(CellError::Value),
            "#REF!" => Some(CellError::Ref),
            "#NAME?" => Some(CellError::Name),
            "#NUM!" => Some(CellError::Num),
            "#N/A" => Some(CellError::Na),
            "#GETTING_DATA" => Some(CellError::GettingData),
            "#SPILL!" => Some(CellError::Spill),
            "#CALC!" => Some(CellError::Calc),
            _ => None,
        }
    }
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reference-counted string, cheap to clone across cells repeating the same text
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SharedString(Arc<str>);

impl SharedString {
    /// Create a new shared string
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        SharedString(Arc::from(s.as_ref()))
    }

    /// Get the string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the length of the string in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the string is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SharedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl fmt::Display for SharedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SharedString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SharedString {
    fn from(s: &str) -> Self {
        SharedString::new(s)
    }
}

impl From<String> for SharedString {
    fn from(s: String) -> Self {
        SharedString::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_value_conversions() {
        assert_eq!(CellValue::from(42), CellValue::Integer(42));
        assert_eq!(CellValue::from(3.5), CellValue::Number(3.5));
        assert_eq!(CellValue::from(true), CellValue::Boolean(true));
        assert_eq!(CellValue::from(None::<f64>), CellValue::Null);
        assert_eq!(CellValue::from("hello").as_text(), Some("hello"));
    }

    #[test]
    fn test_blank_values() {
        assert!(CellValue::Null.is_blank());
        assert!(CellValue::text("").is_blank());
        assert!(!CellValue::text(" ").is_blank());
        assert!(!CellValue::Integer(0).is_blank());
    }

    #[test]
    fn test_inferred_type() {
        assert_eq!(CellValue::Null.inferred_type(), DataType::Empty);
        assert_eq!(CellValue::from("=A1").inferred_type(), DataType::Formula);
        assert_eq!(CellValue::from("=").inferred_type(), DataType::String);
        assert_eq!(CellValue::from("text").inferred_type(), DataType::String);
        assert_eq!(CellValue::from(1.5).inferred_type(), DataType::Number);
        assert_eq!(CellValue::from(false).inferred_type(), DataType::Boolean);
        assert_eq!(CellValue::from(CellError::Na).inferred_type(), DataType::Error);

        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(CellValue::from(date).inferred_type(), DataType::Date);
        assert_eq!(
            CellValue::from(Duration::hours(3)).inferred_type(),
            DataType::Date
        );
    }

    #[test]
    fn test_timezone_detection() {
        let zoned = DateTime::parse_from_rfc3339("2024-01-01T00:00:00+02:00").unwrap();
        assert!(CellValue::from(zoned).has_timezone());

        let offset = FixedOffset::east_opt(3600).unwrap();
        let zoned_time = CellValue::from((NaiveTime::from_hms_opt(9, 0, 0).unwrap(), offset));
        assert!(zoned_time.has_timezone());
        assert_eq!(zoned_time.inferred_type(), DataType::Date);

        let naive = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert!(!CellValue::from(naive).has_timezone());
    }

    #[test]
    fn test_cell_error_literals() {
        assert_eq!(CellError::Div0.to_string(), "#DIV/0!");
        assert_eq!(CellError::parse("#VALUE!"), Some(CellError::Value));
        assert_eq!(CellError::parse("#n/a"), Some(CellError::Na));
        assert_eq!(CellError::parse("invalid"), None);
    }
}
