//! Value conversions for cell content
//!
//! Notes:
//! - Serial dates count days from the date system's day zero, with the time of
//!   day as the fractional part.
//! - The 1900 date system keeps the historical "1900 leap year" bug: serial 60
//!   is the non-existent 1900-02-29, so real dates from 1900-01-01 through
//!   1900-02-28 sit one below their plain day count.
//! - Nothing here escapes XML. The writers hand text to `quick_xml`, which does.

use chrono::{NaiveDate, NaiveTime, Timelike};
use sheetxml_core::{CellValue, DateSystem};

use crate::error::{XlsxError, XlsxResult};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Significant digits kept when writing floats (`%.16g`)
const SIGNIFICANT_DIGITS: usize = 16;

/// Convert a date, date-time, time or duration into a serial day number
///
/// ```
/// use chrono::NaiveDate;
/// use sheetxml_core::{CellValue, DateSystem};
/// use sheetxml_xlsx::codec::to_serial;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert_eq!(to_serial(&CellValue::Date(date), DateSystem::Windows1900).unwrap(), 45292.0);
/// assert_eq!(to_serial(&CellValue::Date(date), DateSystem::Mac1904).unwrap(), 43830.0);
/// ```
pub fn to_serial(value: &CellValue, date_system: DateSystem) -> XlsxResult<f64> {
    match value {
        CellValue::Date(date) => Ok(day_number(*date, date_system) as f64),
        CellValue::DateTime(dt) => {
            Ok(day_number(dt.date(), date_system) as f64 + time_fraction(&dt.time()))
        }
        CellValue::Time(time) => Ok(time_fraction(time)),
        CellValue::Duration(duration) => duration
            .num_microseconds()
            .map(|us| us as f64 / 1_000_000.0 / SECONDS_PER_DAY)
            .ok_or_else(|| {
                XlsxError::conversion(format!("duration {} is too large for a serial", duration))
            }),
        other => Err(XlsxError::conversion(format!(
            "cannot convert {} to a serial date",
            other.type_name()
        ))),
    }
}

/// Render a date, date-time or time as timezone-free ISO 8601 text
///
/// Fractional seconds are written with microsecond precision, and only when
/// non-zero: `2024-01-01T08:30:00`, `2024-01-01T08:30:00.250000`.
pub fn to_iso8601(value: &CellValue) -> XlsxResult<String> {
    match value {
        CellValue::Date(date) => Ok(date.format("%Y-%m-%d").to_string()),
        CellValue::DateTime(dt) => {
            let pattern = if microseconds(&dt.time()) == 0 {
                "%Y-%m-%dT%H:%M:%S"
            } else {
                "%Y-%m-%dT%H:%M:%S%.6f"
            };
            Ok(dt.format(pattern).to_string())
        }
        CellValue::Time(time) => {
            let pattern = if microseconds(time) == 0 {
                "%H:%M:%S"
            } else {
                "%H:%M:%S%.6f"
            };
            Ok(time.format(pattern).to_string())
        }
        other => Err(XlsxError::conversion(format!(
            "cannot render {} as a timezone-free ISO 8601 value",
            other.type_name()
        ))),
    }
}

/// Render a scalar as locale-independent text for a `<v>` element
///
/// Booleans become `1`/`0`, integers are written exactly and floats use 16
/// significant digits. Text passes through unescaped.
pub fn safe_stringify(value: &CellValue) -> XlsxResult<String> {
    match value {
        CellValue::Boolean(b) => Ok(if *b { "1" } else { "0" }.to_string()),
        CellValue::Integer(n) => Ok(n.to_string()),
        CellValue::Number(n) => format_number(*n),
        CellValue::Text(s) => Ok(s.as_str().to_string()),
        CellValue::Error(e) => Ok(e.as_str().to_string()),
        CellValue::Date(_) | CellValue::DateTime(_) | CellValue::Time(_) => to_iso8601(value),
        other => Err(XlsxError::conversion(format!(
            "cannot render {} as cell text",
            other.type_name()
        ))),
    }
}

/// Format a float like C's `%.16g`
pub fn format_number(n: f64) -> XlsxResult<String> {
    if !n.is_finite() {
        return Err(XlsxError::conversion(format!(
            "{} has no spreadsheet representation",
            n
        )));
    }
    if n == 0.0 {
        return Ok(if n.is_sign_negative() { "-0" } else { "0" }.to_string());
    }

    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, n);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => return Ok(scientific),
    };

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        Ok(format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.abs()
        ))
    } else {
        let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
        Ok(trim_fraction(&format!("{:.*}", decimals, n)).to_string())
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Whole days from the date system's day zero, with the 1900 leap-year shift
fn day_number(date: NaiveDate, date_system: DateSystem) -> i64 {
    use chrono::Datelike;

    let mut days = (date.num_days_from_ce() - date_system.epoch_days_from_ce()) as i64;
    if date_system == DateSystem::Windows1900 && days > 0 && days <= 60 {
        days -= 1;
    }
    days
}

fn microseconds(time: &NaiveTime) -> u32 {
    time.nanosecond() / 1_000
}

fn time_fraction(time: &NaiveTime) -> f64 {
    let seconds = time.num_seconds_from_midnight() as f64 + microseconds(time) as f64 / 1_000_000.0;
    seconds / SECONDS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, NaiveDateTime};
    use sheetxml_core::CellError;

    fn date(y: i32, m: u32, d: u32) -> CellValue {
        CellValue::Date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn datetime(s: &str) -> CellValue {
        CellValue::DateTime(NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").unwrap())
    }

    #[test]
    fn test_serial_1900_leap_year_bug() {
        let sys = DateSystem::Windows1900;
        assert_eq!(to_serial(&date(1900, 1, 1), sys).unwrap(), 1.0);
        assert_eq!(to_serial(&date(1900, 2, 28), sys).unwrap(), 59.0);
        assert_eq!(to_serial(&date(1900, 3, 1), sys).unwrap(), 61.0);
        assert_eq!(to_serial(&date(1899, 12, 30), sys).unwrap(), 0.0);
        assert_eq!(to_serial(&date(1899, 12, 29), sys).unwrap(), -1.0);
        assert_eq!(to_serial(&date(1970, 1, 1), sys).unwrap(), 25569.0);
    }

    #[test]
    fn test_serial_1904() {
        let sys = DateSystem::Mac1904;
        assert_eq!(to_serial(&date(1904, 1, 1), sys).unwrap(), 0.0);
        assert_eq!(to_serial(&date(1904, 1, 2), sys).unwrap(), 1.0);
        assert_eq!(to_serial(&date(1970, 1, 1), sys).unwrap(), 24107.0);
    }

    #[test]
    fn test_serial_with_time_of_day() {
        let sys = DateSystem::Windows1900;
        assert_eq!(
            to_serial(&datetime("2024-01-01T12:00:00"), sys).unwrap(),
            45292.5
        );
        assert_eq!(
            to_serial(&datetime("2024-01-01T06:00:00"), sys).unwrap(),
            45292.25
        );

        let noon = CellValue::Time(NaiveTime::from_hms_opt(18, 0, 0).unwrap());
        assert_eq!(to_serial(&noon, sys).unwrap(), 0.75);
    }

    #[test]
    fn test_serial_duration() {
        let sys = DateSystem::Windows1900;
        assert_eq!(
            to_serial(&CellValue::Duration(Duration::hours(36)), sys).unwrap(),
            1.5
        );
        assert_eq!(
            to_serial(&CellValue::Duration(Duration::hours(-6)), sys).unwrap(),
            -0.25
        );
    }

    #[test]
    fn test_serial_rejects_non_dates() {
        let err = to_serial(&CellValue::text("2024-01-01"), DateSystem::Windows1900);
        assert!(matches!(err, Err(XlsxError::Conversion(_))));
        let err = to_serial(&CellValue::Integer(3), DateSystem::Windows1900);
        assert!(matches!(err, Err(XlsxError::Conversion(_))));
    }

    #[test]
    fn test_iso8601() {
        assert_eq!(
            to_iso8601(&datetime("2024-01-01T00:00:00")).unwrap(),
            "2024-01-01T00:00:00"
        );
        assert_eq!(
            to_iso8601(&datetime("2024-01-01T08:30:00.25")).unwrap(),
            "2024-01-01T08:30:00.250000"
        );
        assert_eq!(to_iso8601(&date(987, 6, 5)).unwrap(), "0987-06-05");

        let time = CellValue::Time(NaiveTime::from_hms_opt(9, 5, 7).unwrap());
        assert_eq!(to_iso8601(&time).unwrap(), "09:05:07");
    }

    #[test]
    fn test_iso8601_rejects_zoned_and_durations() {
        let zoned = DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z").unwrap();
        assert!(to_iso8601(&CellValue::ZonedDateTime(zoned)).is_err());
        assert!(to_iso8601(&CellValue::Duration(Duration::minutes(1))).is_err());

        let offset = chrono::FixedOffset::east_opt(3600).unwrap();
        let zoned_time = CellValue::ZonedTime(NaiveTime::from_hms_opt(8, 0, 0).unwrap(), offset);
        assert!(to_iso8601(&zoned_time).is_err());
        assert!(to_serial(&zoned_time, DateSystem::Windows1900).is_err());
        assert!(safe_stringify(&zoned_time).is_err());
    }

    #[test]
    fn test_safe_stringify_scalars() {
        assert_eq!(safe_stringify(&CellValue::Boolean(true)).unwrap(), "1");
        assert_eq!(safe_stringify(&CellValue::Boolean(false)).unwrap(), "0");
        assert_eq!(safe_stringify(&CellValue::Integer(42)).unwrap(), "42");
        assert_eq!(
            safe_stringify(&CellValue::Integer(9_007_199_254_740_993)).unwrap(),
            "9007199254740993"
        );
        assert_eq!(safe_stringify(&CellValue::text("a<b")).unwrap(), "a<b");
        assert_eq!(
            safe_stringify(&CellValue::Error(CellError::Div0)).unwrap(),
            "#DIV/0!"
        );
        assert_eq!(safe_stringify(&date(2024, 2, 29)).unwrap(), "2024-02-29");
    }

    #[test]
    fn test_safe_stringify_rejects() {
        assert!(safe_stringify(&CellValue::Null).is_err());
        assert!(safe_stringify(&CellValue::Duration(Duration::seconds(1))).is_err());
        assert!(safe_stringify(&CellValue::Number(f64::NAN)).is_err());
        assert!(safe_stringify(&CellValue::Number(f64::INFINITY)).is_err());
    }

    #[test]
    fn test_format_number_matches_general_16() {
        let cases = [
            (42.0, "42"),
            (-100.5, "-100.5"),
            (0.1, "0.1"),
            (0.1 + 0.2, "0.3"),
            (3.14159, "3.14159"),
            (1e10, "10000000000"),
            (1e15, "1000000000000000"),
            (1e16, "1e+16"),
            (1e20, "1e+20"),
            (1.5e-5, "1.5e-05"),
            (0.0001, "0.0001"),
            (123456789.123, "123456789.123"),
            (0.0, "0"),
        ];
        for (n, expected) in cases {
            assert_eq!(format_number(n).unwrap(), expected, "formatting {}", n);
        }
    }
}
