//! Cell coercion
//!
//! Every conversion here is total: a cell that cannot be read as the requested
//! type becomes [`Value::Missing`] instead of failing the load.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

use crate::sheet::Cell;
use crate::value::Value;

/// Full-date text formats, tried in order
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",  // 2024-01-15
    "%d/%m/%Y",  // 15/01/2024
    "%m/%d/%Y",  // 01/31/2024 (only reached when day-first fails)
    "%Y/%m/%d",  // 2024/01/15
    "%d-%m-%Y",  // 15-01-2024
    "%d.%m.%Y",  // 15.01.2024
];

/// Date-time text formats, tried in order
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// Largest serial date spreadsheet applications accept (9999-12-31)
const MAX_SERIAL_DATE: f64 = 2_958_465.0;

/// Coerce a cell to a number. Text is trimmed and parsed as a plain decimal.
pub fn to_number(cell: &Cell) -> Value<f64> {
    let number = match cell {
        Cell::Number(n) => Some(*n),
        Cell::Text(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite()).into()
}

/// Coerce a cell to a calendar date
pub fn to_date(cell: &Cell) -> Value<NaiveDate> {
    match cell {
        Cell::DateTime(dt) => Value::Present(dt.date()),
        Cell::Number(n) => from_serial(*n).into(),
        Cell::Text(s) => parse_date(s).into(),
        _ => Value::Missing,
    }
}

/// Coerce a cell to trimmed text
pub fn to_text(cell: &Cell) -> Value<String> {
    match cell {
        Cell::Empty | Cell::Error => Value::Missing,
        other => Value::Present(other.to_text().trim().to_string()),
    }
}

/// Year-month label used as the monthly grouping key
pub fn month_bucket(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Parse a date string in the formats found in the fleet sheets.
///
/// Year-month strings ("2024-01", "01/2024") resolve to the first of the month.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Some(date);
        }
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    parse_year_month(s)
}

fn parse_year_month(s: &str) -> Option<NaiveDate> {
    let (first, second) = s.split_once(['-', '/'])?;
    let (year, month) = if first.len() == 4 {
        (first, second)
    } else if second.len() == 4 {
        (second, first)
    } else {
        return None;
    };
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Convert a spreadsheet serial date (1900 date system) to a date
fn from_serial(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 1.0 || serial > MAX_SERIAL_DATE {
        return None;
    }
    // Day 0 is 1899-12-30 once the phantom 1900-02-29 is accounted for
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    epoch.checked_add_signed(Duration::days(serial.trunc() as i64))
}
