//! Spreadsheet reading
//!
//! Wraps calamine so the rest of the crate works with an owned, reader-independent
//! [`Cell`] type. Source workbooks carry a decorative banner above the real
//! header, so the header row index is configurable.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};
use chrono::NaiveDateTime;
use tracing::debug;

use crate::config::SheetSource;
use crate::error::{Error, Result};

/// A single spreadsheet cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
    Error,
}

static EMPTY: Cell = Cell::Empty;

impl Cell {
    pub fn text(s: &str) -> Self {
        Cell::Text(s.to_string())
    }

    /// Render the cell as text. Empty and error cells render as "".
    pub fn to_text(&self) -> String {
        match self {
            Cell::Empty | Cell::Error => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => n.to_string(),
            Cell::Bool(b) => b.to_string(),
            Cell::DateTime(dt) => dt.to_string(),
        }
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => Cell::Empty,
            Data::String(s) => Cell::Text(s.clone()),
            Data::Float(f) => Cell::Number(*f),
            Data::Int(i) => Cell::Number(*i as f64),
            Data::Bool(b) => Cell::Bool(*b),
            Data::DateTime(dt) => dt
                .as_datetime()
                .map(Cell::DateTime)
                .unwrap_or_else(|| Cell::Number(dt.as_f64())),
            Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
            Data::Error(_) => Cell::Error,
        }
    }
}

/// Header row plus data rows of one worksheet
#[derive(Debug, Clone, Default)]
pub struct RawSheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl RawSheet {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { headers, rows }
    }

    /// Cell at (row, column); short rows read as empty.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Read the configured worksheet from disk
pub fn read_sheet(source: &SheetSource) -> Result<RawSheet> {
    let path = source.path.as_path();
    ensure_readable(path)?;

    let mut workbook = open_workbook_auto(path)?;
    let range = match source.sheet.as_deref() {
        Some(name) => workbook
            .worksheet_range(name)
            .map_err(|_| Error::SheetNotFound(format!("{} in {}", name, path.display())))?,
        None => workbook
            .worksheet_range_at(0)
            .ok_or_else(|| Error::SheetNotFound(format!("first sheet of {}", path.display())))??,
    };

    let sheet = split_range(&range, source.header_row);
    debug!(
        "Read {} rows x {} columns from {}",
        sheet.rows.len(),
        sheet.headers.len(),
        path.display()
    );
    Ok(sheet)
}

fn ensure_readable(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("spreadsheet not found: {}", path.display()),
        )));
    }
    Ok(())
}

/// Split a worksheet range into header and data rows.
///
/// calamine ranges begin at the first used cell, so rows and columns are
/// re-anchored to absolute sheet positions before the header row is located.
fn split_range(range: &Range<Data>, header_row: usize) -> RawSheet {
    let Some((start_row, start_col)) = range.start() else {
        return RawSheet::default();
    };
    let (start_row, start_col) = (start_row as usize, start_col as usize);
    let pad = |cells: &[Data]| -> Vec<Cell> {
        std::iter::repeat(Cell::Empty)
            .take(start_col)
            .chain(cells.iter().map(Cell::from))
            .collect()
    };

    let mut headers = Vec::new();
    let mut rows = Vec::new();
    for (offset, cells) in range.rows().enumerate() {
        let absolute = start_row + offset;
        if absolute < header_row {
            continue;
        }
        if absolute == header_row {
            headers = pad(cells).iter().map(Cell::to_text).collect();
        } else {
            rows.push(pad(cells));
        }
    }

    RawSheet { headers, rows }
}
