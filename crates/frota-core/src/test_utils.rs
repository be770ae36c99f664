//! Test utilities for frota-core
//!
//! Builds real `.xlsx` fixture workbooks laid out like the fleet spreadsheets
//! (a banner row above the header row) inside a temporary directory, so the
//! server and CLI crates can exercise the full read path.

use std::path::Path;

use chrono::{Datelike, NaiveDate};
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook, XlsxError};
use tempfile::TempDir;

use crate::config::DashboardConfig;
use crate::sheet::Cell;

pub const FUEL_FILE: &str = "combustivel.xlsx";
pub const MAINTENANCE_FILE: &str = "manutencao.xlsx";

/// Write a single-sheet workbook: banner in row 0, headers in row 1, data below
pub fn write_workbook(
    path: &Path,
    sheet_name: &str,
    headers: &[&str],
    rows: &[Vec<Cell>],
) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name)?;

    let date_format = Format::new().set_num_format("dd/mm/yyyy");

    sheet.write_string(0, 0, "CONTROLE DA FROTA")?;
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(1, col as u16, *header)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = i as u32 + 2;
        for (col, cell) in row.iter().enumerate() {
            let c = col as u16;
            match cell {
                Cell::Empty | Cell::Error => {}
                Cell::Text(s) => {
                    sheet.write_string(r, c, s)?;
                }
                Cell::Number(n) => {
                    sheet.write_number(r, c, *n)?;
                }
                Cell::Bool(b) => {
                    sheet.write_boolean(r, c, *b)?;
                }
                Cell::DateTime(dt) => {
                    let date = ExcelDateTime::from_ymd(
                        dt.year() as u16,
                        dt.month() as u8,
                        dt.day() as u8,
                    )?;
                    sheet.write_datetime_with_format(r, c, &date, &date_format)?;
                }
            }
        }
    }

    workbook.save(path)
}

/// Date cell as the spreadsheet application would store it
pub fn date_cell(y: i32, m: u32, d: u32) -> Cell {
    let dt = NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("valid fixture date");
    Cell::DateTime(dt)
}

pub const FUEL_HEADERS: &[&str] = &[
    "Data",
    "MÊS",
    "PLACA",
    "POSTOS",
    "COMBUSTÍVEL",
    "Litros",
    "Km Rodados",
    "Custo",
    "",
];

/// Three usable refuellings plus one row with no date
pub fn sample_fuel_rows() -> Vec<Vec<Cell>> {
    let row = |date: Cell, plate: &str, posto: &str, fuel: &str, l: f64, km: f64, cost: f64| {
        vec![
            date,
            Cell::Empty,
            Cell::text(plate),
            Cell::text(posto),
            Cell::text(fuel),
            Cell::Number(l),
            Cell::Number(km),
            Cell::Number(cost),
        ]
    };
    vec![
        row(date_cell(2024, 1, 5), "ABC1D23", "Posto Central", "Diesel", 40.0, 500.0, 100.0),
        row(date_cell(2024, 1, 20), "XYZ9K87", "Posto Sul", "Gasolina", 20.0, 250.0, 50.0),
        row(Cell::text("03/02/2024"), "ABC1D23", "Posto Central", "Diesel", 10.0, 0.0, 80.0),
        row(Cell::Empty, "ABC1D23", "Posto Central", "Diesel", 5.0, 10.0, 999.0),
    ]
}

pub const MAINTENANCE_HEADERS: &[&str] = &["DATA", "MÊS", "PLACAS", "OFICINA", "SERVIÇO", "Custo"];

/// Three usable services plus one row with no cost
pub fn sample_maintenance_rows() -> Vec<Vec<Cell>> {
    let row = |date: Cell, month: Cell, plate: &str, shop: &str, cost: Cell| {
        vec![
            date,
            month,
            Cell::text(plate),
            Cell::text(shop),
            Cell::text("Revisão"),
            cost,
        ]
    };
    vec![
        row(
            date_cell(2024, 1, 10),
            Cell::Empty,
            "ABC1D23",
            "Oficina Central",
            Cell::Number(300.0),
        ),
        row(
            Cell::Empty,
            Cell::text("2024-01"),
            "XYZ9K87",
            "Auto Peças Sul",
            Cell::Number(120.0),
        ),
        row(
            Cell::Empty,
            date_cell(2024, 2, 1),
            "ABC1D23",
            "Auto Peças Sul",
            Cell::Number(200.0),
        ),
        row(
            date_cell(2024, 2, 15),
            Cell::Empty,
            "XYZ9K87",
            "Oficina Central",
            Cell::Empty,
        ),
    ]
}

/// Temporary data directory holding both sample workbooks
pub struct Fixture {
    pub dir: TempDir,
    pub config: DashboardConfig,
}

impl Fixture {
    /// Data directory with both sample workbooks written
    pub fn new() -> Self {
        let fixture = Self::empty();
        write_workbook(
            &fixture.config.fuel_path(),
            "Abastecimentos",
            FUEL_HEADERS,
            &sample_fuel_rows(),
        )
        .expect("write fuel fixture");
        write_workbook(
            &fixture.config.maintenance_path(),
            "Manutenções",
            MAINTENANCE_HEADERS,
            &sample_maintenance_rows(),
        )
        .expect("write maintenance fixture");
        fixture
    }

    /// Data directory with no workbooks in it
    pub fn empty() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let mut config = DashboardConfig::with_files(FUEL_FILE, MAINTENANCE_FILE);
        config.data_dir = dir.path().to_path_buf();
        Self { dir, config }
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
