//! Fuel expense loading and aggregation
//!
//! Expected sheet layout: a banner row, then a header row with (at least)
//! `Data`, `PLACA`, `POSTOS`, `COMBUSTÍVEL`, `Litros`, `Km Rodados`, `Custo`.
//! A `MÊS` column may be present but is recomputed from `Data`.

use tracing::debug;

use crate::aggregate::{group_sum, ratio, unique_sorted, SortOrder};
use crate::coerce::{month_bucket, to_date, to_number, to_text};
use crate::config::SheetSource;
use crate::error::Result;
use crate::models::{FuelRecord, FuelSummary};
use crate::normalize::{Column, ColumnIndex};
use crate::sheet::{read_sheet, RawSheet};
use crate::table::Table;
use crate::value::Value;

/// Source headers renamed to canonical columns
const FUEL_RENAMES: &[(&str, &str)] = &[("COMBUSTIVEL", "Combustivel"), ("MES", "Mes")];

/// Read and clean the fuel workbook
pub fn load_fuel(source: &SheetSource) -> Result<Table<FuelRecord>> {
    let sheet = read_sheet(source)?;
    Ok(parse_fuel_sheet(&sheet))
}

/// Clean an already-read fuel sheet.
///
/// Rows whose date cannot be parsed are dropped; unparseable numbers become
/// missing.
pub fn parse_fuel_sheet(sheet: &RawSheet) -> Table<FuelRecord> {
    let index = ColumnIndex::build(&sheet.headers, FUEL_RENAMES);
    let mut schema = index.schema();
    schema.insert(Column::Mes);

    let text = |row: usize, col: Column| -> Value<String> {
        index
            .get(col)
            .map(|c| to_text(sheet.cell(row, c)))
            .unwrap_or_default()
    };
    let number = |row: usize, col: Column| -> Value<f64> {
        index
            .get(col)
            .map(|c| to_number(sheet.cell(row, c)))
            .unwrap_or_default()
    };

    let mut records = Vec::with_capacity(sheet.row_count());
    for row in 0..sheet.row_count() {
        let date = match index.get(Column::Data).map(|c| to_date(sheet.cell(row, c))) {
            Some(Value::Present(date)) => date,
            _ => continue,
        };

        records.push(FuelRecord {
            date,
            month: month_bucket(date),
            plate: text(row, Column::Placa),
            vendor: text(row, Column::Postos),
            fuel_type: text(row, Column::Combustivel),
            liters: number(row, Column::Litros),
            km: number(row, Column::KmRodados),
            cost: number(row, Column::Custo),
        });
    }

    debug!(
        "Loaded {} fuel records ({} rows without a usable date dropped)",
        records.len(),
        sheet.row_count() - records.len()
    );

    Table::new(schema, records)
}

/// Compute the fuel dashboard payload for an already-filtered table
pub fn summarize(table: &Table<FuelRecord>) -> FuelSummary {
    let custo_total = table.sum(Column::Custo);
    let km_total = table.sum(Column::KmRodados);
    let litros_total = table.sum(Column::Litros);

    FuelSummary {
        km_total,
        litros_total,
        custo_total,
        custo_por_km: ratio(custo_total, km_total),
        km_por_litro: ratio(km_total, litros_total),
        custo_por_litro: ratio(custo_total, litros_total),
        custo_mensal: group_sum(table, Column::Mes, Column::Custo, SortOrder::ByKey),
        km_mensal: group_sum(table, Column::Mes, Column::KmRodados, SortOrder::ByKey),
        litros_mensal: group_sum(table, Column::Mes, Column::Litros, SortOrder::ByKey),
        gasto_por_posto: group_sum(table, Column::Postos, Column::Custo, SortOrder::ByValueDesc),
        gasto_por_combustivel: group_sum(
            table,
            Column::Combustivel,
            Column::Custo,
            SortOrder::ByValueDesc,
        ),
        placas: unique_sorted(table, Column::Placa),
        postos: unique_sorted(table, Column::Postos),
        combustiveis: unique_sorted(table, Column::Combustivel),
        meses: unique_sorted(table, Column::Mes),
    }
}
