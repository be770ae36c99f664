//! Maintenance expense loading and aggregation
//!
//! The maintenance workbook is less regular than the fuel one: the plate column
//! is sometimes `PLACAS`, and many rows only carry the month (`MÊS`) without a
//! full service date.

use chrono::NaiveDate;
use tracing::debug;

use crate::aggregate::{group_sum, ratio, unique_sorted, SortOrder};
use crate::coerce::{month_bucket, to_date, to_number, to_text};
use crate::config::SheetSource;
use crate::error::Result;
use crate::models::{MaintenanceRecord, MaintenanceSummary};
use crate::normalize::{Column, ColumnIndex};
use crate::sheet::{read_sheet, RawSheet};
use crate::table::Table;
use crate::value::Value;

const MAINTENANCE_RENAMES: &[(&str, &str)] =
    &[("PLACAS", "PLACA"), ("MES", "Mes"), ("DATA", "Data")];

/// Read and clean the maintenance workbook
pub fn load_maintenance(source: &SheetSource) -> Result<Table<MaintenanceRecord>> {
    let sheet = read_sheet(source)?;
    Ok(parse_maintenance_sheet(&sheet))
}

/// Clean an already-read maintenance sheet.
///
/// The service date comes from `Data`, falling back to `Mes` parsed as a date.
/// Rows without a resolvable date or without a numeric cost are dropped.
pub fn parse_maintenance_sheet(sheet: &RawSheet) -> Table<MaintenanceRecord> {
    let index = ColumnIndex::build(&sheet.headers, MAINTENANCE_RENAMES);
    let mut schema = index.schema();
    schema.insert(Column::Mes);

    let date_col = index.get(Column::Data);
    let month_col = index.get(Column::Mes);
    let cost_col = index.get(Column::Custo);

    let text = |row: usize, col: Column| -> Value<String> {
        index
            .get(col)
            .map(|c| to_text(sheet.cell(row, c)))
            .unwrap_or_default()
    };
    let date_at = |row: usize, col: Option<usize>| -> Value<NaiveDate> {
        col.map(|c| to_date(sheet.cell(row, c))).unwrap_or_default()
    };

    let mut records = Vec::with_capacity(sheet.row_count());
    for row in 0..sheet.row_count() {
        let date = date_at(row, date_col).or_else(|| date_at(row, month_col));
        let cost = cost_col
            .map(|c| to_number(sheet.cell(row, c)))
            .unwrap_or_default();

        let (Value::Present(date), Value::Present(cost)) = (date, cost) else {
            continue;
        };

        records.push(MaintenanceRecord {
            date,
            month: month_bucket(date),
            plate: text(row, Column::Placa),
            workshop: text(row, Column::Oficina),
            cost,
        });
    }

    debug!(
        "Loaded {} maintenance records ({} rows without month or cost dropped)",
        records.len(),
        sheet.row_count() - records.len()
    );

    Table::new(schema, records)
}

/// Compute the maintenance dashboard payload for an already-filtered table
pub fn summarize(table: &Table<MaintenanceRecord>) -> MaintenanceSummary {
    let custo_total = table.sum(Column::Custo);
    let total_servicos = table.len();

    MaintenanceSummary {
        custo_total,
        total_servicos,
        media_servico: ratio(custo_total, total_servicos as f64),
        custo_mensal: group_sum(table, Column::Mes, Column::Custo, SortOrder::ByKey),
        gasto_por_placa: group_sum(table, Column::Placa, Column::Custo, SortOrder::ByValueDesc),
        gasto_por_oficina: group_sum(
            table,
            Column::Oficina,
            Column::Custo,
            SortOrder::ByValueDesc,
        ),
        placas: unique_sorted(table, Column::Placa),
        oficinas: unique_sorted(table, Column::Oficina),
        meses: unique_sorted(table, Column::Mes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::MaintenanceFilter;
    use crate::sheet::Cell;

    fn headers() -> Vec<String> {
        ["DATA", "MÊS", "PLACAS", "OFICINA", "SERVIÇO", "Custo"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn row(date: Cell, month: Cell, plate: &str, shop: &str, cost: Cell) -> Vec<Cell> {
        vec![
            date,
            month,
            Cell::text(plate),
            Cell::text(shop),
            Cell::text("Troca de óleo"),
            cost,
        ]
    }

    fn sample() -> RawSheet {
        RawSheet::new(
            headers(),
            vec![
                row(
                    Cell::text("2024-01-10"),
                    Cell::Empty,
                    "ABC1D23",
                    "Oficina Central",
                    Cell::Number(300.0),
                ),
                row(
                    Cell::Empty,
                    Cell::text("2024-01"),
                    "XYZ9K87 ",
                    " Auto Peças Sul",
                    Cell::Number(120.0),
                ),
                row(
                    Cell::Empty,
                    Cell::text("02/2024"),
                    "ABC1D23",
                    "Auto Peças Sul",
                    Cell::Number(200.0),
                ),
            ],
        )
    }

    #[test]
    fn test_parse_renames_and_trims() {
        let table = parse_maintenance_sheet(&sample());
        assert_eq!(table.len(), 3);
        assert!(table.has(Column::Placa));
        assert!(table.has(Column::Oficina));

        let second = &table.records[1];
        assert_eq!(second.plate, Value::Present("XYZ9K87".to_string()));
        assert_eq!(second.workshop, Value::Present("Auto Peças Sul".to_string()));
    }

    #[test]
    fn test_parse_month_fallback() {
        let table = parse_maintenance_sheet(&sample());
        assert_eq!(table.records[0].month, "2024-01");
        assert_eq!(
            table.records[1].date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert_eq!(table.records[2].month, "2024-02");
    }

    #[test]
    fn test_parse_prefers_data_over_month() {
        let sheet = RawSheet::new(
            headers(),
            vec![row(
                Cell::text("2024-03-15"),
                Cell::text("2024-01"),
                "ABC1D23",
                "Oficina Central",
                Cell::Number(10.0),
            )],
        );
        let table = parse_maintenance_sheet(&sheet);
        assert_eq!(table.records[0].month, "2024-03");
    }

    #[test]
    fn test_parse_drops_rows_missing_month_or_cost() {
        let mut rows = sample().rows;
        rows.push(row(
            Cell::Empty,
            Cell::Empty,
            "ABC1D23",
            "Oficina Central",
            Cell::Number(99.0),
        ));
        rows.push(row(
            Cell::text("2024-01-11"),
            Cell::Empty,
            "ABC1D23",
            "Oficina Central",
            Cell::text("a combinar"),
        ));
        rows.push(row(
            Cell::text("2024-01-12"),
            Cell::Empty,
            "ABC1D23",
            "Oficina Central",
            Cell::Empty,
        ));

        let table = parse_maintenance_sheet(&RawSheet::new(headers(), rows));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_parse_without_workshop_column() {
        let sheet = RawSheet::new(
            vec!["DATA".to_string(), "PLACA".to_string(), "Custo".to_string()],
            vec![vec![
                Cell::text("2024-01-10"),
                Cell::text("ABC1D23"),
                Cell::Number(50.0),
            ]],
        );
        let summary = summarize(&parse_maintenance_sheet(&sheet));
        assert_eq!(summary.custo_total, 50.0);
        assert!(summary.gasto_por_oficina.is_empty());
        assert!(summary.oficinas.is_empty());
        assert_eq!(summary.gasto_por_placa.keys, vec!["ABC1D23"]);
    }

    #[test]
    fn test_summarize() {
        let summary = summarize(&parse_maintenance_sheet(&sample()));

        assert_eq!(summary.custo_total, 620.0);
        assert_eq!(summary.total_servicos, 3);
        assert_eq!(summary.media_servico, 620.0 / 3.0);
        assert_eq!(summary.custo_mensal.keys, vec!["2024-01", "2024-02"]);
        assert_eq!(summary.custo_mensal.values, vec![420.0, 200.0]);
        assert_eq!(summary.gasto_por_placa.keys, vec!["ABC1D23", "XYZ9K87"]);
        assert_eq!(summary.gasto_por_placa.values, vec![500.0, 120.0]);
        assert_eq!(
            summary.gasto_por_oficina.keys,
            vec!["Auto Peças Sul", "Oficina Central"]
        );
        assert_eq!(summary.gasto_por_oficina.values, vec![320.0, 300.0]);
        assert_eq!(summary.oficinas, vec!["Auto Peças Sul", "Oficina Central"]);
        assert_eq!(summary.meses, vec!["2024-01", "2024-02"]);
    }

    #[test]
    fn test_summarize_filtered_to_nothing() {
        let filter = MaintenanceFilter {
            placa: Some("NAO0E00".into()),
            ..Default::default()
        };
        let table = parse_maintenance_sheet(&sample()).filter(&filter.to_record_filter());
        let summary = summarize(&table);

        assert_eq!(summary.custo_total, 0.0);
        assert_eq!(summary.total_servicos, 0);
        assert_eq!(summary.media_servico, 0.0);
        assert!(summary.custo_mensal.is_empty());
        assert!(summary.gasto_por_placa.is_empty());
        assert!(summary.gasto_por_oficina.is_empty());
        assert!(summary.placas.is_empty());
        assert!(summary.oficinas.is_empty());
        assert!(summary.meses.is_empty());
    }
}
