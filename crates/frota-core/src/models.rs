//! Data models for Frota

use chrono::NaiveDate;
use serde::Serialize;

use crate::aggregate::Breakdown;
use crate::normalize::Column;
use crate::table::Record;
use crate::value::Value;

// ========== Records ==========

/// One refuelling entry from the fuel workbook
#[derive(Debug, Clone, PartialEq)]
pub struct FuelRecord {
    pub date: NaiveDate,
    /// Derived "YYYY-MM" bucket of `date`
    pub month: String,
    pub plate: Value<String>,
    /// Fuel station (POSTOS)
    pub vendor: Value<String>,
    pub fuel_type: Value<String>,
    pub liters: Value<f64>,
    pub km: Value<f64>,
    pub cost: Value<f64>,
}

impl Record for FuelRecord {
    fn text(&self, column: Column) -> Value<&str> {
        match column {
            Column::Mes => Value::Present(self.month.as_str()),
            Column::Placa => self.plate.as_deref(),
            Column::Postos => self.vendor.as_deref(),
            Column::Combustivel => self.fuel_type.as_deref(),
            _ => Value::Missing,
        }
    }

    fn number(&self, column: Column) -> Value<f64> {
        match column {
            Column::KmRodados => self.km,
            Column::Litros => self.liters,
            Column::Custo => self.cost,
            _ => Value::Missing,
        }
    }
}

/// One service entry from the maintenance workbook
#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceRecord {
    /// Resolved from DATA, falling back to MES
    pub date: NaiveDate,
    pub month: String,
    pub plate: Value<String>,
    pub workshop: Value<String>,
    pub cost: f64,
}

impl Record for MaintenanceRecord {
    fn text(&self, column: Column) -> Value<&str> {
        match column {
            Column::Mes => Value::Present(self.month.as_str()),
            Column::Placa => self.plate.as_deref(),
            Column::Oficina => self.workshop.as_deref(),
            _ => Value::Missing,
        }
    }

    fn number(&self, column: Column) -> Value<f64> {
        match column {
            Column::Custo => Value::Present(self.cost),
            _ => Value::Missing,
        }
    }
}

// ========== Summaries ==========

/// Fuel dashboard payload
#[derive(Debug, Clone, Serialize)]
pub struct FuelSummary {
    pub km_total: f64,
    pub litros_total: f64,
    pub custo_total: f64,
    pub custo_por_km: f64,
    pub km_por_litro: f64,
    pub custo_por_litro: f64,
    pub custo_mensal: Breakdown,
    pub km_mensal: Breakdown,
    pub litros_mensal: Breakdown,
    pub gasto_por_posto: Breakdown,
    pub gasto_por_combustivel: Breakdown,
    pub placas: Vec<String>,
    pub postos: Vec<String>,
    pub combustiveis: Vec<String>,
    pub meses: Vec<String>,
}

/// Maintenance dashboard payload
#[derive(Debug, Clone, Serialize)]
pub struct MaintenanceSummary {
    pub custo_total: f64,
    pub total_servicos: usize,
    pub media_servico: f64,
    pub custo_mensal: Breakdown,
    pub gasto_por_placa: Breakdown,
    pub gasto_por_oficina: Breakdown,
    pub placas: Vec<String>,
    pub oficinas: Vec<String>,
    pub meses: Vec<String>,
}
