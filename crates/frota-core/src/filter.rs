//! Equality filters from request parameters
//!
//! Every filterable field accepts either a concrete value or the sentinel
//! [`ALL_SENTINEL`]; the sentinel, an empty string, and an absent parameter all
//! mean "no filter". Supplied filters combine with logical AND.

use serde::Deserialize;

use crate::normalize::Column;
use crate::table::Record;
use crate::value::Value;

/// Filter value meaning "every value"
pub const ALL_SENTINEL: &str = "Todos";

/// A single parsed filter parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Any,
    Eq(String),
}

impl FilterValue {
    pub fn parse(param: Option<&str>) -> Self {
        match param {
            None => Self::Any,
            Some(v) if v.is_empty() || v == ALL_SENTINEL => Self::Any,
            Some(v) => Self::Eq(v.to_string()),
        }
    }
}

/// Conjunction of column equality conditions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    conditions: Vec<(Column, String)>,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a condition; `Any` is a no-op
    pub fn with(mut self, column: Column, value: FilterValue) -> Self {
        if let FilterValue::Eq(v) = value {
            self.conditions.push((column, v));
        }
        self
    }

    /// Add a condition from a raw request parameter
    pub fn with_param(self, column: Column, param: Option<&str>) -> Self {
        self.with(column, FilterValue::parse(param))
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn conditions(&self) -> &[(Column, String)] {
        &self.conditions
    }

    /// A record with a missing field never matches a condition on that field
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        self.conditions
            .iter()
            .all(|(column, expected)| match record.text(*column) {
                Value::Present(actual) => actual == expected.as_str(),
                Value::Missing => false,
            })
    }
}

/// Query parameters accepted by the fuel dashboard
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FuelFilter {
    pub mes: Option<String>,
    pub placa: Option<String>,
    pub posto: Option<String>,
    pub combustivel: Option<String>,
}

impl FuelFilter {
    pub fn to_record_filter(&self) -> RecordFilter {
        RecordFilter::new()
            .with_param(Column::Mes, self.mes.as_deref())
            .with_param(Column::Placa, self.placa.as_deref())
            .with_param(Column::Postos, self.posto.as_deref())
            .with_param(Column::Combustivel, self.combustivel.as_deref())
    }
}

/// Query parameters accepted by the maintenance dashboard
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MaintenanceFilter {
    pub mes: Option<String>,
    pub placa: Option<String>,
    pub oficina: Option<String>,
}

impl MaintenanceFilter {
    pub fn to_record_filter(&self) -> RecordFilter {
        RecordFilter::new()
            .with_param(Column::Mes, self.mes.as_deref())
            .with_param(Column::Placa, self.placa.as_deref())
            .with_param(Column::Oficina, self.oficina.as_deref())
    }
}
