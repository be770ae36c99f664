//! Typed record tables
//!
//! Loaders turn a raw sheet into a [`Table`] of records plus the [`Schema`] of
//! columns the sheet actually provided. Filtering and aggregation work on any
//! record type through the [`Record`] trait.

use crate::filter::RecordFilter;
use crate::normalize::{Column, Schema};
use crate::value::Value;

/// Column access for aggregation and filtering
pub trait Record {
    /// Text field for a column; non-text columns are missing
    fn text(&self, column: Column) -> Value<&str>;

    /// Numeric field for a column; non-numeric columns are missing
    fn number(&self, column: Column) -> Value<f64>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table<R> {
    pub schema: Schema,
    pub records: Vec<R>,
}

impl<R: Record> Table<R> {
    pub fn new(schema: Schema, records: Vec<R>) -> Self {
        Self { schema, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether aggregation may rely on this column
    pub fn has(&self, column: Column) -> bool {
        self.schema.has(column)
    }

    /// Keep only records matching every condition of the filter
    pub fn filter(self, filter: &RecordFilter) -> Self {
        if filter.is_empty() {
            return self;
        }
        let records = self
            .records
            .into_iter()
            .filter(|r| filter.matches(r))
            .collect();
        Self {
            schema: self.schema,
            records,
        }
    }

    /// Sum of a numeric column, skipping missing values
    pub fn sum(&self, column: Column) -> f64 {
        self.records
            .iter()
            .map(|r| r.number(column).or_zero())
            .sum()
    }
}
