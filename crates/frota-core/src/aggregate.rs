//! Aggregation primitives shared by the fuel and maintenance summaries

use std::collections::{BTreeMap, BTreeSet};

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::normalize::Column;
use crate::table::{Record, Table};
use crate::value::Value;

/// Ordering of a breakdown's groups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending by group key (chronological for month buckets)
    ByKey,
    /// Descending by summed value, ties by ascending key
    ByValueDesc,
}

/// Per-group sums as two parallel sequences.
///
/// Serializes as an object keyed by the source column labels, e.g.
/// `{"Mes": ["2024-01"], "Custo": [150.0]}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Breakdown {
    pub key_label: &'static str,
    pub value_label: &'static str,
    pub keys: Vec<String>,
    pub values: Vec<f64>,
}

impl Breakdown {
    pub fn empty(key: Column, value: Column) -> Self {
        Self {
            key_label: key.label(),
            value_label: value.label(),
            keys: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// (key, value) pairs in breakdown order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.keys
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

impl Serialize for Breakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(self.key_label, &self.keys)?;
        map.serialize_entry(self.value_label, &self.values)?;
        map.end()
    }
}

/// Sum `value` per distinct `key`.
///
/// Records with a missing key are dropped. Missing values count as zero, so a
/// key whose values are all missing still appears with a sum of 0. A key column
/// the sheet never provided yields an empty breakdown.
pub fn group_sum<R: Record>(
    table: &Table<R>,
    key: Column,
    value: Column,
    order: SortOrder,
) -> Breakdown {
    if !table.has(key) || table.is_empty() {
        return Breakdown::empty(key, value);
    }

    let mut sums: BTreeMap<&str, f64> = BTreeMap::new();
    for record in &table.records {
        if let Value::Present(k) = record.text(key) {
            *sums.entry(k).or_insert(0.0) += record.number(value).or_zero();
        }
    }

    let mut groups: Vec<(&str, f64)> = sums.into_iter().collect();
    if order == SortOrder::ByValueDesc {
        // Stable sort keeps ascending key order among equal sums
        groups.sort_by(|a, b| b.1.total_cmp(&a.1));
    }

    let (keys, values): (Vec<String>, Vec<f64>) = groups
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .unzip();

    Breakdown {
        key_label: key.label(),
        value_label: value.label(),
        keys,
        values,
    }
}

/// Sorted distinct non-missing values of a column, for filter dropdowns
pub fn unique_sorted<R: Record>(table: &Table<R>, column: Column) -> Vec<String> {
    if !table.has(column) {
        return Vec::new();
    }
    table
        .records
        .iter()
        .filter_map(|r| r.text(column).into_option())
        .map(|s| s.trim().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// `numerator / denominator`, defined as 0 when the denominator is 0
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}
