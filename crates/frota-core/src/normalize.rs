//! Column normalization
//!
//! Source spreadsheets are maintained by hand: headers carry accents ("MÊS"),
//! stray whitespace, and nameless filler columns. This module reduces a raw
//! header row to a map of canonical [`Column`]s.

use std::collections::{BTreeSet, HashMap};

use unicode_normalization::UnicodeNormalization;

/// Marker spreadsheet readers give to columns with no header
const PLACEHOLDER_PREFIX: &str = "Unnamed";

/// Canonical columns understood by the loaders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    Data,
    Mes,
    Placa,
    Postos,
    Combustivel,
    KmRodados,
    Litros,
    Custo,
    Oficina,
}

impl Column {
    /// Header text after normalization and renaming
    pub fn label(&self) -> &'static str {
        match self {
            Self::Data => "Data",
            Self::Mes => "Mes",
            Self::Placa => "PLACA",
            Self::Postos => "POSTOS",
            Self::Combustivel => "Combustivel",
            Self::KmRodados => "Km Rodados",
            Self::Litros => "Litros",
            Self::Custo => "Custo",
            Self::Oficina => "OFICINA",
        }
    }

    pub fn all() -> &'static [Column] {
        &[
            Self::Data,
            Self::Mes,
            Self::Placa,
            Self::Postos,
            Self::Combustivel,
            Self::KmRodados,
            Self::Litros,
            Self::Custo,
            Self::Oficina,
        ]
    }
}

/// True for structural filler columns that carry no field name
pub fn is_placeholder(header: &str) -> bool {
    let trimmed = header.trim();
    trimmed.is_empty() || trimmed.starts_with(PLACEHOLDER_PREFIX)
}

/// Strip diacritics and any other non-ASCII characters, then trim
pub fn normalize_header(header: &str) -> String {
    header
        .nfkd()
        .filter(char::is_ascii)
        .collect::<String>()
        .trim()
        .to_string()
}

/// Normalized header name -> source column index
#[derive(Debug, Clone, Default)]
pub struct ColumnIndex {
    by_name: HashMap<String, usize>,
}

impl ColumnIndex {
    /// Normalize a raw header row, applying source-specific renames.
    ///
    /// When two columns end up with the same name the leftmost one wins.
    pub fn build(headers: &[String], renames: &[(&str, &str)]) -> Self {
        let mut by_name = HashMap::new();
        for (idx, raw) in headers.iter().enumerate() {
            if is_placeholder(raw) {
                continue;
            }
            let name = normalize_header(raw);
            let name = renames
                .iter()
                .find(|(from, _)| *from == name)
                .map(|(_, to)| to.to_string())
                .unwrap_or(name);
            by_name.entry(name).or_insert(idx);
        }
        Self { by_name }
    }

    pub fn get(&self, column: Column) -> Option<usize> {
        self.by_name.get(column.label()).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Canonical columns present in this sheet
    pub fn schema(&self) -> Schema {
        Schema::new(
            Column::all()
                .iter()
                .copied()
                .filter(|c| self.get(*c).is_some()),
        )
    }
}

/// Columns available to aggregation
///
/// Derived columns (such as the month bucket) are added by the loaders even
/// when the sheet itself lacks them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    columns: BTreeSet<Column>,
}

impl Schema {
    pub fn new(columns: impl IntoIterator<Item = Column>) -> Self {
        Self {
            columns: columns.into_iter().collect(),
        }
    }

    pub fn has(&self, column: Column) -> bool {
        self.columns.contains(&column)
    }

    pub fn insert(&mut self, column: Column) {
        self.columns.insert(column);
    }

    pub fn columns(&self) -> impl Iterator<Item = Column> + '_ {
        self.columns.iter().copied()
    }
}
