//! Frota Core Library
//!
//! Shared functionality for the Frota fleet cost dashboard:
//! - Spreadsheet reading and header normalization
//! - Typed fuel and maintenance records with explicit missing values
//! - Query filters with the "Todos" sentinel
//! - Grouped sums, ratios and filter option lists
//! - Layered dashboard configuration

pub mod aggregate;
pub mod coerce;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod fuel;
pub mod maintenance;
pub mod models;
pub mod normalize;
pub mod sheet;
pub mod table;
pub mod value;

/// Test utilities for building fixture workbooks
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use aggregate::{Breakdown, SortOrder};
pub use config::{DashboardConfig, SheetSource, SourceConfig};
pub use dashboard::Dashboard;
pub use error::{Error, Result};
pub use filter::{FilterValue, FuelFilter, MaintenanceFilter, RecordFilter, ALL_SENTINEL};
pub use fuel::load_fuel;
pub use maintenance::load_maintenance;
pub use models::{FuelRecord, FuelSummary, MaintenanceRecord, MaintenanceSummary};
pub use normalize::{Column, Schema};
pub use table::{Record, Table};
pub use value::Value;
