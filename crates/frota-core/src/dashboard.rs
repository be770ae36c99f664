//! Load → filter → aggregate pipeline used by the server and the CLI

use tracing::debug;

use crate::config::DashboardConfig;
use crate::error::Result;
use crate::filter::{FuelFilter, MaintenanceFilter};
use crate::fuel::{self, load_fuel};
use crate::maintenance::{self, load_maintenance};
use crate::models::{FuelSummary, MaintenanceSummary};

/// Dashboard service
///
/// Stateless apart from its configuration: every call re-reads the source
/// workbook, so edits to the spreadsheets show up on the next request.
#[derive(Debug, Clone)]
pub struct Dashboard {
    config: DashboardConfig,
}

impl Dashboard {
    pub fn new(config: DashboardConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Fuel dashboard payload for the given filters
    pub fn fuel_summary(&self, filter: &FuelFilter) -> Result<FuelSummary> {
        let source = self.config.fuel_source();
        let record_filter = filter.to_record_filter();
        debug!(
            "Fuel summary from {} ({} active filters)",
            source.path.display(),
            record_filter.conditions().len()
        );

        let table = load_fuel(&source)?.filter(&record_filter);
        Ok(fuel::summarize(&table))
    }

    /// Maintenance dashboard payload for the given filters
    pub fn maintenance_summary(&self, filter: &MaintenanceFilter) -> Result<MaintenanceSummary> {
        let source = self.config.maintenance_source();
        let record_filter = filter.to_record_filter();
        debug!(
            "Maintenance summary from {} ({} active filters)",
            source.path.display(),
            record_filter.conditions().len()
        );

        let table = load_maintenance(&source)?.filter(&record_filter);
        Ok(maintenance::summarize(&table))
    }
}
