//! Dashboard data handlers
//!
//! Both endpoints run the load → filter → aggregate pipeline on the blocking
//! pool, since reading a workbook is synchronous file I/O.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use tracing::debug;

use crate::{AppError, AppState};
use frota_core::{FuelFilter, FuelSummary, MaintenanceFilter, MaintenanceSummary};

/// GET /data/combustivel - Fuel summary
///
/// Query parameters `mes`, `placa`, `posto`, `combustivel`; "Todos" or an
/// empty value disables a filter.
pub async fn fuel_data(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<FuelFilter>,
) -> Result<Json<FuelSummary>, AppError> {
    debug!(?filter, "Fuel data request");
    let summary =
        tokio::task::spawn_blocking(move || state.dashboard.fuel_summary(&filter)).await??;
    Ok(Json(summary))
}

/// GET /data/manutencao - Maintenance summary
///
/// Query parameters `mes`, `placa`, `oficina`.
pub async fn maintenance_data(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<MaintenanceFilter>,
) -> Result<Json<MaintenanceSummary>, AppError> {
    debug!(?filter, "Maintenance data request");
    let summary =
        tokio::task::spawn_blocking(move || state.dashboard.maintenance_summary(&filter))
            .await??;
    Ok(Json(summary))
}
