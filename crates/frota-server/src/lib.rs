//! Frota Web Server
//!
//! Axum-based dashboard for the fleet fuel and maintenance spreadsheets.
//!
//! Serves three HTML pages that render their charts client-side from two JSON
//! endpoints. Every data request re-reads the source workbook on the blocking
//! pool, so the server holds no mutable state.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::{error, info};

use frota_core::Dashboard;

mod handlers;

/// Shared application state
pub struct AppState {
    pub dashboard: Dashboard,
}

/// Create the router with all routes
pub fn create_router(dashboard: Dashboard, static_dir: Option<&str>) -> Router {
    let state = Arc::new(AppState { dashboard });

    // Security headers
    // CSP: scripts and data from the same origin only; inline styles for chart bars
    let csp_value = HeaderValue::from_static(
        "default-src 'self'; script-src 'self'; style-src 'self' 'unsafe-inline'; img-src 'self' data:; connect-src 'self'; frame-ancestors 'none'",
    );

    let mut app = Router::new()
        // Pages
        .route("/", get(handlers::home_page))
        .route("/combustivel", get(handlers::fuel_page))
        .route("/manutencao", get(handlers::maintenance_page))
        .route("/assets/dashboard.js", get(handlers::dashboard_script))
        .route("/assets/dashboard.css", get(handlers::dashboard_style))
        // Data
        .route("/data/combustivel", get(handlers::fuel_data))
        .route("/data/manutencao", get(handlers::maintenance_data))
        // Health
        .route("/health", get(handlers::health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_SECURITY_POLICY,
            csp_value,
        ));

    // Serve static files if directory provided
    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app
}

/// Start the server
pub async fn serve(
    dashboard: Dashboard,
    host: &str,
    port: u16,
    static_dir: Option<&str>,
) -> anyhow::Result<()> {
    let config = dashboard.config();
    info!("Fuel workbook: {}", config.fuel_path().display());
    info!("Maintenance workbook: {}", config.maintenance_path().display());

    let app = create_router(dashboard, static_dir);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let err = err.into();
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            // Return generic message to client
            message: "An internal error occurred".to_string(),
            // Keep full error for logging
            internal: Some(err),
        }
    }
}
