//! Dashboard pages
//!
//! Pages are static HTML compiled into the binary; their script fetches the
//! `/data/*` endpoints and draws the charts in the browser.

use axum::{http::header, response::Html, response::IntoResponse};

const HOME_PAGE: &str = include_str!("../../templates/home.html");
const FUEL_PAGE: &str = include_str!("../../templates/combustivel.html");
const MAINTENANCE_PAGE: &str = include_str!("../../templates/manutencao.html");
const DASHBOARD_SCRIPT: &str = include_str!("../../templates/dashboard.js");
const DASHBOARD_STYLE: &str = include_str!("../../templates/dashboard.css");

/// GET / - Landing page linking both dashboards
pub async fn home_page() -> Html<&'static str> {
    Html(HOME_PAGE)
}

/// GET /combustivel - Fuel dashboard
pub async fn fuel_page() -> Html<&'static str> {
    Html(FUEL_PAGE)
}

/// GET /manutencao - Maintenance dashboard
pub async fn maintenance_page() -> Html<&'static str> {
    Html(MAINTENANCE_PAGE)
}

pub async fn dashboard_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        DASHBOARD_SCRIPT,
    )
}

pub async fn dashboard_style() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], DASHBOARD_STYLE)
}
