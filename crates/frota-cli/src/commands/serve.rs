//! Server command implementation

use std::path::Path;

use anyhow::{Context, Result};
use frota_core::Dashboard;

pub async fn cmd_serve(
    dashboard: Dashboard,
    host: &str,
    port: u16,
    static_dir: Option<&Path>,
) -> Result<()> {
    println!("🚀 Starting Frota dashboard...");
    println!("   Fuel: {}", dashboard.config().fuel_path().display());
    println!(
        "   Maintenance: {}",
        dashboard.config().maintenance_path().display()
    );
    println!("   Listening: http://{}:{}", host, port);
    if let Some(dir) = static_dir {
        println!("   Static files: {}", dir.display());
    }
    println!();

    let static_dir = static_dir.map(|p| p.to_string_lossy().into_owned());
    frota_server::serve(dashboard, host, port, static_dir.as_deref())
        .await
        .context("Server error")
}
