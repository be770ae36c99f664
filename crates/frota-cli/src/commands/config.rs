//! Config command implementation

use anyhow::{Context, Result};
use frota_core::config::default_config_path;
use frota_core::DashboardConfig;

pub fn cmd_config(config: &DashboardConfig) -> Result<()> {
    println!("⚙️  Frota configuration");
    if let Some(path) = default_config_path() {
        let state = if path.exists() { "found" } else { "not present" };
        println!("   User config: {} ({})", path.display(), state);
    }
    println!("   ─────────────────────────────────────────────");

    for (label, path) in [
        ("Fuel", config.fuel_path()),
        ("Maintenance", config.maintenance_path()),
    ] {
        let marker = if path.is_file() { "✅" } else { "❌" };
        println!("   {} {:12} {}", marker, label, path.display());
    }

    println!();
    let rendered = toml::to_string_pretty(config).context("Failed to render config")?;
    for line in rendered.lines() {
        println!("   {}", line);
    }

    Ok(())
}
