//! Shared command utilities
//!
//! This module contains:
//! - `ConfigOverrides` - Config-related global flags
//! - `resolve_config` - Layer flags and environment over the config file
//! - `open_dashboard` - Build the dashboard service for a command

use std::path::PathBuf;

use anyhow::{Context, Result};
use frota_core::{Dashboard, DashboardConfig};
use tracing::debug;

pub const ENV_CONFIG: &str = "FROTA_CONFIG";
pub const ENV_DATA_DIR: &str = "FROTA_DATA_DIR";
pub const ENV_FUEL_FILE: &str = "FROTA_FUEL_FILE";
pub const ENV_MAINTENANCE_FILE: &str = "FROTA_MAINTENANCE_FILE";

/// Config-related global flags
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub fuel_file: Option<PathBuf>,
    pub maintenance_file: Option<PathBuf>,
}

/// Resolve the dashboard config from the process environment
pub fn resolve_config(overrides: &ConfigOverrides) -> Result<DashboardConfig> {
    resolve_config_with(overrides, |key| std::env::var(key).ok())
}

/// Resolve the dashboard config.
///
/// Precedence, lowest first: embedded defaults, config file (`--config` or
/// FROTA_CONFIG), environment variables, command-line flags.
pub fn resolve_config_with(
    overrides: &ConfigOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> Result<DashboardConfig> {
    let env_path = |key: &str| env(key).filter(|v| !v.is_empty()).map(PathBuf::from);

    let config_path = overrides.config.clone().or_else(|| env_path(ENV_CONFIG));
    if let Some(path) = &config_path {
        debug!("Using config file {}", path.display());
    }

    let mut config = DashboardConfig::load(config_path.as_deref())
        .context("Failed to load dashboard config")?;

    if let Some(dir) = overrides.data_dir.clone().or_else(|| env_path(ENV_DATA_DIR)) {
        config.data_dir = dir;
    }
    if let Some(file) = overrides.fuel_file.clone().or_else(|| env_path(ENV_FUEL_FILE)) {
        config.fuel.file = file;
    }
    if let Some(file) = overrides
        .maintenance_file
        .clone()
        .or_else(|| env_path(ENV_MAINTENANCE_FILE))
    {
        config.maintenance.file = file;
    }

    Ok(config)
}

/// Build the dashboard service from the global flags
pub fn open_dashboard(overrides: &ConfigOverrides) -> Result<Dashboard> {
    Ok(Dashboard::new(resolve_config(overrides)?))
}
