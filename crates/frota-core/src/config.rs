//! Dashboard configuration
//!
//! Locates the two source workbooks. Config is loaded with a two-layer resolution:
//! 1. Override file (explicit path, else ~/.config/frota/dashboard.toml)
//! 2. Embedded defaults (compiled into binary)
//!
//! Callers may then override individual paths (CLI flags, env vars) before
//! handing the config to [`crate::Dashboard`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/dashboard.toml");

/// Where and how to read one source sheet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceConfig {
    /// Workbook file, relative to the data directory unless absolute
    pub file: PathBuf,
    /// Worksheet name (first sheet when unset)
    pub sheet: Option<String>,
    /// Zero-based row holding the column headers
    pub header_row: usize,
}

impl SourceConfig {
    fn with_file(file: &str) -> Self {
        Self {
            file: PathBuf::from(file),
            sheet: None,
            header_row: 1,
        }
    }
}

/// Fully resolved sheet location handed to the reader
#[derive(Debug, Clone, PartialEq)]
pub struct SheetSource {
    pub path: PathBuf,
    pub sheet: Option<String>,
    pub header_row: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardConfig {
    pub data_dir: PathBuf,
    pub fuel: SourceConfig,
    pub maintenance: SourceConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            fuel: SourceConfig::with_file("combustivel.xlsx"),
            maintenance: SourceConfig::with_file("manutencao.xlsx"),
        }
    }
}

impl DashboardConfig {
    /// Load configuration (override first, then embedded default)
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let content = match override_path {
            Some(path) => fs::read_to_string(path).map_err(|e| {
                Error::Config(format!("Failed to read {}: {}", path.display(), e))
            })?,
            None => match default_config_path().filter(|p| p.exists()) {
                Some(path) => fs::read_to_string(&path).map_err(|e| {
                    Error::Config(format!("Failed to read {}: {}", path.display(), e))
                })?,
                None => DEFAULT_CONFIG.to_string(),
            },
        };

        parse_config(&content)
    }

    /// Config pointing at two explicit workbook paths (first sheet, one banner row)
    pub fn with_files(fuel: impl Into<PathBuf>, maintenance: impl Into<PathBuf>) -> Self {
        let mut config = Self::default();
        config.fuel.file = fuel.into();
        config.maintenance.file = maintenance.into();
        config
    }

    pub fn fuel_path(&self) -> PathBuf {
        self.data_dir.join(&self.fuel.file)
    }

    pub fn maintenance_path(&self) -> PathBuf {
        self.data_dir.join(&self.maintenance.file)
    }

    pub fn fuel_source(&self) -> SheetSource {
        SheetSource {
            path: self.fuel_path(),
            sheet: self.fuel.sheet.clone(),
            header_row: self.fuel.header_row,
        }
    }

    pub fn maintenance_source(&self) -> SheetSource {
        SheetSource {
            path: self.maintenance_path(),
            sheet: self.maintenance.sheet.clone(),
            header_row: self.maintenance.header_row,
        }
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("frota").join("dashboard.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    data_dir: Option<PathBuf>,
    fuel: Option<RawSource>,
    maintenance: Option<RawSource>,
}

#[derive(Debug, Deserialize)]
struct RawSource {
    file: Option<PathBuf>,
    sheet: Option<String>,
    header_row: Option<usize>,
}

impl RawSource {
    fn apply(self, target: &mut SourceConfig) {
        if let Some(file) = self.file {
            target.file = file;
        }
        if let Some(sheet) = self.sheet.filter(|s| !s.trim().is_empty()) {
            target.sheet = Some(sheet);
        }
        if let Some(row) = self.header_row {
            target.header_row = row;
        }
    }
}

/// Parse config from TOML content
fn parse_config(content: &str) -> Result<DashboardConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = DashboardConfig::default();

    if let Some(dir) = raw.data_dir {
        config.data_dir = dir;
    }
    if let Some(fuel) = raw.fuel {
        fuel.apply(&mut config.fuel);
    }
    if let Some(maintenance) = raw.maintenance {
        maintenance.apply(&mut config.maintenance);
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_config() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.fuel_path(), PathBuf::from("data/combustivel.xlsx"));
        assert_eq!(config.fuel.header_row, 1);
    }

    #[test]
    fn test_parse_partial_override() {
        let config = parse_config(
            r#"
            data_dir = "/srv/frota"

            [maintenance]
            file = "oficinas.xlsx"
            sheet = "2024"
            header_row = 0
            "#,
        )
        .unwrap();

        assert_eq!(config.fuel_path(), PathBuf::from("/srv/frota/combustivel.xlsx"));
        assert_eq!(
            config.maintenance_path(),
            PathBuf::from("/srv/frota/oficinas.xlsx")
        );
        let source = config.maintenance_source();
        assert_eq!(source.sheet.as_deref(), Some("2024"));
        assert_eq!(source.header_row, 0);
    }

    #[test]
    fn test_absolute_file_ignores_data_dir() {
        let config = DashboardConfig::with_files("/tmp/a.xlsx", "/tmp/b.xlsx");
        assert_eq!(config.fuel_path(), PathBuf::from("/tmp/a.xlsx"));
        assert_eq!(config.maintenance_path(), PathBuf::from("/tmp/b.xlsx"));
    }

    #[test]
    fn test_invalid_toml() {
        let result = parse_config("data_dir = [");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_load_missing_override_is_error() {
        let result = DashboardConfig::load(Some(Path::new("/nonexistent/frota.toml")));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
