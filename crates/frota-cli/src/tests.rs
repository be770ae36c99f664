//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::collections::HashMap;
use std::path::PathBuf;

use clap::Parser;
use frota_core::test_utils::Fixture;
use frota_core::{Dashboard, FuelFilter, MaintenanceFilter};

use crate::cli::{Cli, Commands, ReportKind};
use crate::commands::{self, truncate, ConfigOverrides};

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

fn no_env(_key: &str) -> Option<String> {
    None
}

// ========== Argument Parsing Tests ==========

#[test]
fn test_parse_serve_defaults() {
    let cli = Cli::try_parse_from(["frota", "serve"]).unwrap();
    match cli.command {
        Commands::Serve {
            port,
            host,
            static_dir,
        } => {
            assert_eq!(port, 5000);
            assert_eq!(host, "127.0.0.1");
            assert!(static_dir.is_none());
        }
        _ => panic!("expected serve"),
    }
    assert!(!cli.verbose);
}

#[test]
fn test_parse_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "frota",
        "report",
        "fuel",
        "--mes",
        "2024-01",
        "--data-dir",
        "/srv/frota",
        "--fuel-file",
        "abastecimentos.xlsx",
        "-v",
        "--json",
    ])
    .unwrap();

    assert!(cli.verbose);
    assert_eq!(cli.data_dir, Some(PathBuf::from("/srv/frota")));
    assert_eq!(cli.fuel_file, Some(PathBuf::from("abastecimentos.xlsx")));
    match cli.command {
        Commands::Report {
            kind: ReportKind::Fuel { mes, placa, json, .. },
        } => {
            assert_eq!(mes.as_deref(), Some("2024-01"));
            assert!(placa.is_none());
            assert!(json);
        }
        _ => panic!("expected report fuel"),
    }
}

#[test]
fn test_parse_maintenance_report() {
    let cli = Cli::try_parse_from([
        "frota",
        "report",
        "maintenance",
        "--oficina",
        "Oficina Central",
    ])
    .unwrap();
    match cli.command {
        Commands::Report {
            kind: ReportKind::Maintenance { oficina, json, .. },
        } => {
            assert_eq!(oficina.as_deref(), Some("Oficina Central"));
            assert!(!json);
        }
        _ => panic!("expected report maintenance"),
    }
}

#[test]
fn test_parse_rejects_unknown_report() {
    assert!(Cli::try_parse_from(["frota", "report", "tires"]).is_err());
}

// ========== Config Resolution Tests ==========

#[test]
fn test_resolve_config_env_over_file() {
    let fixture = Fixture::empty();
    let config_path = fixture.dir.path().join("frota.toml");
    std::fs::write(
        &config_path,
        "data_dir = \"/from/file\"\n[fuel]\nfile = \"file-fuel.xlsx\"\n",
    )
    .unwrap();

    let overrides = ConfigOverrides {
        config: Some(config_path),
        ..Default::default()
    };
    let config = commands::resolve_config_with(
        &overrides,
        env_from(&[("FROTA_DATA_DIR", "/from/env")]),
    )
    .unwrap();

    assert_eq!(config.data_dir, PathBuf::from("/from/env"));
    assert_eq!(config.fuel_path(), PathBuf::from("/from/env/file-fuel.xlsx"));
    assert_eq!(
        config.maintenance_path(),
        PathBuf::from("/from/env/manutencao.xlsx")
    );
}

#[test]
fn test_resolve_config_flags_over_env() {
    let overrides = ConfigOverrides {
        data_dir: Some(PathBuf::from("/from/flag")),
        maintenance_file: Some(PathBuf::from("oficinas.xlsx")),
        ..Default::default()
    };
    let config = commands::resolve_config_with(
        &overrides,
        env_from(&[
            ("FROTA_DATA_DIR", "/from/env"),
            ("FROTA_FUEL_FILE", "env-fuel.xlsx"),
            ("FROTA_MAINTENANCE_FILE", "env-maint.xlsx"),
        ]),
    )
    .unwrap();

    assert_eq!(config.fuel_path(), PathBuf::from("/from/flag/env-fuel.xlsx"));
    assert_eq!(
        config.maintenance_path(),
        PathBuf::from("/from/flag/oficinas.xlsx")
    );
}

#[test]
fn test_resolve_config_env_config_path() {
    let fixture = Fixture::empty();
    let config_path = fixture.dir.path().join("env.toml");
    std::fs::write(&config_path, "[maintenance]\nheader_row = 3\n").unwrap();

    let path = config_path.to_string_lossy().into_owned();
    let config = commands::resolve_config_with(
        &ConfigOverrides::default(),
        env_from(&[("FROTA_CONFIG", path.as_str()), ("FROTA_DATA_DIR", "data")]),
    )
    .unwrap();

    assert_eq!(config.maintenance.header_row, 3);
}

#[test]
fn test_resolve_config_missing_file_is_error() {
    let overrides = ConfigOverrides {
        config: Some(PathBuf::from("/nonexistent/frota.toml")),
        ..Default::default()
    };
    assert!(commands::resolve_config_with(&overrides, no_env).is_err());
}

#[test]
fn test_resolve_config_ignores_empty_env() {
    let fixture = Fixture::empty();
    let config_path = fixture.dir.path().join("frota.toml");
    std::fs::write(&config_path, "data_dir = \"planilhas\"\n").unwrap();
    let overrides = ConfigOverrides {
        config: Some(config_path),
        ..Default::default()
    };

    // An empty FROTA_DATA_DIR must not clear the data directory
    let config =
        commands::resolve_config_with(&overrides, env_from(&[("FROTA_DATA_DIR", "")])).unwrap();
    assert_eq!(config.data_dir, PathBuf::from("planilhas"));
}

// ========== Command Tests ==========

#[test]
fn test_cmd_report_fuel() {
    let fixture = Fixture::new();
    let dashboard = Dashboard::new(fixture.config.clone());

    assert!(commands::cmd_report_fuel(&dashboard, &FuelFilter::default(), false).is_ok());
    assert!(commands::cmd_report_fuel(&dashboard, &FuelFilter::default(), true).is_ok());

    let filter = FuelFilter {
        posto: Some("Posto Inexistente".into()),
        ..Default::default()
    };
    assert!(commands::cmd_report_fuel(&dashboard, &filter, false).is_ok());
}

#[test]
fn test_cmd_report_maintenance() {
    let fixture = Fixture::new();
    let dashboard = Dashboard::new(fixture.config.clone());

    let filter = MaintenanceFilter {
        mes: Some("2024-01".into()),
        ..Default::default()
    };
    assert!(commands::cmd_report_maintenance(&dashboard, &filter, false).is_ok());
    assert!(commands::cmd_report_maintenance(&dashboard, &filter, true).is_ok());
}

#[test]
fn test_cmd_report_missing_workbook() {
    let fixture = Fixture::empty();
    let dashboard = Dashboard::new(fixture.config.clone());

    let err = commands::cmd_report_fuel(&dashboard, &FuelFilter::default(), false).unwrap_err();
    assert!(err.to_string().contains("fuel summary"));
    assert!(
        commands::cmd_report_maintenance(&dashboard, &MaintenanceFilter::default(), true).is_err()
    );
}

#[test]
fn test_cmd_config() {
    let fixture = Fixture::new();
    assert!(commands::cmd_config(&fixture.config).is_ok());
}

// ========== Helper Tests ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("Posto Central", 24), "Posto Central");
    assert_eq!(truncate("Auto Peças e Serviços Ltda", 12), "Auto Peça...");
    assert_eq!(truncate("abc", 3), "abc");
}
