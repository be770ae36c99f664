//! Frota CLI - Fleet fuel and maintenance cost dashboard
//!
//! Usage:
//!   frota serve --port 5000          Start the web dashboard
//!   frota report fuel --mes 2024-01  Fuel summary in the terminal
//!   frota report maintenance         Maintenance summary in the terminal
//!   frota config                     Show the resolved configuration

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use frota_core::{FuelFilter, MaintenanceFilter};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let overrides = cli.config_overrides();

    match cli.command {
        Commands::Serve {
            port,
            host,
            static_dir,
        } => {
            let dashboard = commands::open_dashboard(&overrides)?;
            commands::cmd_serve(dashboard, &host, port, static_dir.as_deref()).await
        }
        Commands::Report { kind } => {
            let dashboard = commands::open_dashboard(&overrides)?;
            match kind {
                ReportKind::Fuel {
                    mes,
                    placa,
                    posto,
                    combustivel,
                    json,
                } => {
                    let filter = FuelFilter {
                        mes,
                        placa,
                        posto,
                        combustivel,
                    };
                    commands::cmd_report_fuel(&dashboard, &filter, json)
                }
                ReportKind::Maintenance {
                    mes,
                    placa,
                    oficina,
                    json,
                } => {
                    let filter = MaintenanceFilter {
                        mes,
                        placa,
                        oficina,
                    };
                    commands::cmd_report_maintenance(&dashboard, &filter, json)
                }
            }
        }
        Commands::Config => {
            let config = commands::resolve_config(&overrides)?;
            commands::cmd_config(&config)
        }
    }
}
