//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Frota - Fleet fuel and maintenance cost dashboard
#[derive(Parser)]
#[command(name = "frota")]
#[command(about = "Fleet fuel and maintenance cost dashboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file overriding the built-in defaults (also FROTA_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the workbooks (also FROTA_DATA_DIR)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Fuel workbook, relative to the data directory (also FROTA_FUEL_FILE)
    #[arg(long, global = true)]
    pub fuel_file: Option<PathBuf>,

    /// Maintenance workbook, relative to the data directory (also FROTA_MAINTENANCE_FILE)
    #[arg(long, global = true)]
    pub maintenance_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web dashboard
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "5000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Directory containing extra static files to serve
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Print a dashboard summary in the terminal
    Report {
        #[command(subcommand)]
        kind: ReportKind,
    },

    /// Show the resolved configuration
    Config,
}

#[derive(Subcommand)]
pub enum ReportKind {
    /// Fuel spending, mileage and consumption
    Fuel {
        /// Month bucket (YYYY-MM)
        #[arg(long)]
        mes: Option<String>,

        /// Vehicle plate
        #[arg(long)]
        placa: Option<String>,

        /// Fuel station
        #[arg(long)]
        posto: Option<String>,

        /// Fuel type
        #[arg(long)]
        combustivel: Option<String>,

        /// Print the JSON payload served at /data/combustivel
        #[arg(long)]
        json: bool,
    },

    /// Maintenance spending by month, plate and workshop
    Maintenance {
        /// Month bucket (YYYY-MM)
        #[arg(long)]
        mes: Option<String>,

        /// Vehicle plate
        #[arg(long)]
        placa: Option<String>,

        /// Workshop
        #[arg(long)]
        oficina: Option<String>,

        /// Print the JSON payload served at /data/manutencao
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Config-related global flags
    pub fn config_overrides(&self) -> crate::commands::ConfigOverrides {
        crate::commands::ConfigOverrides {
            config: self.config.clone(),
            data_dir: self.data_dir.clone(),
            fuel_file: self.fuel_file.clone(),
            maintenance_file: self.maintenance_file.clone(),
        }
    }
}
