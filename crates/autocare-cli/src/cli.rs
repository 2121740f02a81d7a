//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use autocare_types::OutputFormat;

#[derive(Parser)]
#[command(name = "autocare")]
#[command(version)]
#[command(about = "Vehicle maintenance tracking and symptom diagnostics")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Data directory override (stores live here)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register a vehicle and show its projected maintenance schedule
    Register {
        /// Manufacturer name (e.g., "Toyota")
        make: String,

        /// Model name (e.g., "Corolla")
        model: String,

        /// Model year
        year: i32,

        /// Current odometer reading in km
        #[arg(long, default_value_t = 0)]
        km: i64,

        /// Vehicle identification number
        #[arg(long)]
        vin: Option<String>,

        /// Engine type (e.g., "1.8L I4")
        #[arg(long)]
        engine: Option<String>,

        /// Transmission type (e.g., "CVT")
        #[arg(long)]
        transmission: Option<String>,
    },

    /// List registered vehicles
    Vehicles,

    /// Show maintenance due statuses for one vehicle, or all
    Status {
        /// Vehicle id, VIN, or name fragment (all vehicles if omitted)
        vehicle: Option<String>,
    },

    /// Log a completed service
    Log {
        /// Vehicle id, VIN, or name fragment
        vehicle: String,

        /// Service type key (e.g., oil_change)
        service_type: String,

        /// Odometer reading at service time in km
        km: i64,

        /// Date performed (YYYY-MM-DD, today if omitted)
        #[arg(long)]
        date: Option<String>,

        /// Cost paid
        #[arg(long)]
        cost: Option<f64>,

        /// Workshop name
        #[arg(long)]
        workshop: Option<String>,

        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Submit an odometer reading and show refreshed due statuses
    Odometer {
        /// Vehicle id, VIN, or name fragment
        vehicle: String,

        /// Odometer value in km
        km: i64,
    },

    /// Diagnose symptoms and store the report
    Diagnose {
        /// Vehicle id, VIN, or name fragment
        vehicle: String,

        /// Symptom token, repeatable (e.g., -s overheating -s knocking)
        #[arg(long, short = 's')]
        symptom: Vec<String>,

        /// Free-text description of the problem
        #[arg(long, short = 'd', default_value = "")]
        description: String,

        /// Seed for the confidence sampler (for reproducible output)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List stored diagnostic reports for a vehicle
    Reports {
        /// Vehicle id, VIN, or name fragment
        vehicle: String,
    },

    /// Browse the make/model catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },

    /// Bulk-import service history from a CSV file
    Import {
        /// Vehicle id, VIN, or name fragment
        vehicle: String,

        /// CSV file (header: service_type,date,km_reading[,cost][,workshop][,notes])
        file: PathBuf,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_format: Option<OutputFormat>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List catalog makes
    Makes,

    /// List catalog models, optionally filtered
    Models {
        /// Filter by make
        #[arg(long)]
        make: Option<String>,

        /// Only models whose year range covers this year
        #[arg(long)]
        year: Option<i32>,
    },

    /// Show the model years for a make/model pair
    Years {
        /// Manufacturer name
        make: String,

        /// Model name
        model: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_register() {
        let cli = Cli::try_parse_from([
            "autocare", "register", "Toyota", "Corolla", "2018", "--km", "40000", "--vin",
            "JTDBU4EE9A9123456",
        ])
        .unwrap();
        match cli.command {
            Commands::Register { make, model, year, km, vin, .. } => {
                assert_eq!(make, "Toyota");
                assert_eq!(model, "Corolla");
                assert_eq!(year, 2018);
                assert_eq!(km, 40000);
                assert_eq!(vin.as_deref(), Some("JTDBU4EE9A9123456"));
            }
            _ => panic!("expected register"),
        }
    }

    #[test]
    fn test_parse_status_without_vehicle() {
        let cli = Cli::try_parse_from(["autocare", "status"]).unwrap();
        assert!(matches!(cli.command, Commands::Status { vehicle: None }));
    }

    #[test]
    fn test_parse_diagnose_with_repeated_symptoms() {
        let cli = Cli::try_parse_from([
            "autocare", "diagnose", "corolla", "-s", "overheating", "-s", "knocking", "-d",
            "after long drives", "--seed", "42",
        ])
        .unwrap();
        match cli.command {
            Commands::Diagnose { vehicle, symptom, description, seed } => {
                assert_eq!(vehicle, "corolla");
                assert_eq!(symptom, vec!["overheating", "knocking"]);
                assert_eq!(description, "after long drives");
                assert_eq!(seed, Some(42));
            }
            _ => panic!("expected diagnose"),
        }
    }

    #[test]
    fn test_parse_global_format_flag() {
        let cli = Cli::try_parse_from(["autocare", "vehicles", "--format", "json"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_parse_catalog_years() {
        let cli =
            Cli::try_parse_from(["autocare", "catalog", "years", "Toyota", "Corolla"]).unwrap();
        match cli.command {
            Commands::Catalog { command: CatalogCommands::Years { make, model } } => {
                assert_eq!(make, "Toyota");
                assert_eq!(model, "Corolla");
            }
            _ => panic!("expected catalog years"),
        }
    }

    #[test]
    fn test_log_requires_km() {
        assert!(Cli::try_parse_from(["autocare", "log", "corolla", "oil_change"]).is_err());
    }
}
