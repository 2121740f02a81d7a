//! Command handlers

use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use autocare_app::app::{
    catalog_makes, catalog_models, catalog_years, diagnose, due_statuses, find_vehicle,
    import_history_csv, list_vehicles, log_service, register_vehicle, reports_for,
    submit_odometer, RegistrationRequest, ServiceLogRequest,
};
use autocare_app::Config;
use autocare_types::{Error, OutputFormat, Result};

use crate::cli::{CatalogCommands, Cli, Commands};
use crate::output::{
    output_projection, output_report, output_report_list, output_statuses, output_vehicles,
};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config, override from CLI args
    let mut config = Config::load()?;
    if let Some(ref dir) = cli.data_dir {
        config.data_dir = Some(dir.clone());
    }
    let format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Register {
            make,
            model,
            year,
            km,
            vin,
            engine,
            transmission,
        } => cmd_register(
            &cli,
            &config,
            format,
            RegistrationRequest {
                make: make.clone(),
                model: model.clone(),
                year: *year,
                current_km: *km,
                vin: vin.clone(),
                engine_type: engine.clone(),
                transmission: transmission.clone(),
            },
        ),

        Commands::Vehicles => {
            let vehicles = list_vehicles(&config)?;
            output_vehicles(format, &vehicles)
        }

        Commands::Status { vehicle } => cmd_status(&config, format, vehicle.as_deref()),

        Commands::Log {
            vehicle,
            service_type,
            km,
            date,
            cost,
            workshop,
            notes,
        } => cmd_log(
            &cli,
            &config,
            vehicle.clone(),
            service_type.clone(),
            *km,
            date.as_deref(),
            *cost,
            workshop.clone(),
            notes.clone(),
        ),

        Commands::Odometer { vehicle, km } => {
            let statuses = submit_odometer(&config, vehicle, *km, Utc::now())?;
            let resolved = find_vehicle(&config, vehicle)?;
            output_statuses(format, &resolved, &statuses)
        }

        Commands::Diagnose {
            vehicle,
            symptom,
            description,
            seed,
        } => cmd_diagnose(&config, format, vehicle, symptom.clone(), description.clone(), *seed),

        Commands::Reports { vehicle } => {
            let reports = reports_for(&config, vehicle)?;
            output_report_list(format, &reports)
        }

        Commands::Catalog { command } => cmd_catalog(&config, format, command),

        Commands::Import { vehicle, file } => cmd_import(&cli, &config, vehicle, file.clone()),

        Commands::Config { show, set_format, reset } => {
            cmd_config(&mut config, *show, *set_format, *reset)
        }
    }
}

fn cmd_register(
    cli: &Cli,
    config: &Config,
    format: OutputFormat,
    request: RegistrationRequest,
) -> Result<()> {
    if cli.verbose {
        eprintln!(
            "Registering {} {} {} at {} km",
            request.year, request.make, request.model, request.current_km
        );
    }
    let outcome = register_vehicle(config, request, Utc::now())?;
    output_projection(format, &outcome.vehicle, &outcome.schedule)
}

fn cmd_status(config: &Config, format: OutputFormat, vehicle: Option<&str>) -> Result<()> {
    let now = Utc::now();
    match vehicle {
        Some(query) => {
            // unknown vehicles get an empty status list, not an error
            let statuses = due_statuses(config, query, now)?;
            match find_vehicle(config, query) {
                Ok(resolved) => output_statuses(format, &resolved, &statuses),
                Err(Error::VehicleNotFound(_)) => {
                    println!("No vehicle matches '{}'.", query);
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }
        None => {
            let vehicles = list_vehicles(config)?;
            if vehicles.is_empty() {
                println!("No vehicles registered.");
                return Ok(());
            }
            for vehicle in vehicles {
                let statuses = due_statuses(config, &vehicle.id, now)?;
                output_statuses(format, &vehicle, &statuses)?;
            }
            Ok(())
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_log(
    cli: &Cli,
    config: &Config,
    vehicle: String,
    service_type: String,
    km: i64,
    date: Option<&str>,
    cost: Option<f64>,
    workshop: Option<String>,
    notes: Option<String>,
) -> Result<()> {
    let now = Utc::now();
    let date_performed = match date {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| Error::InvalidInput(format!("invalid date '{}', expected YYYY-MM-DD", raw)))?,
        None => now.date_naive(),
    };

    let event = log_service(
        config,
        ServiceLogRequest {
            vehicle,
            service_type,
            km_reading: km,
            date_performed,
            cost,
            workshop,
            notes,
        },
        now,
    )?;

    if cli.verbose {
        eprintln!("Event id: {}", event.id);
    }
    println!(
        "Logged {} at {} km on {}.",
        event.service_type, event.km_reading, event.date_performed
    );
    Ok(())
}

fn cmd_diagnose(
    config: &Config,
    format: OutputFormat,
    vehicle: &str,
    symptoms: Vec<String>,
    description: String,
    seed: Option<u64>,
) -> Result<()> {
    let now = Utc::now();
    // seeded generator for reproducible confidences, thread_rng otherwise
    let report = match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            diagnose(config, vehicle, symptoms, description, &mut rng, now)?
        }
        None => {
            let mut rng = rand::thread_rng();
            diagnose(config, vehicle, symptoms, description, &mut rng, now)?
        }
    };
    output_report(format, &report)
}

fn cmd_catalog(config: &Config, format: OutputFormat, command: &CatalogCommands) -> Result<()> {
    match command {
        CatalogCommands::Makes => {
            let makes = catalog_makes(config)?;
            if format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&makes)?);
            } else {
                for make in makes {
                    println!("{}", make);
                }
            }
        }
        CatalogCommands::Models { make, year } => {
            let models = catalog_models(config, make.as_deref(), *year)?;
            if format == OutputFormat::Json {
                let rows: Vec<serde_json::Value> = models
                    .iter()
                    .map(|m| {
                        serde_json::json!({
                            "make": m.make,
                            "model": m.model,
                            "year_start": m.year_start,
                            "year_end": m.year_end,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for m in models {
                    println!("{} {} ({}-{})", m.make, m.model, m.year_start, m.year_end);
                }
            }
        }
        CatalogCommands::Years { make, model } => {
            let lookup = catalog_years(config, make, model)?;
            let years = lookup.years();
            if format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&years)?);
            } else {
                if lookup.is_fallback() {
                    println!("{} {} is not in the catalog; showing the generic range.", make, model);
                }
                println!(
                    "{}-{}",
                    years.first().copied().unwrap_or_default(),
                    years.last().copied().unwrap_or_default()
                );
            }
        }
    }
    Ok(())
}

fn cmd_import(cli: &Cli, config: &Config, vehicle: &str, file: PathBuf) -> Result<()> {
    if cli.verbose {
        eprintln!("Importing history from {}", file.display());
    }
    let imported = import_history_csv(config, vehicle, &file, Utc::now())?;
    println!("Imported {} service events.", imported);
    Ok(())
}

fn cmd_config(
    config: &mut Config,
    show: bool,
    set_format: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    let mut changed = false;

    if reset {
        *config = Config::default();
        changed = true;
        println!("Configuration reset to defaults.");
    }

    if let Some(format) = set_format {
        config.output_format = format;
        changed = true;
        println!("Output format set to {}.", format);
    }

    if changed {
        config.save()?;
    }

    if show || !changed {
        println!("{}", config);
    }

    Ok(())
}
