//! Symptom diagnostics use case

use chrono::{DateTime, Utc};
use rand::Rng;

use autocare_domain::model::VehicleSnapshot;
use autocare_domain::service::analyze_symptoms;
use autocare_types::{DiagnosticReport, Error, Result};

use crate::config::Config;
use crate::repository::{load_guides, load_kb, open_report_store, open_vehicle_store};

use super::status::resolve_vehicle;

/// Run the diagnostic pipeline for a vehicle and persist the report.
///
/// The randomness source is injected so callers (and tests) control the
/// confidence sampling; production callers pass `rand::thread_rng()`.
pub fn diagnose<R: Rng>(
    config: &Config,
    vehicle_query: &str,
    symptoms: Vec<String>,
    description: String,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Result<DiagnosticReport> {
    let vehicles = open_vehicle_store(config)?;
    let vehicle = resolve_vehicle(&vehicles, vehicle_query)
        .ok_or_else(|| Error::VehicleNotFound(vehicle_query.to_string()))?;

    let kb = load_kb(config)?;
    let guides = load_guides(config)?;

    let snapshot = VehicleSnapshot::from(&vehicle);
    let result = analyze_symptoms(&snapshot, &kb, &guides, &symptoms, &description, rng);

    let report = DiagnosticReport::new(vehicle.id.clone(), symptoms, description, result, now);
    open_report_store(config)?.append(report.clone())?;

    Ok(report)
}

/// All stored reports for a vehicle, oldest first
pub fn reports_for(config: &Config, vehicle_query: &str) -> Result<Vec<DiagnosticReport>> {
    let vehicles = open_vehicle_store(config)?;
    let vehicle = resolve_vehicle(&vehicles, vehicle_query)
        .ok_or_else(|| Error::VehicleNotFound(vehicle_query.to_string()))?;

    let store = open_report_store(config)?;
    Ok(store.reports_for(&vehicle.id).into_iter().cloned().collect())
}
