//! Service logging, odometer submission, and history import

use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};

use autocare_infra::history_csv::load_service_events;
use autocare_types::{DueStatus, Error, OdometerReading, Result, ServiceEvent};

use crate::config::Config;
use crate::repository::{open_odometer_log, open_service_log, open_vehicle_store};
use crate::validate;

use super::status::{due_statuses_for, resolve_vehicle};

/// Input for logging one service event
#[derive(Debug, Clone)]
pub struct ServiceLogRequest {
    /// Vehicle query: id, VIN, or name fragment
    pub vehicle: String,
    pub service_type: String,
    pub km_reading: i64,
    pub date_performed: NaiveDate,
    pub cost: Option<f64>,
    pub workshop: Option<String>,
    pub notes: Option<String>,
}

/// Log a completed service.
///
/// The registry odometer is raised to the event's reading when higher;
/// logging an older event never winds it back.
pub fn log_service(
    config: &Config,
    request: ServiceLogRequest,
    now: DateTime<Utc>,
) -> Result<ServiceEvent> {
    let mut vehicles = open_vehicle_store(config)?;
    let vehicle = resolve_vehicle(&vehicles, &request.vehicle)
        .ok_or_else(|| Error::VehicleNotFound(request.vehicle.clone()))?;

    validate::validate_name("service type", &request.service_type)?;
    validate::validate_km(request.km_reading)?;
    validate::validate_service_date(request.date_performed, now.date_naive())?;
    if let Some(cost) = request.cost {
        validate::validate_cost(cost)?;
    }

    let mut event = ServiceEvent::new(
        vehicle.id.clone(),
        request.service_type,
        request.km_reading,
        request.date_performed,
        now,
    );
    event.cost = request.cost;
    event.workshop = request.workshop;
    event.notes = request.notes;

    open_service_log(config)?.append(event.clone())?;
    vehicles.raise_km(&vehicle.id, event.km_reading)?;

    Ok(event)
}

/// Submit an odometer reading and return the refreshed due statuses.
///
/// Unlike service logging, a submitted reading overwrites the registry
/// odometer unconditionally and stamps the update time.
pub fn submit_odometer(
    config: &Config,
    vehicle_query: &str,
    km_reading: i64,
    now: DateTime<Utc>,
) -> Result<Vec<DueStatus>> {
    let mut vehicles = open_vehicle_store(config)?;
    let vehicle = resolve_vehicle(&vehicles, vehicle_query)
        .ok_or_else(|| Error::VehicleNotFound(vehicle_query.to_string()))?;

    validate::validate_km(km_reading)?;

    open_odometer_log(config)?.append(OdometerReading::new(vehicle.id.clone(), km_reading, now))?;
    vehicles.set_km(&vehicle.id, km_reading, now)?;

    let updated = vehicles
        .get(&vehicle.id)
        .cloned()
        .ok_or_else(|| Error::VehicleNotFound(vehicle.id.clone()))?;
    due_statuses_for(config, &updated, now)
}

/// Bulk-import service history from a CSV file.
///
/// All rows must validate before anything is written; a bad row aborts the
/// whole import. Returns the number of imported events.
pub fn import_history_csv(
    config: &Config,
    vehicle_query: &str,
    path: &Path,
    now: DateTime<Utc>,
) -> Result<usize> {
    let mut vehicles = open_vehicle_store(config)?;
    let vehicle = resolve_vehicle(&vehicles, vehicle_query)
        .ok_or_else(|| Error::VehicleNotFound(vehicle_query.to_string()))?;

    let events = load_service_events(path, &vehicle.id, now)
        .map_err(|e| Error::HistoryImport(e.to_string()))?;
    let today = now.date_naive();
    for event in &events {
        validate::validate_service_date(event.date_performed, today)?;
    }

    let mut log = open_service_log(config)?;
    let mut max_km = 0;
    for event in &events {
        log.append(event.clone())?;
        max_km = max_km.max(event.km_reading);
    }
    if !events.is_empty() {
        vehicles.raise_km(&vehicle.id, max_km)?;
    }

    Ok(events.len())
}
