//! Vehicle lookup and due-status queries

use chrono::{DateTime, Utc};

use autocare_domain::model::VehicleSnapshot;
use autocare_domain::repository::ScheduleRepository;
use autocare_domain::service::compute_due_statuses;
use autocare_store::VehicleStore;
use autocare_types::{DueStatus, Error, RegisteredVehicle, Result};

use crate::config::Config;
use crate::repository::{open_schedule_repo, open_service_log, open_vehicle_store};

/// All registered vehicles, sorted by make, model, year
pub fn list_vehicles(config: &Config) -> Result<Vec<RegisteredVehicle>> {
    let store = open_vehicle_store(config)?;
    Ok(store.all_vehicles().into_iter().cloned().collect())
}

/// Resolve a vehicle query: exact id, then exact VIN, then a
/// case-insensitive substring of the display name ("2018 Toyota Corolla").
pub(crate) fn resolve_vehicle(store: &VehicleStore, query: &str) -> Option<RegisteredVehicle> {
    if let Some(vehicle) = store.get(query) {
        return Some(vehicle.clone());
    }
    if let Some(vehicle) = store.get_by_vin(query) {
        return Some(vehicle.clone());
    }
    let needle = query.to_lowercase();
    store
        .all_vehicles()
        .into_iter()
        .find(|v| v.display_name().to_lowercase().contains(&needle))
        .cloned()
}

/// Resolve a vehicle query or fail with [Error::VehicleNotFound]
pub fn find_vehicle(config: &Config, query: &str) -> Result<RegisteredVehicle> {
    let store = open_vehicle_store(config)?;
    resolve_vehicle(&store, query).ok_or_else(|| Error::VehicleNotFound(query.to_string()))
}

/// Due statuses for a vehicle query, most urgent first.
///
/// An unknown vehicle yields an empty list, not an error.
pub fn due_statuses(config: &Config, query: &str, now: DateTime<Utc>) -> Result<Vec<DueStatus>> {
    let store = open_vehicle_store(config)?;
    let vehicle = match resolve_vehicle(&store, query) {
        Some(vehicle) => vehicle,
        None => return Ok(Vec::new()),
    };
    due_statuses_for(config, &vehicle, now)
}

/// Due statuses for a resolved vehicle
pub(crate) fn due_statuses_for(
    config: &Config,
    vehicle: &RegisteredVehicle,
    now: DateTime<Utc>,
) -> Result<Vec<DueStatus>> {
    let snapshot = VehicleSnapshot::from(vehicle);
    let rules = open_schedule_repo(config)?.find_matching(&snapshot)?;
    let history = open_service_log(config)?.latest_per_type(&vehicle.id);
    Ok(compute_due_statuses(&snapshot, &rules, &history, now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::registration::{register_vehicle, RegistrationRequest};
    use chrono::TimeZone;

    fn test_config(dir: &tempfile::TempDir) -> Config {
        Config {
            data_dir: Some(dir.path().join("data")),
            reference_dir: Some(dir.path().join("reference")),
            ..Config::default()
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()
    }

    fn register(config: &Config, make: &str, model: &str, vin: Option<&str>) -> RegisteredVehicle {
        let request = RegistrationRequest {
            make: make.to_string(),
            model: model.to_string(),
            year: 2018,
            current_km: 40000,
            vin: vin.map(str::to_string),
            engine_type: None,
            transmission: None,
        };
        register_vehicle(config, request, now()).unwrap().vehicle
    }

    #[test]
    fn test_find_vehicle_by_id_vin_and_name() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        let vehicle = register(&config, "Toyota", "Corolla", Some("VIN0001"));
        register(&config, "Honda", "Civic", None);

        assert_eq!(find_vehicle(&config, &vehicle.id).unwrap().id, vehicle.id);
        assert_eq!(find_vehicle(&config, "VIN0001").unwrap().id, vehicle.id);
        assert_eq!(find_vehicle(&config, "corolla").unwrap().id, vehicle.id);
        assert!(matches!(
            find_vehicle(&config, "Nimbus"),
            Err(Error::VehicleNotFound(_))
        ));
    }

    #[test]
    fn test_unknown_vehicle_yields_empty_statuses() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        assert!(due_statuses(&config, "nope", now()).unwrap().is_empty());
    }

    #[test]
    fn test_statuses_sorted_and_capped() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        let vehicle = register(&config, "Toyota", "Corolla", None);

        let statuses = due_statuses(&config, &vehicle.id, now()).unwrap();
        assert!(!statuses.is_empty());
        assert!(statuses.len() <= 10);
        for pair in statuses.windows(2) {
            assert!(pair[0].urgency.rank() <= pair[1].urgency.rank());
        }
    }
}
