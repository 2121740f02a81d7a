//! Vehicle registration use case

use chrono::{DateTime, Utc};

use autocare_domain::model::VehicleSnapshot;
use autocare_domain::repository::ScheduleRepository;
use autocare_domain::service::project_initial_schedule;
use autocare_types::{ProjectedService, RegisteredVehicle, Result};

use crate::config::Config;
use crate::repository::{open_schedule_repo, open_vehicle_store};
use crate::validate;

/// Input for registering a vehicle
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub current_km: i64,
    pub vin: Option<String>,
    pub engine_type: Option<String>,
    pub transmission: Option<String>,
}

/// The stored vehicle plus its projected first maintenance schedule
#[derive(Debug, Clone)]
pub struct RegistrationOutcome {
    pub vehicle: RegisteredVehicle,
    pub schedule: Vec<ProjectedService>,
}

/// Register a vehicle and project its initial maintenance schedule.
///
/// The projection is computed from the rules matching the vehicle at its
/// registration odometer and moment; later status checks use the due-status
/// calculator instead.
pub fn register_vehicle(
    config: &Config,
    request: RegistrationRequest,
    now: DateTime<Utc>,
) -> Result<RegistrationOutcome> {
    validate::validate_name("make", &request.make)?;
    validate::validate_name("model", &request.model)?;
    validate::validate_year(request.year)?;
    validate::validate_km(request.current_km)?;

    let mut vehicle = RegisteredVehicle::new(
        request.make,
        request.model,
        request.year,
        request.current_km,
        now,
    )
    .with_drivetrain(request.engine_type, request.transmission);
    if let Some(vin) = request.vin {
        vehicle = vehicle.with_vin(vin);
    }

    let snapshot = VehicleSnapshot::from(&vehicle);
    let rules = open_schedule_repo(config)?.find_matching(&snapshot)?;
    let schedule = project_initial_schedule(&snapshot, &rules, now);

    let mut store = open_vehicle_store(config)?;
    store.register(vehicle.clone())?;

    Ok(RegistrationOutcome { vehicle, schedule })
}

#[cfg(test)]
mod tests {
    use super::*;
    use autocare_types::Error;
    use chrono::TimeZone;

    fn test_config(dir: &tempfile::TempDir) -> Config {
        Config {
            data_dir: Some(dir.path().join("data")),
            reference_dir: Some(dir.path().join("reference")),
            ..Config::default()
        }
    }

    fn request() -> RegistrationRequest {
        RegistrationRequest {
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2018,
            current_km: 40000,
            vin: Some("JTDBU4EE9A9123456".to_string()),
            engine_type: Some("1.8L I4".to_string()),
            transmission: Some("CVT".to_string()),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_register_persists_and_projects() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);

        let outcome = register_vehicle(&config, request(), now()).unwrap();
        assert_eq!(outcome.vehicle.display_name(), "2018 Toyota Corolla");
        assert!(!outcome.schedule.is_empty());
        // critical rules lead the projection
        assert!(outcome.schedule[0].critical);
        // due points are absolute: registration km plus the interval
        let oil = outcome
            .schedule
            .iter()
            .find(|p| p.service_type == "oil_change")
            .unwrap();
        assert_eq!(oil.due_km, 40000 + oil.interval_km);

        let store = open_vehicle_store(&config).unwrap();
        assert_eq!(store.count(), 1);
        assert!(store.get_by_vin("JTDBU4EE9A9123456").is_some());
    }

    #[test]
    fn test_register_rejects_bad_input() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);

        let mut bad_year = request();
        bad_year.year = 1850;
        assert!(matches!(
            register_vehicle(&config, bad_year, now()),
            Err(Error::InvalidInput(_))
        ));

        let mut bad_km = request();
        bad_km.current_km = -100;
        assert!(matches!(
            register_vehicle(&config, bad_km, now()),
            Err(Error::InvalidInput(_))
        ));

        // nothing was stored
        assert_eq!(open_vehicle_store(&config).unwrap().count(), 0);
    }
}
