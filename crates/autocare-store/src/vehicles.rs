//! Vehicle registry store

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use autocare_types::{RegisteredVehicle, Result};

/// Persistent store for registered vehicles
pub struct VehicleStore {
    store_path: PathBuf,
    vehicles: HashMap<String, RegisteredVehicle>,
}

impl VehicleStore {
    /// Create or load a vehicle store
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("vehicles.json");

        let vehicles = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).unwrap_or_default()
        } else {
            HashMap::new()
        };

        Ok(Self { store_path, vehicles })
    }

    /// Save store to disk
    fn save(&self) -> Result<()> {
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.vehicles)?;
        Ok(())
    }

    /// Register a new vehicle
    pub fn register(&mut self, vehicle: RegisteredVehicle) -> Result<String> {
        let id = vehicle.id.clone();
        self.vehicles.insert(id.clone(), vehicle);
        self.save()?;
        Ok(id)
    }

    /// Get a vehicle by ID
    pub fn get(&self, id: &str) -> Option<&RegisteredVehicle> {
        self.vehicles.get(id)
    }

    /// Find a vehicle by exact VIN
    pub fn get_by_vin(&self, vin: &str) -> Option<&RegisteredVehicle> {
        self.vehicles
            .values()
            .find(|v| v.vin.as_deref().map(|candidate| candidate == vin).unwrap_or(false))
    }

    /// All vehicles, sorted by make, model, then year
    pub fn all_vehicles(&self) -> Vec<&RegisteredVehicle> {
        let mut vehicles: Vec<_> = self.vehicles.values().collect();
        vehicles.sort_by(|a, b| {
            a.make
                .cmp(&b.make)
                .then_with(|| a.model.cmp(&b.model))
                .then_with(|| a.year.cmp(&b.year))
        });
        vehicles
    }

    /// Raise the odometer to `km` if higher than the stored value.
    ///
    /// This is the service-log rule: logging an old event never winds the
    /// odometer back. Returns false when the vehicle does not exist.
    pub fn raise_km(&mut self, id: &str, km: i64) -> Result<bool> {
        match self.vehicles.get_mut(id) {
            Some(vehicle) => {
                if km > vehicle.current_km {
                    vehicle.current_km = km;
                    self.save()?;
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Overwrite the odometer and stamp the update time.
    ///
    /// This is the odometer-submission rule: the submitted reading wins
    /// unconditionally. Returns false when the vehicle does not exist.
    pub fn set_km(&mut self, id: &str, km: i64, at: DateTime<Utc>) -> Result<bool> {
        match self.vehicles.get_mut(id) {
            Some(vehicle) => {
                vehicle.current_km = km;
                vehicle.last_km_update = Some(at);
                self.save()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Get total vehicle count
    pub fn count(&self) -> usize {
        self.vehicles.len()
    }
}
