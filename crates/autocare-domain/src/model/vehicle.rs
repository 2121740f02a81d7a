//! Vehicle snapshot consumed by the decision engines

use serde::{Deserialize, Serialize};

use autocare_types::{RegisteredVehicle, VehicleInfo};

/// Point-in-time vehicle state. Everything the engines need to know about a
/// vehicle; how it was stored is the caller's business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleSnapshot {
    /// Manufacturer name
    pub make: String,
    /// Model name
    pub model: String,
    /// Model year
    pub year: i32,
    /// Latest known odometer value in km
    pub current_km: i64,
}

impl VehicleSnapshot {
    /// Summary echoed into diagnostic results
    pub fn info(&self) -> VehicleInfo {
        VehicleInfo {
            make: self.make.clone(),
            model: self.model.clone(),
            year: self.year,
        }
    }
}

impl From<&RegisteredVehicle> for VehicleSnapshot {
    fn from(vehicle: &RegisteredVehicle) -> Self {
        Self {
            make: vehicle.make.clone(),
            model: vehicle.model.clone(),
            year: vehicle.year,
            current_km: vehicle.current_km,
        }
    }
}
