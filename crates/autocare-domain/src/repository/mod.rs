//! Repository trait definitions for data access

use std::collections::HashMap;

use autocare_types::Error;
use autocare_types::{DiagnosticReport, ServiceEvent, ServiceFact};

use crate::model::{MaintenanceRule, VehicleSnapshot};

/// Repository for the maintenance schedule catalog
pub trait ScheduleRepository {
    /// Load all maintenance rules in catalog order
    fn find_all(&self) -> Result<Vec<MaintenanceRule>, Error>;

    /// Rules whose make/model/year filters accept the vehicle, catalog order
    fn find_matching(&self, vehicle: &VehicleSnapshot) -> Result<Vec<MaintenanceRule>, Error>;
}

/// Repository for logged service events
pub trait ServiceHistoryRepository {
    /// Append one service event
    fn append(&mut self, event: &ServiceEvent) -> Result<(), Error>;

    /// All events for a vehicle, oldest first
    fn find_by_vehicle(&self, vehicle_id: &str) -> Result<Vec<ServiceEvent>, Error>;

    /// Latest service facts per service type for a vehicle
    fn latest_per_type(&self, vehicle_id: &str) -> Result<HashMap<String, ServiceFact>, Error>;
}

/// Repository for persisted diagnostic reports
pub trait DiagnosticReportRepository {
    /// Persist one report
    fn save(&mut self, report: &DiagnosticReport) -> Result<(), Error>;

    /// All reports for a vehicle, oldest first
    fn find_by_vehicle(&self, vehicle_id: &str) -> Result<Vec<DiagnosticReport>, Error>;
}
