//! Domain model types

pub mod maintenance_rule;
pub mod vehicle;

pub use maintenance_rule::MaintenanceRule;
pub use vehicle::VehicleSnapshot;
