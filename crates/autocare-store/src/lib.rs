//! JSON-file persistence for autocare
//!
//! Each store owns one file under the data directory and saves on every
//! mutation. Loading tolerates a missing file; a fresh store starts empty.

mod odometer;
mod reports;
mod service_log;
mod vehicles;

pub use odometer::OdometerLogStore;
pub use reports::ReportStore;
pub use service_log::ServiceLogStore;
pub use vehicles::VehicleStore;
