//! Use-case services
//!
//! Each service wires stores and reference data together around the domain
//! engines. All operations are single-request and synchronous.

pub mod catalog;
pub mod diagnostics;
pub mod maintenance;
pub mod registration;
pub mod status;

pub use catalog::{catalog_makes, catalog_models, catalog_years};
pub use diagnostics::{diagnose, reports_for};
pub use maintenance::{import_history_csv, log_service, submit_odometer, ServiceLogRequest};
pub use registration::{register_vehicle, RegistrationOutcome, RegistrationRequest};
pub use status::{due_statuses, find_vehicle, list_vehicles};
