//! Reference-data loaders (TOML)

pub mod knowledge;
pub mod schedule_catalog;
pub mod vehicle_catalog;

pub use knowledge::{load_repair_guides, load_symptom_kb};
pub use schedule_catalog::ScheduleCatalog;
pub use vehicle_catalog::{CatalogModel, VehicleCatalog, YearLookup};
