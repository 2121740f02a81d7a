//! File-based implementation of ScheduleRepository

use std::path::PathBuf;

use autocare_domain::model::{MaintenanceRule, VehicleSnapshot};
use autocare_domain::repository::ScheduleRepository;
use autocare_types::Error;

use crate::reference::ScheduleCatalog;

/// File-based maintenance schedule repository (TOML)
pub struct FileScheduleRepository {
    toml_path: PathBuf,
    catalog: ScheduleCatalog,
}

impl FileScheduleRepository {
    /// Create a new repository from a TOML file path
    pub fn new(toml_path: PathBuf) -> Result<Self, Error> {
        let catalog = ScheduleCatalog::load_from_file(&toml_path)?;
        Ok(Self { toml_path, catalog })
    }

    /// Get the TOML path
    pub fn toml_path(&self) -> &PathBuf {
        &self.toml_path
    }

    /// Reload rules from TOML
    pub fn reload(&mut self) -> Result<(), Error> {
        self.catalog = ScheduleCatalog::load_from_file(&self.toml_path)?;
        Ok(())
    }
}

impl ScheduleRepository for FileScheduleRepository {
    fn find_all(&self) -> Result<Vec<MaintenanceRule>, Error> {
        Ok(self.catalog.rules().to_vec())
    }

    fn find_matching(&self, vehicle: &VehicleSnapshot) -> Result<Vec<MaintenanceRule>, Error> {
        Ok(self.catalog.matching_rules(vehicle))
    }
}
