//! Repository adapters for the persistence and reference layers

use autocare_domain::knowledge::{RepairGuideTable, SymptomKnowledgeBase};
use autocare_infra::persistence::{FileReportRepository, FileScheduleRepository, FileServiceHistoryRepository};
use autocare_infra::reference::{load_repair_guides, load_symptom_kb, VehicleCatalog};
use autocare_store::{OdometerLogStore, ReportStore, ServiceLogStore, VehicleStore};
use autocare_types::Result;

use crate::config::Config;
use crate::defaults::{
    self, REPAIR_GUIDES_FILE, SCHEDULES_FILE, SYMPTOM_KB_FILE, VEHICLE_CATALOG_FILE,
};

/// Open the registered vehicle store
pub fn open_vehicle_store(config: &Config) -> Result<VehicleStore> {
    VehicleStore::open(config.data_dir()?)
}

/// Open the service event log store
pub fn open_service_log(config: &Config) -> Result<ServiceLogStore> {
    ServiceLogStore::open(config.data_dir()?)
}

/// Open the odometer reading log store
pub fn open_odometer_log(config: &Config) -> Result<OdometerLogStore> {
    OdometerLogStore::open(config.data_dir()?)
}

/// Open the diagnostic report store
pub fn open_report_store(config: &Config) -> Result<ReportStore> {
    ReportStore::open(config.data_dir()?)
}

/// Open the schedule repository over the reference directory
pub fn open_schedule_repo(config: &Config) -> Result<FileScheduleRepository> {
    let dir = ensure_reference(config)?;
    FileScheduleRepository::new(dir.join(SCHEDULES_FILE))
}

/// Open the trait-level service history repository
pub fn open_history_repo(config: &Config) -> Result<FileServiceHistoryRepository> {
    FileServiceHistoryRepository::open(config.data_dir()?)
}

/// Open the trait-level diagnostic report repository
pub fn open_report_repo(config: &Config) -> Result<FileReportRepository> {
    FileReportRepository::open(config.data_dir()?)
}

/// Load the symptom knowledge base from the reference directory
pub fn load_kb(config: &Config) -> Result<SymptomKnowledgeBase> {
    let dir = ensure_reference(config)?;
    load_symptom_kb(&dir.join(SYMPTOM_KB_FILE))
}

/// Load the repair guide table from the reference directory
pub fn load_guides(config: &Config) -> Result<RepairGuideTable> {
    let dir = ensure_reference(config)?;
    load_repair_guides(&dir.join(REPAIR_GUIDES_FILE))
}

/// Load the make/model catalog from the reference directory
pub fn load_vehicle_catalog(config: &Config) -> Result<VehicleCatalog> {
    let dir = ensure_reference(config)?;
    VehicleCatalog::load_from_file(&dir.join(VEHICLE_CATALOG_FILE))
}

fn ensure_reference(config: &Config) -> Result<std::path::PathBuf> {
    let dir = config.reference_dir()?;
    defaults::ensure_reference_files(&dir)?;
    Ok(dir)
}
