//! File-based implementation of DiagnosticReportRepository

use std::path::PathBuf;

use autocare_domain::repository::DiagnosticReportRepository;
use autocare_store::ReportStore;
use autocare_types::{DiagnosticReport, Error};

/// Diagnostic report repository backed by the JSON report store
pub struct FileReportRepository {
    store: ReportStore,
}

impl FileReportRepository {
    /// Open the repository over a store directory
    pub fn open(store_dir: PathBuf) -> Result<Self, Error> {
        let store = ReportStore::open(store_dir)?;
        Ok(Self { store })
    }
}

impl DiagnosticReportRepository for FileReportRepository {
    fn save(&mut self, report: &DiagnosticReport) -> Result<(), Error> {
        self.store.append(report.clone())
    }

    fn find_by_vehicle(&self, vehicle_id: &str) -> Result<Vec<DiagnosticReport>, Error> {
        Ok(self
            .store
            .reports_for(vehicle_id)
            .into_iter()
            .cloned()
            .collect())
    }
}
