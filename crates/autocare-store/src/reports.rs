//! Diagnostic report store

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use autocare_types::{DiagnosticReport, Result};

/// Persistent append-only store of diagnostic reports.
///
/// Reports are immutable once saved; there is no update or delete.
pub struct ReportStore {
    store_path: PathBuf,
    reports: Vec<DiagnosticReport>,
}

impl ReportStore {
    /// Create or load a report store
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("diagnostic_reports.json");

        let reports = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).unwrap_or_default()
        } else {
            Vec::new()
        };

        Ok(Self { store_path, reports })
    }

    /// Save store to disk
    fn save(&self) -> Result<()> {
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.reports)?;
        Ok(())
    }

    /// Append one report
    pub fn append(&mut self, report: DiagnosticReport) -> Result<()> {
        self.reports.push(report);
        self.save()?;
        Ok(())
    }

    /// All reports for a vehicle in insertion order
    pub fn reports_for(&self, vehicle_id: &str) -> Vec<&DiagnosticReport> {
        self.reports
            .iter()
            .filter(|r| r.vehicle_id == vehicle_id)
            .collect()
    }

    /// Get total report count
    pub fn count(&self) -> usize {
        self.reports.len()
    }
}
