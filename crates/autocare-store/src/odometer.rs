//! Append-only odometer reading log

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use autocare_types::{OdometerReading, Result};

/// Persistent append-only log of submitted odometer readings
pub struct OdometerLogStore {
    store_path: PathBuf,
    readings: Vec<OdometerReading>,
}

impl OdometerLogStore {
    /// Create or load an odometer log store
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("odometer_log.json");

        let readings = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).unwrap_or_default()
        } else {
            Vec::new()
        };

        Ok(Self { store_path, readings })
    }

    /// Save store to disk
    fn save(&self) -> Result<()> {
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.readings)?;
        Ok(())
    }

    /// Append one reading
    pub fn append(&mut self, reading: OdometerReading) -> Result<()> {
        self.readings.push(reading);
        self.save()?;
        Ok(())
    }

    /// All readings for a vehicle in insertion order
    pub fn readings_for(&self, vehicle_id: &str) -> Vec<&OdometerReading> {
        self.readings
            .iter()
            .filter(|r| r.vehicle_id == vehicle_id)
            .collect()
    }

    /// Get total reading count
    pub fn count(&self) -> usize {
        self.readings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_append_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = OdometerLogStore::open(dir.path().to_path_buf()).unwrap();
            store
                .append(OdometerReading::new("v1".to_string(), 40500, Utc::now()))
                .unwrap();
            store
                .append(OdometerReading::new("v2".to_string(), 12000, Utc::now()))
                .unwrap();
        }
        let store = OdometerLogStore::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(store.count(), 2);
        assert_eq!(store.readings_for("v1").len(), 1);
        assert_eq!(store.readings_for("v1")[0].km_reading, 40500);
    }
}
