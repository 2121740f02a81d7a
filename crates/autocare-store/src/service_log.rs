//! Append-only service event log

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use autocare_types::{Result, ServiceEvent, ServiceFact};

/// Persistent append-only log of maintenance events
pub struct ServiceLogStore {
    store_path: PathBuf,
    events: Vec<ServiceEvent>,
}

impl ServiceLogStore {
    /// Create or load a service log store
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("service_log.json");

        let events = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).unwrap_or_default()
        } else {
            Vec::new()
        };

        Ok(Self { store_path, events })
    }

    /// Save store to disk
    fn save(&self) -> Result<()> {
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.events)?;
        Ok(())
    }

    /// Append one event
    pub fn append(&mut self, event: ServiceEvent) -> Result<()> {
        self.events.push(event);
        self.save()?;
        Ok(())
    }

    /// All events for a vehicle in insertion order
    pub fn events_for(&self, vehicle_id: &str) -> Vec<&ServiceEvent> {
        self.events
            .iter()
            .filter(|e| e.vehicle_id == vehicle_id)
            .collect()
    }

    /// Latest service facts per service type for a vehicle.
    ///
    /// Date and km maxima are tracked independently; the newest date and the
    /// highest reading may come from different events of the same type.
    pub fn latest_per_type(&self, vehicle_id: &str) -> HashMap<String, ServiceFact> {
        let mut facts: HashMap<String, ServiceFact> = HashMap::new();
        for event in self.events.iter().filter(|e| e.vehicle_id == vehicle_id) {
            facts
                .entry(event.service_type.clone())
                .and_modify(|fact| {
                    fact.date = fact.date.max(event.date_performed);
                    fact.km = fact.km.max(event.km_reading);
                })
                .or_insert(ServiceFact {
                    date: event.date_performed,
                    km: event.km_reading,
                });
        }
        facts
    }

    /// Get total event count
    pub fn count(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn event(vehicle_id: &str, service_type: &str, km: i64, date: (i32, u32, u32)) -> ServiceEvent {
        ServiceEvent::new(
            vehicle_id.to_string(),
            service_type.to_string(),
            km,
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            Utc::now(),
        )
    }

    #[test]
    fn test_append_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = ServiceLogStore::open(dir.path().to_path_buf()).unwrap();
            store.append(event("v1", "oil_change", 40000, (2026, 1, 10))).unwrap();
            store.append(event("v1", "tire_rotation", 41000, (2026, 2, 3))).unwrap();
        }
        let store = ServiceLogStore::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(store.count(), 2);
        assert_eq!(store.events_for("v1").len(), 2);
        assert!(store.events_for("v2").is_empty());
    }

    #[test]
    fn test_latest_per_type_takes_newest_date() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ServiceLogStore::open(dir.path().to_path_buf()).unwrap();
        store.append(event("v1", "oil_change", 35000, (2025, 7, 1))).unwrap();
        store.append(event("v1", "oil_change", 40000, (2026, 1, 10))).unwrap();

        let facts = store.latest_per_type("v1");
        let fact = facts.get("oil_change").unwrap();
        assert_eq!(fact.date, NaiveDate::from_ymd_opt(2026, 1, 10).unwrap());
        assert_eq!(fact.km, 40000);
    }

    #[test]
    fn test_latest_per_type_maxima_are_independent() {
        // the later event carries the lower reading; km keeps the higher one
        let dir = tempfile::tempdir().unwrap();
        let mut store = ServiceLogStore::open(dir.path().to_path_buf()).unwrap();
        store.append(event("v1", "oil_change", 42000, (2025, 7, 1))).unwrap();
        store.append(event("v1", "oil_change", 41000, (2026, 1, 10))).unwrap();

        let facts = store.latest_per_type("v1");
        let fact = facts.get("oil_change").unwrap();
        assert_eq!(fact.date, NaiveDate::from_ymd_opt(2026, 1, 10).unwrap());
        assert_eq!(fact.km, 42000);
    }

    #[test]
    fn test_latest_per_type_groups_by_service_type() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ServiceLogStore::open(dir.path().to_path_buf()).unwrap();
        store.append(event("v1", "oil_change", 40000, (2026, 1, 10))).unwrap();
        store.append(event("v1", "brake_inspection", 40500, (2026, 2, 1))).unwrap();
        store.append(event("v2", "oil_change", 9000, (2026, 2, 5))).unwrap();

        let facts = store.latest_per_type("v1");
        assert_eq!(facts.len(), 2);
        assert_eq!(facts.get("oil_change").unwrap().km, 40000);
        assert_eq!(facts.get("brake_inspection").unwrap().km, 40500);
    }
}
