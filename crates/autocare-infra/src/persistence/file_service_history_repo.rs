//! File-based implementation of ServiceHistoryRepository

use std::collections::HashMap;
use std::path::PathBuf;

use autocare_domain::repository::ServiceHistoryRepository;
use autocare_store::ServiceLogStore;
use autocare_types::{Error, ServiceEvent, ServiceFact};

/// Service history repository backed by the JSON service log store
pub struct FileServiceHistoryRepository {
    store: ServiceLogStore,
}

impl FileServiceHistoryRepository {
    /// Open the repository over a store directory
    pub fn open(store_dir: PathBuf) -> Result<Self, Error> {
        let store = ServiceLogStore::open(store_dir)?;
        Ok(Self { store })
    }
}

impl ServiceHistoryRepository for FileServiceHistoryRepository {
    fn append(&mut self, event: &ServiceEvent) -> Result<(), Error> {
        self.store.append(event.clone())
    }

    fn find_by_vehicle(&self, vehicle_id: &str) -> Result<Vec<ServiceEvent>, Error> {
        Ok(self
            .store
            .events_for(vehicle_id)
            .into_iter()
            .cloned()
            .collect())
    }

    fn latest_per_type(&self, vehicle_id: &str) -> Result<HashMap<String, ServiceFact>, Error> {
        Ok(self.store.latest_per_type(vehicle_id))
    }
}
