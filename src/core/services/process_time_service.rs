use uuid::Uuid;

use crate::domain::{ApplicationProcessTime, Registry};

pub struct ApplicationProcessTimeService;

impl ApplicationProcessTimeService {
    /// Persists a processing-time record as submitted. Duplicate category and
    /// type combinations are allowed; a double submit creates a second row.
    pub fn create(registry: &mut Registry, process_time: ApplicationProcessTime) -> Uuid {
        tracing::info!(id = %process_time.id, "creating application process time");
        registry.add_process_time(process_time)
    }

    pub fn find_all(registry: &Registry) -> Vec<&ApplicationProcessTime> {
        registry.process_times.iter().collect()
    }

    pub fn find_one(registry: &Registry, id: Uuid) -> Option<&ApplicationProcessTime> {
        registry.process_times.iter().find(|entry| entry.id == id)
    }
}
