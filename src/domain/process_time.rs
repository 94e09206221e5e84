use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::Identifiable;

/// Master-data record for the configurable processing time of a water
/// connection application, keyed by connection category and application type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApplicationProcessTime {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub connection_category: Option<Uuid>,
    pub application_type: Option<Uuid>,
    pub processing_time_days: Option<u32>,
    #[serde(default)]
    pub active: bool,
}

impl ApplicationProcessTime {
    pub fn new(connection_category: Uuid, application_type: Uuid, processing_time_days: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            connection_category: Some(connection_category),
            application_type: Some(application_type),
            processing_time_days: Some(processing_time_days),
            active: true,
        }
    }
}

impl Default for ApplicationProcessTime {
    /// A fresh, unsaved form entity: no references, inactive.
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            connection_category: None,
            application_type: None,
            processing_time_days: None,
            active: false,
        }
    }
}

impl Identifiable for ApplicationProcessTime {
    fn id(&self) -> Uuid {
        self.id
    }
}
