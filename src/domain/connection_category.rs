use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Identifiable, NamedEntity};

/// A category of water connection (residential, commercial, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConnectionCategory {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub active: bool,
}

impl ConnectionCategory {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            code: code.into(),
            active: true,
        }
    }
}

impl Identifiable for ConnectionCategory {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for ConnectionCategory {
    fn name(&self) -> &str {
        &self.name
    }
}
