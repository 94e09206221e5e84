use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Identifiable, NamedEntity};

/// The kind of connection application (new connection, change of use, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApplicationType {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub active: bool,
}

impl ApplicationType {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            code: code.into(),
            active: true,
        }
    }
}

impl Identifiable for ApplicationType {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for ApplicationType {
    fn name(&self) -> &str {
        &self.name
    }
}
