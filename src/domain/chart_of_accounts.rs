use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Identifiable, NamedEntity};

/// A general-ledger code row. The glcode's prefix length determines its
/// hierarchy level (major/minor/detail); segment lengths come from runtime
/// configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartOfAccounts {
    pub id: Uuid,
    pub glcode: String,
    pub name: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl ChartOfAccounts {
    pub fn new(glcode: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            glcode: glcode.into(),
            name: name.into(),
            active: true,
        }
    }

    /// Leading segment of the glcode, or `None` when the code is shorter than
    /// `len` or `len` splits a char boundary.
    pub fn glcode_prefix(&self, len: usize) -> Option<&str> {
        self.glcode.get(..len)
    }

    /// Byte length of the glcode, the same unit `glcode_prefix` slices by.
    /// Glcodes are ASCII digit strings, so bytes and characters coincide in
    /// practice.
    pub fn glcode_len(&self) -> usize {
        self.glcode.len()
    }
}


impl Identifiable for ChartOfAccounts {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for ChartOfAccounts {
    fn name(&self) -> &str {
        &self.name
    }
}
