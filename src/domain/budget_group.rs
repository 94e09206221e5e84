use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Identifiable, NamedEntity};

/// A named band of ledger codes used for budget allocation. The major code
/// and the min/max range bounds reference `ChartOfAccounts` rows by id.
///
/// Intended invariant, validated rather than encoded: the `[min, max]` glcode
/// ranges of distinct groups must not overlap, and a major code maps to at
/// most one group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetGroup {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub major_code: Option<Uuid>,
    pub min_code: Option<Uuid>,
    pub max_code: Option<Uuid>,
    #[serde(default)]
    pub active: bool,
}

impl BudgetGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: None,
            major_code: None,
            min_code: None,
            max_code: None,
            active: true,
        }
    }

    /// Links the group to a major chart-of-accounts code.
    pub fn with_major_code(mut self, major_code: Uuid) -> Self {
        self.major_code = Some(major_code);
        self
    }

    /// Sets the min/max chart-of-accounts range bounds.
    pub fn with_range(mut self, min_code: Uuid, max_code: Uuid) -> Self {
        self.min_code = Some(min_code);
        self.max_code = Some(max_code);
        self
    }
}

impl Identifiable for BudgetGroup {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for BudgetGroup {
    fn name(&self) -> &str {
        &self.name
    }
}
