use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    application_type::ApplicationType, budget_group::BudgetGroup,
    chart_of_accounts::ChartOfAccounts, connection_category::ConnectionCategory,
    process_time::ApplicationProcessTime,
};

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// Aggregate owning every master-data collection. The registry is the unit of
/// persistence; services operate on borrowed registries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registry {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub chart_of_accounts: Vec<ChartOfAccounts>,
    #[serde(default)]
    pub budget_groups: Vec<BudgetGroup>,
    #[serde(default)]
    pub connection_categories: Vec<ConnectionCategory>,
    #[serde(default)]
    pub application_types: Vec<ApplicationType>,
    #[serde(default)]
    pub process_times: Vec<ApplicationProcessTime>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Registry::schema_version_default")]
    pub schema_version: u8,
}

impl Registry {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            chart_of_accounts: Vec::new(),
            budget_groups: Vec::new(),
            connection_categories: Vec::new(),
            application_types: Vec::new(),
            process_times: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    pub fn add_chart_of_accounts(&mut self, code: ChartOfAccounts) -> Uuid {
        let id = code.id;
        self.chart_of_accounts.push(code);
        self.touch();
        id
    }

    pub fn add_budget_group(&mut self, group: BudgetGroup) -> Uuid {
        let id = group.id;
        self.budget_groups.push(group);
        self.touch();
        id
    }

    pub fn add_connection_category(&mut self, category: ConnectionCategory) -> Uuid {
        let id = category.id;
        self.connection_categories.push(category);
        self.touch();
        id
    }

    pub fn add_application_type(&mut self, kind: ApplicationType) -> Uuid {
        let id = kind.id;
        self.application_types.push(kind);
        self.touch();
        id
    }

    pub fn add_process_time(&mut self, process_time: ApplicationProcessTime) -> Uuid {
        let id = process_time.id;
        self.process_times.push(process_time);
        self.touch();
        id
    }

    pub fn chart_of_accounts(&self, id: Uuid) -> Option<&ChartOfAccounts> {
        self.chart_of_accounts.iter().find(|code| code.id == id)
    }

    pub fn budget_group(&self, id: Uuid) -> Option<&BudgetGroup> {
        self.budget_groups.iter().find(|group| group.id == id)
    }

    pub fn budget_group_mut(&mut self, id: Uuid) -> Option<&mut BudgetGroup> {
        self.budget_groups.iter_mut().find(|group| group.id == id)
    }

    pub fn connection_category(&self, id: Uuid) -> Option<&ConnectionCategory> {
        self.connection_categories
            .iter()
            .find(|category| category.id == id)
    }

    pub fn application_type(&self, id: Uuid) -> Option<&ApplicationType> {
        self.application_types.iter().find(|kind| kind.id == id)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}
