use muni_masters::config::{
    AppConfig, BUDGETGROUP_RANGE, COA_DETAILCODE_LENGTH, COA_MAJORCODE_LENGTH,
    COA_MINORCODE_LENGTH, EGF_MODULE,
};
use muni_masters::domain::{
    ApplicationType, ChartOfAccounts, ConnectionCategory, Registry,
};
use uuid::Uuid;

/// Registry seeded with the masters a form or validation flow needs.
pub fn seeded_registry() -> Registry {
    let mut registry = Registry::new("Masters");
    registry.add_connection_category(ConnectionCategory::new("Residential", "RES"));
    registry.add_connection_category(ConnectionCategory::new("Commercial", "COM"));
    registry.add_application_type(ApplicationType::new("New Connection", "NEWCONN"));
    registry.add_application_type(ApplicationType::new("Additional Connection", "ADDCONN"));
    registry
}

pub fn add_glcode(registry: &mut Registry, glcode: &str) -> Uuid {
    registry.add_chart_of_accounts(ChartOfAccounts::new(glcode, format!("GL {}", glcode)))
}

/// EGF configuration with two-char majors and four-char minors.
pub fn egf_config() -> AppConfig {
    let mut config = AppConfig::new();
    config.set(EGF_MODULE, COA_MAJORCODE_LENGTH, "2");
    config.set(EGF_MODULE, COA_MINORCODE_LENGTH, "4");
    config.set(EGF_MODULE, COA_DETAILCODE_LENGTH, "6");
    config.set(EGF_MODULE, BUDGETGROUP_RANGE, "minor");
    config
}
