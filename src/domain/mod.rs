pub mod application_type;
pub mod budget_group;
pub mod chart_of_accounts;
pub mod common;
pub mod connection_category;
pub mod process_time;
pub mod registry;

pub use application_type::ApplicationType;
pub use budget_group::BudgetGroup;
pub use chart_of_accounts::ChartOfAccounts;
pub use connection_category::ConnectionCategory;
pub use process_time::ApplicationProcessTime;
pub use registry::Registry;
