pub mod application_type_service;
pub mod budgeting_group_service;
pub mod connection_category_service;
pub mod process_time_service;

pub use application_type_service::ApplicationTypeService;
pub use budgeting_group_service::{BudgetGroupViolation, BudgetingGroupService};
pub use connection_category_service::ConnectionCategoryService;
pub use process_time_service::ApplicationProcessTimeService;

use crate::errors::MastersError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Masters(#[from] MastersError),
    #[error("{0} not found")]
    NotFound(String),
    #[error("{0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests;
