use crate::domain::common::sort_by_name;
use crate::domain::{ApplicationType, Registry};

pub struct ApplicationTypeService;

impl ApplicationTypeService {
    /// Every application type, active or not, ordered by name.
    pub fn find_all(registry: &Registry) -> Vec<&ApplicationType> {
        let mut kinds: Vec<&ApplicationType> = registry.application_types.iter().collect();
        sort_by_name(&mut kinds);
        kinds
    }
}
