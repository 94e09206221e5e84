use crate::domain::common::sort_by_name;
use crate::domain::{ConnectionCategory, Registry};

pub struct ConnectionCategoryService;

impl ConnectionCategoryService {
    /// Active categories, ordered by name for form population.
    pub fn get_all_active(registry: &Registry) -> Vec<&ConnectionCategory> {
        let mut categories: Vec<&ConnectionCategory> = registry
            .connection_categories
            .iter()
            .filter(|category| category.active)
            .collect();
        sort_by_name(&mut categories);
        categories
    }

    pub fn find_all(registry: &Registry) -> Vec<&ConnectionCategory> {
        registry.connection_categories.iter().collect()
    }
}
