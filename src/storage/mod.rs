pub mod json_backend;

use std::path::Path;

use crate::{domain::Registry, errors::MastersError};

pub type Result<T> = std::result::Result<T, MastersError>;

/// Abstraction over persistence backends capable of storing master-data
/// registries and snapshots.
pub trait StorageBackend: Send + Sync {
    fn save(&self, registry: &Registry, name: &str) -> Result<()>;
    fn load(&self, name: &str) -> Result<Registry>;
    fn list_backups(&self, name: &str) -> Result<Vec<String>>;
    fn backup(&self, registry: &Registry, name: &str, note: Option<&str>) -> Result<()>;
    fn restore(&self, name: &str, backup_name: &str) -> Result<Registry>;

    /// Ad-hoc file operations; default implementations bypass managed storage.
    fn save_to_path(&self, registry: &Registry, path: &Path) -> Result<()> {
        json_backend::save_registry_to_path(registry, path)
    }

    fn load_from_path(&self, path: &Path) -> Result<Registry> {
        json_backend::load_registry_from_path(path)
    }
}

pub use json_backend::JsonStorage;
