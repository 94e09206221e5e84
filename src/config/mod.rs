use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{errors::MastersError, utils::ensure_dir};

const CONFIG_FILE: &str = "app_config.json";
const TMP_SUFFIX: &str = "tmp";

/// Module name for financial (budgeting) configuration values.
pub const EGF_MODULE: &str = "EGF";

/// Chart-of-accounts segment length keys.
pub const COA_MAJORCODE_LENGTH: &str = "coa_majorcode_length";
pub const COA_MINORCODE_LENGTH: &str = "coa_minorcode_length";
pub const COA_DETAILCODE_LENGTH: &str = "coa_detailcode_length";

/// Selects which segment length bounds a budget group range (`minor` or not).
pub const BUDGETGROUP_RANGE: &str = "budgetgroup_range";

/// One externally managed configuration value, keyed by module and key.
/// A (module, key) pair may carry several values; lookups preserve order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfigValue {
    pub module: String,
    pub key: String,
    pub value: String,
}

/// In-memory view of the configuration store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub values: Vec<AppConfigValue>,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value for `(module, key)`.
    pub fn set(&mut self, module: impl Into<String>, key: impl Into<String>, value: impl Into<String>) {
        self.values.push(AppConfigValue {
            module: module.into(),
            key: key.into(),
            value: value.into(),
        });
    }

    /// All values for `(module, key)`, in insertion order.
    pub fn values_for(&self, module: &str, key: &str) -> Vec<&str> {
        self.values
            .iter()
            .filter(|entry| entry.module == module && entry.key == key)
            .map(|entry| entry.value.as_str())
            .collect()
    }

    /// First value for `(module, key)`, or `None` when the pair is unset.
    pub fn first_value(&self, module: &str, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|entry| entry.module == module && entry.key == key)
            .map(|entry| entry.value.as_str())
    }

    /// First value for `(module, key)` as a required setting.
    pub fn require(&self, module: &str, key: &str) -> Result<&str, MastersError> {
        self.first_value(module, key)
            .ok_or_else(|| MastersError::MissingConfig {
                module: module.into(),
                key: key.into(),
            })
    }
}

/// File-backed persistence for [`AppConfig`].
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(base: PathBuf) -> Result<Self, MastersError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    /// Loads the stored configuration, or an empty one when no file exists.
    pub fn load(&self) -> Result<AppConfig, MastersError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(AppConfig::default())
        }
    }

    pub fn save(&self, config: &AppConfig) -> Result<(), MastersError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), MastersError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
