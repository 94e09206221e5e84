use chrono::{DateTime, NaiveDateTime, Utc};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    domain::Registry,
    errors::MastersError,
    utils::{app_data_dir, backups_dir_in, ensure_dir, registries_dir_in},
};

use super::{Result, StorageBackend};

const BACKUP_EXTENSION: &str = "json";
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M";
const TMP_SUFFIX: &str = "tmp";
const DEFAULT_RETENTION: usize = 5;

/// JSON-file registry store with timestamped backups under the app data dir.
#[derive(Clone)]
pub struct JsonStorage {
    root: PathBuf,
    registries_dir: PathBuf,
    backups_dir: PathBuf,
    retention: usize,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>, retention: Option<usize>) -> Result<Self> {
        let app_root = root.unwrap_or_else(app_data_dir);
        ensure_dir(&app_root)?;
        let registries_dir = registries_dir_in(&app_root);
        let backups_dir = backups_dir_in(&app_root);
        ensure_dir(&registries_dir)?;
        ensure_dir(&backups_dir)?;
        Ok(Self {
            root: app_root,
            registries_dir,
            backups_dir,
            retention: retention.unwrap_or(DEFAULT_RETENTION).max(1),
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None, None)
    }

    pub fn registry_path(&self, name: &str) -> PathBuf {
        self.registries_dir
            .join(format!("{}.json", canonical_name(name)))
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    fn backup_dir(&self, name: &str) -> PathBuf {
        self.backups_dir.join(canonical_name(name))
    }

    pub fn backup_path(&self, name: &str, backup_name: &str) -> PathBuf {
        self.backup_dir(name).join(backup_name)
    }

    fn write_backup_file(&self, registry: &Registry, name: &str, note: Option<&str>) -> Result<()> {
        let dir = self.backup_dir(name);
        ensure_dir(&dir)?;
        let timestamp = Utc::now().format(BACKUP_TIMESTAMP_FORMAT).to_string();
        let mut file_stem = format!("{}_{}", canonical_name(name), timestamp);
        if let Some(label) = sanitize_backup_note(note) {
            file_stem.push('_');
            file_stem.push_str(&label);
        }
        let path = dir.join(format!("{}.{}", file_stem, BACKUP_EXTENSION));
        let json = serde_json::to_string_pretty(registry)?;
        write_atomic(&path, &json)?;
        self.prune_backups(name)?;
        Ok(())
    }

    fn backup_existing_file(&self, name: &str, path: &Path) -> Result<()> {
        if !path.exists() {
            return Ok(());
        }
        let dir = self.backup_dir(name);
        ensure_dir(&dir)?;
        let timestamp = Utc::now().format(BACKUP_TIMESTAMP_FORMAT).to_string();
        let backup_name = format!("{}_{}.{}", canonical_name(name), timestamp, BACKUP_EXTENSION);
        fs::copy(path, dir.join(backup_name))?;
        self.prune_backups(name)?;
        Ok(())
    }

    fn prune_backups(&self, name: &str) -> Result<()> {
        let backups = self.list_backups(name)?;
        if backups.len() <= self.retention {
            return Ok(());
        }
        for entry in backups.iter().skip(self.retention) {
            let path = self.backup_path(name, entry);
            let _ = fs::remove_file(path);
        }
        Ok(())
    }
}

impl StorageBackend for JsonStorage {
    fn save(&self, registry: &Registry, name: &str) -> Result<()> {
        let path = self.registry_path(name);
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        if path.exists() {
            self.backup_existing_file(name, &path)?;
        }
        let json = serde_json::to_string_pretty(registry)?;
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        tracing::debug!(name, path = %path.display(), "registry saved");
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Registry> {
        load_registry_from_path(&self.registry_path(name))
    }

    fn list_backups(&self, name: &str) -> Result<Vec<String>> {
        let dir = self.backup_dir(name);
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(BACKUP_EXTENSION) {
                continue;
            }
            if let Some(file_name) = path.file_name().and_then(|stem| stem.to_str()) {
                entries.push(file_name.to_string());
            }
        }
        entries.sort_by(|a, b| parse_backup_timestamp(b).cmp(&parse_backup_timestamp(a)));
        Ok(entries)
    }

    fn backup(&self, registry: &Registry, name: &str, note: Option<&str>) -> Result<()> {
        self.write_backup_file(registry, name, note)
    }

    fn restore(&self, name: &str, backup_name: &str) -> Result<Registry> {
        let backup_path = self.backup_path(name, backup_name);
        if !backup_path.exists() {
            return Err(MastersError::Storage(format!(
                "backup `{}` not found",
                backup_name
            )));
        }
        let target = self.registry_path(name);
        fs::copy(&backup_path, &target)?;
        load_registry_from_path(&target)
    }
}

pub fn save_registry_to_path(registry: &Registry, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let json = serde_json::to_string_pretty(registry)?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

pub fn load_registry_from_path(path: &Path) -> Result<Registry> {
    let data = fs::read_to_string(path)?;
    let registry: Registry = serde_json::from_str(&data)?;
    Ok(registry)
}

fn canonical_name(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "registry".into()
    } else {
        sanitized
    }
}

fn sanitize_backup_note(note: Option<&str>) -> Option<String> {
    let raw = note?.trim();
    if raw.is_empty() {
        return None;
    }
    let mut sanitized = String::new();
    let mut last_dash = false;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            sanitized.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if ch.is_whitespace() || matches!(ch, '-' | '.') {
            if !sanitized.is_empty() && !last_dash {
                sanitized.push('-');
                last_dash = true;
            }
        }
    }
    let trimmed = sanitized.trim_matches('-').to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

fn parse_backup_timestamp(name: &str) -> Option<DateTime<Utc>> {
    let trimmed = name.strip_suffix(".json")?;
    // The timestamp pair may be followed by a note label, so scan for the
    // adjacent date/time segments instead of anchoring on the tail.
    let segments: Vec<&str> = trimmed.split('_').collect();
    segments.windows(2).find_map(|pair| {
        if !is_digits(pair[0], 8) || !is_digits(pair[1], 4) {
            return None;
        }
        let raw = format!("{}{}", pair[0], pair[1]);
        NaiveDateTime::parse_from_str(&raw, "%Y%m%d%H%M")
            .ok()
            .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
    })
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|c| c.is_ascii_digit())
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

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage_with_temp_dir() -> (JsonStorage, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let storage =
            JsonStorage::new(Some(temp.path().to_path_buf()), Some(3)).expect("json storage");
        (storage, temp)
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (storage, _guard) = storage_with_temp_dir();
        let registry = Registry::new("Sample");
        storage.save(&registry, "ward one").expect("save registry");
        let loaded = storage.load("ward one").expect("load registry");
        assert_eq!(loaded.name, "Sample");
    }

    #[test]
    fn noted_backups_sort_with_plain_ones_by_timestamp() {
        let (storage, _guard) = storage_with_temp_dir();
        let names = [
            "ward_20200102_0000.json",
            "ward_20200101_0000.json",
            "ward_20260831_0201_keep-me.json",
        ];
        for name in names {
            let path = storage.backup_path("ward", name);
            ensure_dir(path.parent().expect("backup dir")).expect("create backup dir");
            fs::write(&path, "{}").expect("plant backup file");
        }

        let backups = storage.list_backups("ward").expect("list backups");
        assert_eq!(
            backups,
            vec![
                "ward_20260831_0201_keep-me.json",
                "ward_20200102_0000.json",
                "ward_20200101_0000.json",
            ]
        );
    }

    #[test]
    fn backup_writes_timestamped_files() {
        let (storage, _guard) = storage_with_temp_dir();
        let registry = Registry::new("Sample");
        storage.save(&registry, "ward").expect("save registry");
        storage
            .backup(&registry, "ward", Some("quarterly"))
            .expect("create backup");
        let backups = storage.list_backups("ward").expect("list backups");
        assert!(
            !backups.is_empty(),
            "expected at least one backup file to be created"
        );
    }
}
