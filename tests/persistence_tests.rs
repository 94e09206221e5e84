mod common;

use common::{add_glcode, seeded_registry};
use muni_masters::domain::BudgetGroup;
use muni_masters::storage::{JsonStorage, StorageBackend};
use tempfile::TempDir;

fn storage_in(temp: &TempDir) -> JsonStorage {
    JsonStorage::new(Some(temp.path().to_path_buf()), Some(2)).expect("json storage")
}

#[test]
fn registry_roundtrip_preserves_masters() {
    let temp = TempDir::new().expect("temp dir");
    let storage = storage_in(&temp);

    let mut registry = seeded_registry();
    let major = add_glcode(&mut registry, "21");
    registry.add_budget_group(BudgetGroup::new("Salaries").with_major_code(major));

    storage.save(&registry, "masters").expect("save");
    let loaded = storage.load("masters").expect("load");

    assert_eq!(loaded.connection_categories.len(), 2);
    assert_eq!(loaded.application_types.len(), 2);
    assert_eq!(loaded.budget_groups.len(), 1);
    assert_eq!(loaded.budget_groups[0].major_code, Some(major));
}

#[test]
fn resaving_backs_up_the_previous_file() {
    let temp = TempDir::new().expect("temp dir");
    let storage = storage_in(&temp);

    let registry = seeded_registry();
    storage.save(&registry, "masters").expect("first save");
    storage.save(&registry, "masters").expect("second save");

    let backups = storage.list_backups("masters").expect("list backups");
    assert!(!backups.is_empty(), "second save must back up the first file");
}

#[test]
fn pruning_drops_the_oldest_backups_beyond_retention() {
    let temp = TempDir::new().expect("temp dir");
    // Retention of 2: the pair of aged snapshots already fills the cap.
    let storage = storage_in(&temp);

    let aged = ["masters_20200102_0000.json", "masters_20200101_0000.json"];
    for name in aged {
        let path = storage.backup_path("masters", name);
        std::fs::create_dir_all(path.parent().expect("backup dir")).expect("create backup dir");
        std::fs::write(&path, "{}").expect("plant backup file");
    }

    let registry = seeded_registry();
    storage
        .backup(&registry, "masters", Some("keep me"))
        .expect("create backup");

    let backups = storage.list_backups("masters").expect("list backups");
    assert_eq!(backups.len(), 2);
    assert!(
        backups[0].contains("keep-me"),
        "the freshly created backup must survive pruning, got {:?}",
        backups
    );
    assert_eq!(backups[1], "masters_20200102_0000.json");
}

#[test]
fn restore_rejects_unknown_backup() {
    let temp = TempDir::new().expect("temp dir");
    let storage = storage_in(&temp);

    let err = storage.restore("masters", "masters_20990101_0000.json");
    assert!(err.is_err());
}

#[test]
fn backup_and_restore_recovers_earlier_state() {
    let temp = TempDir::new().expect("temp dir");
    let storage = storage_in(&temp);

    let mut registry = seeded_registry();
    storage.save(&registry, "masters").expect("save");
    storage
        .backup(&registry, "masters", Some("before edit"))
        .expect("backup");

    registry.add_budget_group(BudgetGroup::new("Late Addition"));
    storage.save(&registry, "masters").expect("resave");

    let backups = storage.list_backups("masters").expect("list");
    let noted = backups
        .iter()
        .find(|name| name.contains("before-edit"))
        .expect("noted backup present");
    let restored = storage.restore("masters", noted).expect("restore");
    assert!(restored.budget_groups.is_empty());
}
