use crate::core::services::{
    ApplicationProcessTimeService, ApplicationTypeService, ConnectionCategoryService,
};
use crate::domain::{ApplicationProcessTime, ApplicationType, ConnectionCategory, Registry};

#[test]
fn active_categories_are_filtered_and_ordered() {
    let mut registry = Registry::new("Test");
    registry.add_connection_category(ConnectionCategory::new("Residential", "RES"));
    let mut disused = ConnectionCategory::new("Agricultural", "AGR");
    disused.active = false;
    registry.add_connection_category(disused);
    registry.add_connection_category(ConnectionCategory::new("Commercial", "COM"));

    let names: Vec<&str> = ConnectionCategoryService::get_all_active(&registry)
        .iter()
        .map(|category| category.name.as_str())
        .collect();
    assert_eq!(names, vec!["Commercial", "Residential"]);
}

#[test]
fn application_types_list_includes_inactive_rows() {
    let mut registry = Registry::new("Test");
    registry.add_application_type(ApplicationType::new("New Connection", "NEWCONN"));
    let mut retired = ApplicationType::new("Change Of Use", "CHGUSE");
    retired.active = false;
    registry.add_application_type(retired);

    let names: Vec<&str> = ApplicationTypeService::find_all(&registry)
        .iter()
        .map(|kind| kind.name.as_str())
        .collect();
    assert_eq!(names, vec!["Change Of Use", "New Connection"]);
}

#[test]
fn process_time_create_appends_record() {
    let mut registry = Registry::new("Test");
    let category = registry.add_connection_category(ConnectionCategory::new("Residential", "RES"));
    let kind = registry.add_application_type(ApplicationType::new("New Connection", "NEWCONN"));

    let id = ApplicationProcessTimeService::create(
        &mut registry,
        ApplicationProcessTime::new(category, kind, 15),
    );

    assert_eq!(ApplicationProcessTimeService::find_all(&registry).len(), 1);
    let stored = ApplicationProcessTimeService::find_one(&registry, id).unwrap();
    assert_eq!(stored.processing_time_days, Some(15));
    assert!(stored.active);
}
