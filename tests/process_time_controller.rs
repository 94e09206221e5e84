mod common;

use axum::extract::{Form, State};
use axum::http::StatusCode;
use common::seeded_registry;
use muni_masters::core::services::ApplicationProcessTimeService;
use muni_masters::storage::{JsonStorage, StorageBackend};
use muni_masters::web::process_time::{
    create, form_view, submit, ProcessTimeForm, SubmitOutcome, FORM_VIEW, SUCCESS_MESSAGE,
    SUCCESS_VIEW,
};
use muni_masters::web::AppState;
use tempfile::TempDir;

#[test]
fn form_view_always_carries_a_fresh_entity() {
    let registry = seeded_registry();

    let first = form_view(&registry);
    let second = form_view(&registry);

    assert_eq!(first.view, FORM_VIEW);
    assert!(first.application_process_time.connection_category.is_none());
    assert!(first.application_process_time.processing_time_days.is_none());
    assert!(!first.application_process_time.active);
    // A fresh entity every render, never a rebound one.
    assert_ne!(
        first.application_process_time.id,
        second.application_process_time.id
    );
}

#[test]
fn form_view_lists_active_categories_and_all_types() {
    let mut registry = seeded_registry();
    let mut disused =
        muni_masters::domain::ConnectionCategory::new("Agricultural", "AGR");
    disused.active = false;
    registry.add_connection_category(disused);

    let view = form_view(&registry);
    let category_names: Vec<&str> = view
        .connection_categories
        .iter()
        .map(|category| category.name.as_str())
        .collect();
    assert_eq!(category_names, vec!["Commercial", "Residential"]);
    assert_eq!(view.application_types.len(), 2);
}

#[test]
fn binding_error_redisplays_form_and_persists_nothing() {
    let mut registry = seeded_registry();
    let form = ProcessTimeForm {
        connection_category: "not-a-uuid".into(),
        application_type: String::new(),
        processing_time_days: "soon".into(),
        active: None,
    };

    let outcome = submit(&mut registry, form);
    match outcome {
        SubmitOutcome::Redisplay(view) => {
            assert_eq!(view.view, FORM_VIEW);
            assert_eq!(view.binding_errors.len(), 3);
        }
        SubmitOutcome::Created(_) => panic!("binding failure must not create a record"),
    }
    assert!(ApplicationProcessTimeService::find_all(&registry).is_empty());
}

#[test]
fn unknown_reference_is_a_binding_error() {
    let mut registry = seeded_registry();
    let kind = registry.application_types[0].id;
    let form = ProcessTimeForm {
        connection_category: uuid::Uuid::new_v4().to_string(),
        application_type: kind.to_string(),
        processing_time_days: "10".into(),
        active: None,
    };

    let outcome = submit(&mut registry, form);
    assert!(matches!(outcome, SubmitOutcome::Redisplay(_)));
    assert!(ApplicationProcessTimeService::find_all(&registry).is_empty());
}

#[test]
fn successful_submit_forces_active_and_flashes_entity() {
    let mut registry = seeded_registry();
    let category = registry.connection_categories[0].id;
    let kind = registry.application_types[0].id;
    let form = ProcessTimeForm {
        connection_category: category.to_string(),
        application_type: kind.to_string(),
        processing_time_days: "15".into(),
        // The client explicitly asked for an inactive record; the controller
        // overrides it.
        active: Some(false),
    };

    let outcome = submit(&mut registry, form);
    let view = match outcome {
        SubmitOutcome::Created(view) => view,
        SubmitOutcome::Redisplay(_) => panic!("expected a created record"),
    };
    assert_eq!(view.view, SUCCESS_VIEW);
    assert_eq!(view.message, SUCCESS_MESSAGE);
    assert!(view.application_process_time.active);
    assert_eq!(view.application_process_time.processing_time_days, Some(15));

    let stored = ApplicationProcessTimeService::find_all(&registry);
    assert_eq!(stored.len(), 1);
    assert!(stored[0].active);
}

#[tokio::test]
async fn create_handler_saves_the_registry_through_storage() {
    let temp = TempDir::new().expect("temp dir");
    let storage =
        JsonStorage::new(Some(temp.path().to_path_buf()), None).expect("json storage");
    let registry = seeded_registry();
    let category = registry.connection_categories[0].id;
    let kind = registry.application_types[0].id;
    let state = AppState::new(registry, storage.clone(), "masters");

    let form = ProcessTimeForm {
        connection_category: category.to_string(),
        application_type: kind.to_string(),
        processing_time_days: "15".into(),
        active: None,
    };
    let response = create(State(state), Form(form)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let persisted = storage.load("masters").expect("registry written to disk");
    assert_eq!(persisted.process_times.len(), 1);
    assert!(persisted.process_times[0].active);
}

#[test]
fn double_submit_creates_a_duplicate_record() {
    let mut registry = seeded_registry();
    let category = registry.connection_categories[0].id;
    let kind = registry.application_types[0].id;
    let form = ProcessTimeForm {
        connection_category: category.to_string(),
        application_type: kind.to_string(),
        processing_time_days: "15".into(),
        active: None,
    };

    assert!(matches!(
        submit(&mut registry, form.clone()),
        SubmitOutcome::Created(_)
    ));
    assert!(matches!(
        submit(&mut registry, form),
        SubmitOutcome::Created(_)
    ));
    assert_eq!(ApplicationProcessTimeService::find_all(&registry).len(), 2);
}
