use std::sync::Arc;

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::services::{
    ApplicationProcessTimeService, ApplicationTypeService, ConnectionCategoryService,
};
use crate::domain::{ApplicationProcessTime, ApplicationType, ConnectionCategory, Registry};
use crate::storage::StorageBackend;

use super::AppState;

pub const FORM_VIEW: &str = "application-process-time-master";
pub const SUCCESS_VIEW: &str = "application-process-time-success";
pub const SUCCESS_MESSAGE: &str = "Application Process Time Master Data created successfully";

/// Raw form fields as submitted. References and numbers arrive as strings and
/// are bound during submit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProcessTimeForm {
    #[serde(default)]
    pub connection_category: String,
    #[serde(default)]
    pub application_type: String,
    #[serde(default)]
    pub processing_time_days: String,
    #[serde(default)]
    pub active: Option<bool>,
}

/// View model for the creation form. Always carries a fresh entity; any
/// previously bound entity is discarded.
#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    pub view: &'static str,
    pub application_process_time: ApplicationProcessTime,
    pub connection_categories: Vec<ConnectionCategory>,
    pub application_types: Vec<ApplicationType>,
    pub binding_errors: Vec<String>,
}

/// View model for a successful submission; the created entity doubles as the
/// flash attribute for the follow-up request.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessView {
    pub view: &'static str,
    pub message: &'static str,
    pub application_process_time: ApplicationProcessTime,
}

#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// Binding failed; the form view is shown again and nothing is persisted.
    Redisplay(FormView),
    Created(SuccessView),
}

/// Builds the form view: fresh entity, all active connection categories, all
/// application types. No filtering, no pagination.
pub fn form_view(registry: &Registry) -> FormView {
    FormView {
        view: FORM_VIEW,
        application_process_time: ApplicationProcessTime::default(),
        connection_categories: ConnectionCategoryService::get_all_active(registry)
            .into_iter()
            .cloned()
            .collect(),
        application_types: ApplicationTypeService::find_all(registry)
            .into_iter()
            .cloned()
            .collect(),
        binding_errors: Vec::new(),
    }
}

/// Handles a form submission: on binding failure the form view is redisplayed
/// unchanged, otherwise the record is persisted with `active` forced on.
pub fn submit(registry: &mut Registry, form: ProcessTimeForm) -> SubmitOutcome {
    let mut entity = match bind(registry, &form) {
        Ok(entity) => entity,
        Err(errors) => {
            tracing::debug!(count = errors.len(), "process time form binding failed");
            let mut view = form_view(registry);
            view.binding_errors = errors;
            return SubmitOutcome::Redisplay(view);
        }
    };
    entity.active = true;
    ApplicationProcessTimeService::create(registry, entity.clone());
    SubmitOutcome::Created(SuccessView {
        view: SUCCESS_VIEW,
        message: SUCCESS_MESSAGE,
        application_process_time: entity,
    })
}

/// Binds the raw form fields to an entity, collecting every binding error.
fn bind(registry: &Registry, form: &ProcessTimeForm) -> Result<ApplicationProcessTime, Vec<String>> {
    let mut errors = Vec::new();

    let category = match bind_reference(&form.connection_category, "connection category") {
        Ok(id) => {
            if registry.connection_category(id).is_none() {
                errors.push(format!("Unknown connection category `{}`", id));
                None
            } else {
                Some(id)
            }
        }
        Err(message) => {
            errors.push(message);
            None
        }
    };

    let kind = match bind_reference(&form.application_type, "application type") {
        Ok(id) => {
            if registry.application_type(id).is_none() {
                errors.push(format!("Unknown application type `{}`", id));
                None
            } else {
                Some(id)
            }
        }
        Err(message) => {
            errors.push(message);
            None
        }
    };

    let days = match form.processing_time_days.trim().parse::<u32>() {
        Ok(days) => Some(days),
        Err(_) => {
            errors.push(format!(
                "Processing time `{}` is not a number of days",
                form.processing_time_days
            ));
            None
        }
    };

    match (category, kind, days) {
        (Some(category), Some(kind), Some(days)) if errors.is_empty() => {
            let mut entity = ApplicationProcessTime::new(category, kind, days);
            entity.active = form.active.unwrap_or(false);
            Ok(entity)
        }
        _ => Err(errors),
    }
}

fn bind_reference(raw: &str, field: &str) -> Result<Uuid, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("A {} is required", field));
    }
    trimmed
        .parse::<Uuid>()
        .map_err(|_| format!("`{}` is not a valid {} reference", trimmed, field))
}

impl IntoResponse for SubmitOutcome {
    fn into_response(self) -> Response {
        match self {
            Self::Redisplay(view) => Json(view).into_response(),
            Self::Created(view) => Json(view).into_response(),
        }
    }
}

/// GET handler: renders the creation form.
pub async fn view_form(State(state): State<AppState>) -> Json<FormView> {
    let registry = state.registry.read().await;
    Json(form_view(&registry))
}

/// POST handler: binds the form, persists on success, and returns either the
/// redisplayed form or the success view. The file write runs on the blocking
/// pool with the registry lock already released.
pub async fn create(State(state): State<AppState>, Form(form): Form<ProcessTimeForm>) -> Response {
    let (outcome, snapshot) = {
        let mut registry = state.registry.write().await;
        let outcome = submit(&mut registry, form);
        let snapshot = matches!(outcome, SubmitOutcome::Created(_)).then(|| registry.clone());
        (outcome, snapshot)
    };
    if let Some(snapshot) = snapshot {
        let storage = Arc::clone(&state.storage);
        let name = state.registry_name.clone();
        let saved = tokio::task::spawn_blocking(move || storage.save(&snapshot, &name)).await;
        match saved {
            Ok(Ok(())) => {}
            Ok(Err(err)) => {
                tracing::error!(error = %err, "failed to persist registry");
                return (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response();
            }
            Err(err) => {
                tracing::error!(error = %err, "registry persistence task failed");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        }
    }
    outcome.into_response()
}
