//! HTTP surface for the masters workflows. Handlers stay thin: controller
//! semantics live in framework-free functions so they can be exercised
//! without a running server.

pub mod process_time;

use std::sync::Arc;

use axum::{
    routing::get,
    Router,
};
use tokio::sync::RwLock;

use crate::{domain::Registry, storage::JsonStorage};

/// Shared application state for the web handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<RwLock<Registry>>,
    pub storage: Arc<JsonStorage>,
    pub registry_name: String,
}

impl AppState {
    pub fn new(registry: Registry, storage: JsonStorage, registry_name: impl Into<String>) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
            storage: Arc::new(storage),
            registry_name: registry_name.into(),
        }
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route(
            "/masters/applicationProcessTime",
            get(process_time::view_form).post(process_time::create),
        )
        .with_state(state)
}

async fn root_handler() -> &'static str {
    "Muni Masters"
}
