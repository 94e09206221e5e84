//! Masters web server entry point: initializes tracing, loads the registry
//! from managed storage, and serves the masters routes.

use std::net::SocketAddr;

use muni_masters::{
    domain::Registry,
    storage::{JsonStorage, StorageBackend},
    web::{router, AppState},
};

const REGISTRY_NAME: &str = "masters";

#[tokio::main]
async fn main() {
    muni_masters::init();

    let storage = match JsonStorage::new_default() {
        Ok(storage) => storage,
        Err(err) => {
            tracing::error!(error = %err, "failed to open storage");
            std::process::exit(1);
        }
    };
    let registry = match storage.load(REGISTRY_NAME) {
        Ok(registry) => registry,
        Err(_) => {
            tracing::info!("no stored registry, starting empty");
            Registry::new("Masters")
        }
    };

    let state = AppState::new(registry, storage, REGISTRY_NAME);
    let app = router(state);

    let port = std::env::var("MUNI_MASTERS_PORT")
        .ok()
        .and_then(|raw| raw.parse::<u16>().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    tracing::info!(%addr, "listening");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(error = %err, "failed to bind address");
            std::process::exit(1);
        }
    };
    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!(error = %err, "server exited with error");
        std::process::exit(1);
    }
}
