#![doc(test(attr(deny(warnings))))]

//! Muni Masters offers budget-group accounting and water-connection master
//! data primitives for municipal e-governance workflows.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;
pub mod web;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Muni Masters tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
