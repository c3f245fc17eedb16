#![doc(test(attr(deny(warnings))))]

//! Safar Core implements the engine behind the agency back office's
//! multi-step transaction entry wizard: draft storage, step resolution,
//! step-scoped validation, navigation, and submission payload assembly.

pub mod catalog;
pub mod config;
pub mod draft;
pub mod errors;
pub mod utils;
pub mod wizard;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Safar Core tracing initialized.");
    });
}
