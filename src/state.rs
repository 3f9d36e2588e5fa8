//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds no per-user data: every selection (office, school, month, meal)
//! travels in the request's query string, so the state is just the NEIS
//! fetcher plus startup configuration.

use std::sync::Arc;

use crate::neis::NeisApi;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub neis: Arc<dyn NeisApi>,
    /// Office code preselected when a request names none.
    pub default_office: Arc<str>,
}

impl AppState {
    #[must_use]
    pub fn new(neis: Arc<dyn NeisApi>, default_office: &str) -> Self {
        Self { neis, default_office: Arc::from(default_office) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
