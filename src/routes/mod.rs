//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/` serves the full server-rendered page (search form + calendar). The
//! `/api` routes expose the same lookups as JSON and as a bare calendar
//! fragment for embedding.

pub mod api;
pub mod page;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes: Router<AppState> = Router::new()
        .route("/api/schools", get(api::schools))
        .route("/api/calendar", get(api::calendar))
        .layer(cors);

    Router::new()
        .route("/", get(page::index))
        .route("/healthz", get(healthz))
        .merge(api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
