use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::fetcher::SearchBackend;
use crate::query::QueryLimits;

pub mod handlers;
pub mod models;

/// Everything a request needs: the backend handle and the normalizer caps.
/// Cloned per request; all of it is immutable.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn SearchBackend>,
    pub limits: QueryLimits,
}

pub fn create_router(state: AppState) -> Router {
    // CORS configuration: the presentation layer lives on another origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/search", get(handlers::search_handler))
        .with_state(state)
        .layer(cors)
}
