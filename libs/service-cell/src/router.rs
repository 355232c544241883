use std::sync::Arc;

use axum::{routing::get, Router};

use shared_config::AppConfig;

use crate::handlers;

pub fn service_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/service", get(handlers::get_services))
        .route("/available", get(handlers::get_available))
        .with_state(state)
}
