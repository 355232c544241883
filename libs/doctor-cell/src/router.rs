use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};

use shared_config::AppConfig;
use shared_utils::extractor::{admin_middleware, auth_middleware};

use crate::handlers;

pub fn doctor_routes(state: Arc<AppConfig>) -> Router {
    // The whole roster is back-office: every route sits behind both gates
    Router::new()
        .route("/doctor", get(handlers::list_doctors))
        .route("/doctor", post(handlers::add_doctor))
        .route("/doctor/{email}", delete(handlers::delete_doctor))
        .layer(middleware::from_fn_with_state(state.clone(), admin_middleware))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
        .with_state(state)
}
