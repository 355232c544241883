use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, put},
    Router,
};

use shared_config::AppConfig;
use shared_utils::extractor::{admin_middleware, auth_middleware};

use crate::handlers;

pub fn user_routes(state: Arc<AppConfig>) -> Router {
    // Sign-in flow: the profile upsert issues the caller's first token, and
    // the admin probe backs the dashboard's role switch
    let public_routes = Router::new()
        .route("/admin/{email}", get(handlers::check_admin))
        .route("/user/{email}", put(handlers::upsert_user));

    let protected_routes = Router::new()
        .route("/user", get(handlers::list_users))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    let admin_routes = Router::new()
        .route("/user/admin/{email}", put(handlers::grant_admin))
        .layer(middleware::from_fn_with_state(state.clone(), admin_middleware))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .merge(admin_routes)
        .with_state(state)
}
