use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};

use shared_config::AppConfig;
use shared_utils::extractor::auth_middleware;

use crate::handlers;

pub fn booking_routes(state: Arc<AppConfig>) -> Router {
    // Booking creation is open: patients book before they ever sign in
    let public_routes = Router::new().route("/booking", post(handlers::create_booking));

    let protected_routes = Router::new()
        .route("/booking", get(handlers::get_bookings))
        .route("/booking/{booking_id}", get(handlers::get_booking))
        .route("/booking/{booking_id}", patch(handlers::pay_booking))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
}
