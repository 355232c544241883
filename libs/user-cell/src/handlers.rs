use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::services::user::UserService;

#[axum::debug_handler]
pub async fn upsert_user(
    State(state): State<Arc<AppConfig>>,
    Path(email): Path<String>,
    Json(profile): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let user_service = UserService::new(&state);

    let (result, token) = user_service
        .upsert_user(&email, profile)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(json!({
        "result": result,
        "token": token,
    })))
}

#[axum::debug_handler]
pub async fn list_users(State(state): State<Arc<AppConfig>>) -> Result<Json<Value>, AppError> {
    let user_service = UserService::new(&state);

    let users = user_service
        .list_users()
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(json!(users)))
}

#[axum::debug_handler]
pub async fn check_admin(
    State(state): State<Arc<AppConfig>>,
    Path(email): Path<String>,
) -> Result<Json<Value>, AppError> {
    let user_service = UserService::new(&state);

    let admin = user_service
        .is_admin(&email)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(json!({ "admin": admin })))
}

#[axum::debug_handler]
pub async fn grant_admin(
    State(state): State<Arc<AppConfig>>,
    Path(email): Path<String>,
) -> Result<Json<Value>, AppError> {
    let user_service = UserService::new(&state);

    let result = user_service
        .grant_admin(&email)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(json!(result)))
}
