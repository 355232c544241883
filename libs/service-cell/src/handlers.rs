use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::services::availability::AvailabilityService;
use crate::services::catalog::CatalogService;

#[derive(Debug, Deserialize)]
pub struct AvailableQuery {
    pub date: Option<String>,
}

#[axum::debug_handler]
pub async fn get_services(State(state): State<Arc<AppConfig>>) -> Result<Json<Value>, AppError> {
    let catalog_service = CatalogService::new(&state);

    let services = catalog_service
        .list_services()
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(json!(services)))
}

#[axum::debug_handler]
pub async fn get_available(
    State(state): State<Arc<AppConfig>>,
    Query(query): Query<AvailableQuery>,
) -> Result<Json<Value>, AppError> {
    let date = query
        .date
        .ok_or_else(|| AppError::BadRequest("Missing date query parameter".to_string()))?;

    let availability_service = AvailabilityService::new(&state);

    let services = availability_service
        .services_with_open_slots(&date)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(json!(services)))
}
