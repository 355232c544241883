use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::auth::AuthUser;
use shared_models::error::AppError;

use crate::models::{BookingOutcome, CreateBookingRequest, PaymentConfirmation};
use crate::services::booking::BookingService;

#[derive(Debug, Deserialize)]
pub struct BookingQuery {
    #[serde(rename = "patientEmail")]
    pub patient_email: Option<String>,
}

#[axum::debug_handler]
pub async fn create_booking(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<Json<Value>, AppError> {
    let booking_service = BookingService::new(&state);

    let outcome = booking_service
        .create_booking(request)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    match outcome {
        BookingOutcome::Created { inserted_id, .. } => Ok(Json(json!({
            "success": true,
            "insertedId": inserted_id,
        }))),
        BookingOutcome::Duplicate { existing } => Ok(Json(json!({
            "success": false,
            "booking": existing,
        }))),
    }
}

#[axum::debug_handler]
pub async fn get_bookings(
    State(state): State<Arc<AppConfig>>,
    Query(query): Query<BookingQuery>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Value>, AppError> {
    let patient_email = query
        .patient_email
        .ok_or_else(|| AppError::BadRequest("Missing patientEmail query parameter".to_string()))?;

    if patient_email != user.email {
        return Err(AppError::Forbidden("Forbidden access".to_string()));
    }

    let booking_service = BookingService::new(&state);

    let bookings = booking_service
        .list_bookings(&patient_email)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(json!(bookings)))
}

#[axum::debug_handler]
pub async fn get_booking(
    State(state): State<Arc<AppConfig>>,
    Path(booking_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let booking_service = BookingService::new(&state);

    let booking = booking_service
        .get_booking(&booking_id)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

    Ok(Json(booking))
}

#[axum::debug_handler]
pub async fn pay_booking(
    State(state): State<Arc<AppConfig>>,
    Path(booking_id): Path<String>,
    Json(confirmation): Json<PaymentConfirmation>,
) -> Result<Json<Value>, AppError> {
    let booking_service = BookingService::new(&state);

    let updated = booking_service
        .confirm_payment(&booking_id, confirmation)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

    Ok(Json(updated))
}
