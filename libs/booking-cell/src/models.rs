use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub treatment: String,
    pub date: String,
    pub slot: String,
    pub patient_name: String,
    pub patient_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub paid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub treatment: String,
    pub date: String,
    pub slot: String,
    pub patient_name: String,
    pub patient_email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Result of a booking attempt. A duplicate is a conflict report carrying
/// the record that already holds the slot, not an error.
#[derive(Debug)]
pub enum BookingOutcome {
    Created { inserted_id: String, booking: Booking },
    Duplicate { existing: Value },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentConfirmation {
    pub transaction_id: String,
    #[serde(default)]
    pub amount: Option<f64>,
}
