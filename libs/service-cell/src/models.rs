use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A treatment from the static service catalog. Slots are the full set of
/// bookable time labels for any given day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub name: String,
    pub price: f64,
    pub slots: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
}

/// The projection of a booking the availability calculation needs. Other
/// booking fields are ignored on deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct BookedSlot {
    pub treatment: String,
    pub slot: String,
}
