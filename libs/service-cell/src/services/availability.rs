use std::collections::HashSet;

use anyhow::Result;
use serde_json::json;
use tracing::debug;

use shared_config::AppConfig;
use shared_database::atlas::AtlasClient;

use crate::models::{BookedSlot, Service};

pub struct AvailabilityService {
    store: AtlasClient,
}

impl AvailabilityService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: AtlasClient::new(config),
        }
    }

    /// The catalog with each service reduced to its open slots for the
    /// given day. Dates are the free-form labels bookings are stored with.
    pub async fn services_with_open_slots(&self, date: &str) -> Result<Vec<Service>> {
        debug!("Calculating open slots for {}", date);

        let services: Vec<Service> = self
            .store
            .find("services", json!({}))
            .await?
            .into_iter()
            .map(serde_json::from_value)
            .collect::<std::result::Result<Vec<Service>, _>>()?;

        let bookings: Vec<BookedSlot> = self
            .store
            .find("bookings", json!({ "date": date }))
            .await?
            .into_iter()
            .map(serde_json::from_value)
            .collect::<std::result::Result<Vec<BookedSlot>, _>>()?;

        Ok(subtract_booked_slots(services, &bookings))
    }
}

/// Remove each service's already-booked slots for the day. `bookings` must
/// already be filtered to the date in question; slot order of the catalog is
/// preserved. A service with no matching bookings comes back unchanged.
pub fn subtract_booked_slots(mut services: Vec<Service>, bookings: &[BookedSlot]) -> Vec<Service> {
    for service in services.iter_mut() {
        let booked: HashSet<&str> = bookings
            .iter()
            .filter(|booking| booking.treatment == service.name)
            .map(|booking| booking.slot.as_str())
            .collect();

        if booked.is_empty() {
            continue;
        }

        service
            .slots
            .retain(|slot| !booked.contains(slot.as_str()));
    }

    services
}
