use anyhow::Result;
use chrono::Utc;
use serde_json::json;
use tracing::debug;

use shared_config::AppConfig;
use shared_database::atlas::AtlasClient;

const PAYMENTS: &str = "payments";

pub struct PaymentService {
    store: AtlasClient,
}

impl PaymentService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: AtlasClient::new(config),
        }
    }

    /// Append one record to the payment ledger.
    pub async fn record_payment(
        &self,
        booking_id: &str,
        transaction_id: &str,
        amount: Option<f64>,
    ) -> Result<String> {
        debug!(
            "Recording payment {} for booking {}",
            transaction_id, booking_id
        );

        let payment = json!({
            "bookingId": booking_id,
            "transactionId": transaction_id,
            "amount": amount,
            "createdAt": Utc::now().to_rfc3339(),
        });

        self.store.insert_one(PAYMENTS, payment).await
    }
}
