use reqwest::Client;
use tracing::{debug, error, info};

use shared_config::AppConfig;

use crate::models::{PaymentError, PaymentIntent};

/// Stripe API client, limited to payment intent creation. Amounts are in
/// minor units; the currency is fixed.
pub struct StripeClient {
    client: Client,
    secret_key: String,
    base_url: String,
}

const CURRENCY: &str = "usd";

impl StripeClient {
    pub fn new(config: &AppConfig) -> Result<Self, PaymentError> {
        if !config.is_payments_configured() {
            return Err(PaymentError::NotConfigured);
        }

        Ok(Self {
            client: Client::new(),
            secret_key: config.stripe_secret_key.clone(),
            base_url: config.stripe_api_url.clone(),
        })
    }

    /// Create a payment intent and hand back the gateway's response. The
    /// caller completes the payment externally with the client secret.
    /// POST /v1/payment_intents
    pub async fn create_payment_intent(&self, amount: i64) -> Result<PaymentIntent, PaymentError> {
        info!("Creating payment intent for {} {}", amount, CURRENCY);

        let url = format!("{}/v1/payment_intents", self.base_url);

        let amount_value = amount.to_string();
        let params = [
            ("amount", amount_value.as_str()),
            ("currency", CURRENCY),
            ("payment_method_types[]", "card"),
        ];

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.secret_key))
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        debug!("Payment intent response: {}", status);

        if !status.is_success() {
            error!("Payment intent creation failed: {} - {}", status, response_text);
            return Err(PaymentError::Gateway {
                message: format!("HTTP {}: {}", status, response_text),
            });
        }

        let intent: PaymentIntent =
            serde_json::from_str(&response_text).map_err(|e| PaymentError::Gateway {
                message: format!("Failed to parse payment intent response: {}", e),
            })?;

        info!("Payment intent created: {}", intent.id);
        Ok(intent)
    }
}
