use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Payment gateway is not configured")]
    NotConfigured,

    #[error("Payment gateway request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Payment gateway error: {message}")]
    Gateway { message: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePaymentIntentRequest {
    pub price: f64,
}

/// The slice of the gateway's payment intent object this backend reads.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
    pub amount: i64,
}
