use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store_data_api_url: String,
    pub store_data_api_key: String,
    pub store_data_source: String,
    pub store_database: String,
    pub access_token_secret: String,
    pub stripe_secret_key: String,
    pub stripe_api_url: String,
    pub mail_api_url: String,
    pub mail_api_key: String,
    pub mail_sender: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            store_data_api_url: env::var("STORE_DATA_API_URL")
                .unwrap_or_else(|_| {
                    warn!("STORE_DATA_API_URL not set, using empty value");
                    String::new()
                }),
            store_data_api_key: env::var("STORE_DATA_API_KEY")
                .unwrap_or_else(|_| {
                    warn!("STORE_DATA_API_KEY not set, using empty value");
                    String::new()
                }),
            store_data_source: env::var("STORE_DATA_SOURCE")
                .unwrap_or_else(|_| "Cluster0".to_string()),
            store_database: env::var("STORE_DATABASE")
                .unwrap_or_else(|_| "doctors_portal".to_string()),
            access_token_secret: env::var("ACCESS_TOKEN_SECRET")
                .unwrap_or_else(|_| {
                    warn!("ACCESS_TOKEN_SECRET not set, using empty value");
                    String::new()
                }),
            stripe_secret_key: env::var("STRIPE_SECRET_KEY")
                .unwrap_or_else(|_| {
                    warn!("STRIPE_SECRET_KEY not set, using empty value");
                    String::new()
                }),
            stripe_api_url: env::var("STRIPE_API_URL")
                .unwrap_or_else(|_| "https://api.stripe.com".to_string()),
            mail_api_url: env::var("MAIL_API_URL")
                .unwrap_or_else(|_| {
                    warn!("MAIL_API_URL not set, email notifications disabled");
                    String::new()
                }),
            mail_api_key: env::var("MAIL_API_KEY")
                .unwrap_or_else(|_| {
                    warn!("MAIL_API_KEY not set, email notifications disabled");
                    String::new()
                }),
            mail_sender: env::var("MAIL_SENDER")
                .unwrap_or_else(|_| {
                    warn!("MAIL_SENDER not set, email notifications disabled");
                    String::new()
                }),
            port: env::var("PORT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(5000),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.store_data_api_url.is_empty()
            && !self.store_data_api_key.is_empty()
            && !self.access_token_secret.is_empty()
    }

    pub fn is_payments_configured(&self) -> bool {
        !self.stripe_secret_key.is_empty() && !self.stripe_api_url.is_empty()
    }

    pub fn is_mail_configured(&self) -> bool {
        !self.mail_api_url.is_empty()
            && !self.mail_api_key.is_empty()
            && !self.mail_sender.is_empty()
    }
}
