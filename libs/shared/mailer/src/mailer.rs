use reqwest::Client;
use thiserror::Error;
use tracing::{debug, error, warn};

use shared_config::AppConfig;

#[derive(Error, Debug)]
pub enum MailError {
    #[error("Mail gateway is not configured")]
    NotConfigured,

    #[error("Mail gateway request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Mail gateway error: {message}")]
    Gateway { message: String },
}

#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Client for the transactional mail gateway. Messages are posted
/// form-encoded to the gateway's `/messages` endpoint.
pub struct MailClient {
    client: Client,
    base_url: String,
    api_key: String,
    sender: String,
    enabled: bool,
}

impl MailClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.mail_api_url.clone(),
            api_key: config.mail_api_key.clone(),
            sender: config.mail_sender.clone(),
            enabled: config.is_mail_configured(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub async fn send(&self, message: &EmailMessage) -> Result<(), MailError> {
        if !self.enabled {
            return Err(MailError::NotConfigured);
        }

        let url = format!("{}/messages", self.base_url);
        debug!("Sending '{}' to {}", message.subject, message.to);

        let params = [
            ("from", self.sender.as_str()),
            ("to", message.to.as_str()),
            ("subject", message.subject.as_str()),
            ("html", message.html.as_str()),
            ("text", message.text.as_str()),
        ];

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Mail gateway error ({}): {}", status, error_text);
            return Err(MailError::Gateway {
                message: format!("HTTP {}: {}", status, error_text),
            });
        }

        Ok(())
    }
}

/// Fire-and-forget delivery. Failures are logged and never propagate to the
/// caller; an unconfigured gateway skips the send entirely.
pub fn dispatch(mailer: MailClient, message: EmailMessage) {
    if !mailer.is_enabled() {
        debug!(
            "Mail gateway not configured, skipping '{}' to {}",
            message.subject, message.to
        );
        return;
    }

    tokio::spawn(async move {
        if let Err(err) = mailer.send(&message).await {
            warn!(
                "Failed to send '{}' to {}: {}",
                message.subject, message.to, err
            );
        }
    });
}
