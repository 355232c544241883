use anyhow::{anyhow, Result};
use serde_json::{json, Value};
use tracing::{debug, info};

use shared_config::AppConfig;
use shared_database::atlas::{AtlasClient, UpdateResult};
use shared_utils::jwt::sign_token;

const USERS: &str = "users";

pub struct UserService {
    store: AtlasClient,
    config: AppConfig,
}

impl UserService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: AtlasClient::new(config),
            config: config.clone(),
        }
    }

    /// Upsert the profile keyed by email and issue a fresh access token for
    /// that identity.
    pub async fn upsert_user(&self, email: &str, profile: Value) -> Result<(UpdateResult, String)> {
        debug!("Upserting user {}", email);

        let mut fields = profile.as_object().cloned().unwrap_or_default();
        fields.insert("email".to_string(), json!(email));

        let result = self
            .store
            .update_one(
                USERS,
                json!({ "email": email }),
                json!({ "$set": Value::Object(fields) }),
                true,
            )
            .await?;

        let token = sign_token(email, &self.config.access_token_secret).map_err(|e| anyhow!(e))?;

        Ok((result, token))
    }

    pub async fn list_users(&self) -> Result<Vec<Value>> {
        debug!("Fetching all users");

        self.store.find(USERS, json!({})).await
    }

    /// Whether the record for this email carries the admin role. A missing
    /// record is simply not an admin.
    pub async fn is_admin(&self, email: &str) -> Result<bool> {
        let record = self.store.find_one(USERS, json!({ "email": email })).await?;

        let is_admin = record
            .as_ref()
            .and_then(|doc| doc.get("role"))
            .and_then(|role| role.as_str())
            == Some("admin");

        Ok(is_admin)
    }

    /// Elevate the target's role. Plain update, no upsert: elevation only
    /// applies to users that already exist.
    pub async fn grant_admin(&self, email: &str) -> Result<UpdateResult> {
        info!("Granting admin role to {}", email);

        self.store
            .update_one(
                USERS,
                json!({ "email": email }),
                json!({ "$set": { "role": "admin" } }),
                false,
            )
            .await
    }
}
