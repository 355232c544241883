use anyhow::Result;
use serde_json::{json, Value};
use tracing::debug;

use shared_config::AppConfig;
use shared_database::atlas::AtlasClient;

pub struct CatalogService {
    store: AtlasClient,
}

impl CatalogService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: AtlasClient::new(config),
        }
    }

    /// The full service catalog, passed through as stored.
    pub async fn list_services(&self) -> Result<Vec<Value>> {
        debug!("Fetching service catalog");

        let services = self.store.find("services", json!({})).await?;
        Ok(services)
    }
}
