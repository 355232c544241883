use anyhow::{anyhow, Result};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE},
    Client,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, error};

use shared_config::AppConfig;

/// Client for the document store's HTTPS Data API. Every operation is a
/// POST to `{base_url}/action/{name}` carrying the data source, database,
/// and collection alongside the action-specific fields.
pub struct AtlasClient {
    client: Client,
    base_url: String,
    api_key: String,
    data_source: String,
    database: String,
}

#[derive(Debug, Deserialize)]
struct FindResponse {
    documents: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct FindOneResponse {
    document: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct InsertOneResponse {
    #[serde(rename = "insertedId")]
    inserted_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateResult {
    #[serde(rename = "matchedCount")]
    pub matched_count: u64,
    #[serde(rename = "modifiedCount")]
    pub modified_count: u64,
    #[serde(rename = "upsertedId", skip_serializing_if = "Option::is_none")]
    pub upserted_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DeleteResponse {
    #[serde(rename = "deletedCount")]
    deleted_count: u64,
}

impl AtlasClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.store_data_api_url.clone(),
            api_key: config.store_data_api_key.clone(),
            data_source: config.store_data_source.clone(),
            database: config.store_database.clone(),
        }
    }

    fn get_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        headers.insert("api-key", HeaderValue::from_str(&self.api_key).unwrap());
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        headers
    }

    async fn action<T>(&self, action: &str, collection: &str, fields: Value) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/action/{}", self.base_url, action);
        debug!("Store {} on collection {}", action, collection);

        let mut body = json!({
            "dataSource": self.data_source,
            "database": self.database,
            "collection": collection,
        });
        if let (Some(body_map), Some(extra)) = (body.as_object_mut(), fields.as_object()) {
            for (key, value) in extra {
                body_map.insert(key.clone(), value.clone());
            }
        }

        let response = self
            .client
            .post(&url)
            .headers(self.get_headers())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            error!("Store API error ({}): {}", status, error_text);

            return Err(match status.as_u16() {
                401 | 403 => anyhow!("Store authentication error: {}", error_text),
                404 => anyhow!("Store resource not found: {}", error_text),
                _ => anyhow!("Store API error ({}): {}", status, error_text),
            });
        }

        let data = response.json::<T>().await?;
        Ok(data)
    }

    pub async fn find(&self, collection: &str, filter: Value) -> Result<Vec<Value>> {
        let response: FindResponse = self
            .action("find", collection, json!({ "filter": filter }))
            .await?;
        Ok(response.documents)
    }

    pub async fn find_one(&self, collection: &str, filter: Value) -> Result<Option<Value>> {
        let response: FindOneResponse = self
            .action("findOne", collection, json!({ "filter": filter }))
            .await?;
        Ok(response.document)
    }

    pub async fn insert_one(&self, collection: &str, document: Value) -> Result<String> {
        let response: InsertOneResponse = self
            .action("insertOne", collection, json!({ "document": document }))
            .await?;
        Ok(response.inserted_id)
    }

    pub async fn update_one(
        &self,
        collection: &str,
        filter: Value,
        update: Value,
        upsert: bool,
    ) -> Result<UpdateResult> {
        let result: UpdateResult = self
            .action(
                "updateOne",
                collection,
                json!({ "filter": filter, "update": update, "upsert": upsert }),
            )
            .await?;
        Ok(result)
    }

    pub async fn delete_one(&self, collection: &str, filter: Value) -> Result<u64> {
        let response: DeleteResponse = self
            .action("deleteOne", collection, json!({ "filter": filter }))
            .await?;
        Ok(response.deleted_count)
    }
}
