use anyhow::Result;
use serde_json::{json, Value};
use tracing::{debug, info};

use shared_config::AppConfig;
use shared_database::atlas::AtlasClient;

use crate::models::{CreateDoctorRequest, Doctor};

const DOCTORS: &str = "doctors";

pub struct DoctorService {
    store: AtlasClient,
}

impl DoctorService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: AtlasClient::new(config),
        }
    }

    pub async fn list_doctors(&self) -> Result<Vec<Value>> {
        debug!("Fetching doctor roster");

        self.store.find(DOCTORS, json!({})).await
    }

    pub async fn add_doctor(&self, request: CreateDoctorRequest) -> Result<String> {
        info!("Adding doctor {} ({})", request.name, request.email);

        let doctor = Doctor {
            id: None,
            name: request.name,
            email: request.email,
            specialty: request.specialty,
            img: request.img,
        };

        self.store
            .insert_one(DOCTORS, serde_json::to_value(&doctor)?)
            .await
    }

    pub async fn delete_doctor(&self, email: &str) -> Result<u64> {
        info!("Removing doctor {}", email);

        self.store
            .delete_one(DOCTORS, json!({ "email": email }))
            .await
    }
}
