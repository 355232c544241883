use std::sync::Arc;

use chrono::{Duration, Utc};

use shared_config::AppConfig;
use shared_models::auth::AuthUser;

use crate::jwt::sign_token_with_expiry;

pub struct TestConfig {
    pub jwt_secret: String,
    pub store_url: String,
    pub store_key: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "test-secret-key-for-jwt-validation-must-be-long-enough".to_string(),
            store_url: "http://localhost:54321".to_string(),
            store_key: "test-api-key".to_string(),
        }
    }
}

impl TestConfig {
    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            store_data_api_url: self.store_url.clone(),
            store_data_api_key: self.store_key.clone(),
            store_data_source: "Cluster0".to_string(),
            store_database: "doctors_portal".to_string(),
            access_token_secret: self.jwt_secret.clone(),
            stripe_secret_key: String::new(),
            stripe_api_url: String::new(),
            mail_api_url: String::new(),
            mail_api_key: String::new(),
            mail_sender: String::new(),
            port: 5000,
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

pub struct TestUser {
    pub email: String,
}

impl TestUser {
    pub fn new(email: &str) -> Self {
        Self {
            email: email.to_string(),
        }
    }

    pub fn to_user(&self) -> AuthUser {
        AuthUser {
            email: self.email.clone(),
        }
    }
}

pub struct JwtTestUtils;

impl JwtTestUtils {
    pub fn create_test_token(user: &TestUser, secret: &str, exp_hours: Option<i64>) -> String {
        let now = Utc::now();
        let exp = now + Duration::hours(exp_hours.unwrap_or(24));

        sign_token_with_expiry(&user.email, secret, now.timestamp(), exp.timestamp())
            .expect("signing a test token must not fail")
    }

    pub fn create_expired_token(user: &TestUser, secret: &str) -> String {
        Self::create_test_token(user, secret, Some(-1))
    }

    pub fn create_invalid_signature_token(user: &TestUser) -> String {
        Self::create_test_token(user, "wrong-secret", Some(24))
    }

    pub fn create_malformed_token() -> String {
        "invalid.token.format".to_string()
    }
}
