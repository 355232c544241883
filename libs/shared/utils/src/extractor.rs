use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use serde_json::json;

use shared_config::AppConfig;
use shared_database::atlas::AtlasClient;
use shared_models::auth::AuthUser;
use shared_models::error::AppError;

use crate::jwt::validate_token;

/// Authentication gate. A missing or non-Bearer credential is Unauthorized;
/// a credential that fails verification is Forbidden. On success the decoded
/// identity is attached to the request for downstream handlers.
pub async fn auth_middleware(
    State(config): State<Arc<AppConfig>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

    let auth_value = auth_header
        .to_str()
        .map_err(|_| AppError::Unauthorized("Invalid authorization header format".to_string()))?;

    if !auth_value.starts_with("Bearer ") {
        return Err(AppError::Unauthorized(
            "Invalid authorization header format".to_string(),
        ));
    }

    let token = &auth_value[7..];

    let user = validate_token(token, &config.access_token_secret).map_err(AppError::Forbidden)?;

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Authorization gate for admin-only routes. Must be layered inside
/// `auth_middleware`: it reads the identity that gate attached, then checks
/// the role on the matching user record. An absent record is non-privileged,
/// not an error.
pub async fn admin_middleware(
    State(config): State<Arc<AppConfig>>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let user = request
        .extensions()
        .get::<AuthUser>()
        .cloned()
        .ok_or_else(|| AppError::Unauthorized("User not found in request extensions".to_string()))?;

    let store = AtlasClient::new(&config);
    let record = store
        .find_one("users", json!({ "email": user.email }))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    let is_admin = record
        .as_ref()
        .and_then(|doc| doc.get("role"))
        .and_then(|role| role.as_str())
        == Some("admin");

    if !is_admin {
        return Err(AppError::Forbidden("Admin access required".to_string()));
    }

    Ok(next.run(request).await)
}
