use serde::{Deserialize, Serialize};

/// Claims carried by a portal access token. The email is the identity key;
/// roles live on the user record, not in the token.
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub email: String,
    pub iat: Option<u64>,
    pub exp: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub email: String,
}
