//! Authentication models: login payloads and JWT claims.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::inspetor::InspetorResponse;

/// Login request body. The password is wrapped in `SecretString` so it is
/// never logged or exposed in debug output.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    #[schema(value_type = String)]
    pub senha: SecretString,
}

/// Login response: signed token plus the authenticated inspector.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub user: InspetorResponse,
}

/// JWT claims issued at login and verified by the bearer extractor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Inspector id
    pub sub: i32,
    pub email: String,
    pub nome: String,
    /// Expiry as unix timestamp
    pub exp: i64,
}
