//! Actix-web extractor for JWT bearer authentication.
//!
//! # Security
//! - The raw token is wrapped in `SecretString` as soon as it leaves the header
//! - Tokens are never logged or exposed in debug output
//! - Signature and expiry are checked before any claims are trusted

use actix_web::dev::Payload;
use actix_web::http::StatusCode;
use actix_web::{FromRequest, HttpRequest, HttpResponse, ResponseError, web};
use secrecy::{ExposeSecret, SecretString};
use std::future::{Ready, ready};

use crate::config::Config;
use crate::error::ErrorResponse;
use crate::models::Claims;
use crate::services::auth;

/// Extract the bearer token from the Authorization header, wrapping it in
/// SecretString. Returns None if the header is missing or malformed.
fn extract_bearer(req: &HttpRequest) -> Option<SecretString> {
    req.headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|s| SecretString::from(s.to_string()))
}

/// Authentication error for extractors.
#[derive(Debug)]
pub struct AuthError {
    message: String,
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ResponseError for AuthError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::UNAUTHORIZED).json(ErrorResponse {
            error: "UNAUTHORIZED".to_string(),
            message: self.message.clone(),
            erros: None,
        })
    }
}

/// Extractor that requires a valid inspector session token.
///
/// Use this in handlers that require authentication:
/// ```ignore
/// async fn protected_handler(auth: BearerAuth) -> impl Responder {
///     // auth.claims identifies the authenticated inspector
/// }
/// ```
pub struct BearerAuth {
    pub claims: Claims,
}

impl FromRequest for BearerAuth {
    type Error = AuthError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let config = match req.app_data::<web::Data<Config>>() {
            Some(config) => config,
            None => {
                return ready(Err(AuthError {
                    message: "Internal configuration error".to_string(),
                }));
            }
        };

        match extract_bearer(req) {
            Some(token) => match auth::verificar_token(config, token.expose_secret()) {
                Ok(claims) => ready(Ok(BearerAuth { claims })),
                Err(e) => ready(Err(AuthError {
                    message: e.to_string(),
                })),
            },
            None => ready(Err(AuthError {
                message: "Token ausente. Envie o header Authorization: Bearer <token>.".to_string(),
            })),
        }
    }
}
