//! Inspector authentication: salted password hashing and JWT issuance.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand::RngExt;
use secrecy::ExposeSecret;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use tracing::info;

use crate::config::Config;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{Claims, InspetorResponse, LoginRequest, LoginResponse};

/// Length of the random per-password salt.
const SALT_LENGTH: usize = 16;

/// Generate a random alphanumeric salt.
pub fn gerar_salt() -> String {
    rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(SALT_LENGTH)
        .map(char::from)
        .collect()
}

/// Hash a password with its salt using SHA-256, hex encoded.
pub fn hash_senha(senha: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(senha.as_bytes());
    hex::encode(hasher.finalize())
}

/// Constant-time comparison of a candidate password against a stored hash.
pub fn verificar_senha(senha: &str, salt: &str, hash_armazenado: &str) -> bool {
    let candidate = hash_senha(senha, salt);
    candidate
        .as_bytes()
        .ct_eq(hash_armazenado.as_bytes())
        .into()
}

/// Issue a signed JWT for an inspector.
pub fn emitir_token(config: &Config, id: i32, email: &str, nome: &str) -> AppResult<String> {
    let exp = (Utc::now() + Duration::hours(config.jwt_ttl_hours)).timestamp();
    let claims = Claims {
        sub: id,
        email: email.to_string(),
        nome: nome.to_string(),
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::Unauthorized(format!("Falha ao emitir token: {}", e)))
}

/// Verify a JWT and return its claims. Expired or tampered tokens fail.
pub fn verificar_token(config: &Config, token: &str) -> AppResult<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::Unauthorized("Token inválido ou expirado".to_string()))
}

/// Authenticate an inspector by email and password.
///
/// A wrong email and a wrong password produce the same error, so callers
/// cannot probe which accounts exist. Inactive accounts cannot log in.
pub async fn login(pool: &DbPool, config: &Config, req: &LoginRequest) -> AppResult<LoginResponse> {
    let email = req.email.trim().to_lowercase();

    let inspetor = pool
        .find_inspetor_by_email(&email)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Credenciais inválidas".to_string()))?;

    if !inspetor.ativo {
        return Err(AppError::Unauthorized("Credenciais inválidas".to_string()));
    }

    if !verificar_senha(
        req.senha.expose_secret(),
        &inspetor.senha_salt,
        &inspetor.senha_hash,
    ) {
        return Err(AppError::Unauthorized("Credenciais inválidas".to_string()));
    }

    let token = emitir_token(config, inspetor.id, &inspetor.email, &inspetor.nome)?;
    info!("Login de {}", inspetor.email);

    Ok(LoginResponse {
        token,
        user: InspetorResponse::from(inspetor),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        use crate::config::Environment;
        use std::path::PathBuf;

        Config {
            environment: Environment::Development,
            host: "127.0.0.1".to_string(),
            port: 3000,
            database_url: "sqlite::memory:".to_string(),
            uploads_dir: PathBuf::from("uploads"),
            jwt_secret: "segredo-de-teste".to_string(),
            jwt_ttl_hours: 8,
            max_foto_size: 1024,
            max_fotos_per_request: 10,
            seed_admin: false,
        }
    }

    #[test]
    fn salt_is_random_and_sized() {
        let a = gerar_salt();
        let b = gerar_salt();
        assert_eq!(a.len(), SALT_LENGTH);
        assert_eq!(b.len(), SALT_LENGTH);
        assert_ne!(a, b);
    }

    #[test]
    fn hash_depends_on_salt() {
        let h1 = hash_senha("admin123", "salt-a");
        let h2 = hash_senha("admin123", "salt-b");
        assert_ne!(h1, h2);
        // 32 bytes of SHA-256, hex encoded
        assert_eq!(h1.len(), 64);
    }

    #[test]
    fn verify_accepts_correct_password() {
        let salt = gerar_salt();
        let hash = hash_senha("senha-forte", &salt);
        assert!(verificar_senha("senha-forte", &salt, &hash));
        assert!(!verificar_senha("senha-errada", &salt, &hash));
    }

    #[test]
    fn token_round_trips_claims() {
        let config = test_config();
        let token = emitir_token(&config, 7, "ana@example.com", "Ana").unwrap();
        let claims = verificar_token(&config, &token).unwrap();
        assert_eq!(claims.sub, 7);
        assert_eq!(claims.email, "ana@example.com");
        assert_eq!(claims.nome, "Ana");
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn tampered_token_is_rejected() {
        let config = test_config();
        let token = emitir_token(&config, 1, "a@b.com", "A").unwrap();
        let mut outro = test_config();
        outro.jwt_secret = "outro-segredo".to_string();
        assert!(verificar_token(&outro, &token).is_err());
        assert!(verificar_token(&config, "nem.um.jwt").is_err());
    }
}
