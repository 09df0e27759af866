//! First-run seeding of the default admin inspector.
//!
//! Seeding runs only when explicitly enabled and the inspector table is
//! empty, so a redeploy never recreates or resets accounts. Production
//! configs with seeding enabled are rejected at config load.

use tracing::{info, warn};

use crate::config::Config;
use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::CriarInspetorRequest;

use super::inspetor;

const ADMIN_NOME: &str = "Administrador";
const ADMIN_EMAIL: &str = "admin@example.com";
const ADMIN_SENHA: &str = "admin123";

/// Seed the default admin account when enabled and the table is empty.
pub async fn seed_admin(pool: &DbPool, config: &Config) -> AppResult<()> {
    if !config.seed_admin {
        return Ok(());
    }

    let existentes = pool.count_inspetores().await?;
    if existentes > 0 {
        info!(
            "Seed do admin ignorado: {} inspetor(es) já cadastrado(s)",
            existentes
        );
        return Ok(());
    }

    let admin = inspetor::criar(
        pool,
        &CriarInspetorRequest {
            nome: ADMIN_NOME.to_string(),
            email: ADMIN_EMAIL.to_string(),
            senha: ADMIN_SENHA.to_string(),
        },
    )
    .await?;

    warn!(
        "Inspetor admin padrão criado ({}). Troque a senha antes de expor o serviço.",
        admin.email
    );
    Ok(())
}
