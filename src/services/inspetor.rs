//! Inspector account management.

use sea_orm::ActiveValue::Set;
use tracing::info;

use crate::db::DbPool;
use crate::entity::inspetor;
use crate::error::{AppError, AppResult};
use crate::models::{AtualizarInspetorRequest, CriarInspetorRequest, InspetorResponse};

use super::auth::{gerar_salt, hash_senha};

pub async fn listar(pool: &DbPool) -> AppResult<Vec<InspetorResponse>> {
    let inspetores = pool.list_inspetores().await?;
    Ok(inspetores.into_iter().map(InspetorResponse::from).collect())
}

pub async fn obter(pool: &DbPool, id: i32) -> AppResult<InspetorResponse> {
    let inspetor = pool
        .get_inspetor_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Inspetor".to_string()))?;
    Ok(InspetorResponse::from(inspetor))
}

/// Create an inspector account. Email is normalized to lowercase and must
/// be unique; the password is stored as a salted hash only.
pub async fn criar(pool: &DbPool, req: &CriarInspetorRequest) -> AppResult<InspetorResponse> {
    let nome = req.nome.trim();
    let email = req.email.trim().to_lowercase();

    if nome.is_empty() || email.is_empty() || req.senha.is_empty() {
        return Err(AppError::InvalidInput(
            "Dados obrigatórios ausentes (email, nome, senha)".to_string(),
        ));
    }

    if pool.find_inspetor_by_email(&email).await?.is_some() {
        return Err(AppError::InvalidInput("Email já cadastrado".to_string()));
    }

    let salt = gerar_salt();
    let hash = hash_senha(&req.senha, &salt);

    let model = pool.insert_inspetor(nome, &email, &hash, &salt).await?;
    info!("Inspetor {} criado ({})", model.id, model.email);

    Ok(InspetorResponse::from(model))
}

/// Update an inspector. Only supplied fields change; a new password is
/// re-hashed with a fresh salt.
pub async fn atualizar(
    pool: &DbPool,
    id: i32,
    req: &AtualizarInspetorRequest,
) -> AppResult<InspetorResponse> {
    let existing = pool
        .get_inspetor_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Inspetor".to_string()))?;

    let mut am: inspetor::ActiveModel = existing.into();

    if let Some(nome) = &req.nome {
        am.nome = Set(nome.trim().to_string());
    }
    if let Some(email) = &req.email {
        let email = email.trim().to_lowercase();
        if let Some(outro) = pool.find_inspetor_by_email(&email).await?
            && outro.id != id
        {
            return Err(AppError::InvalidInput("Email já cadastrado".to_string()));
        }
        am.email = Set(email);
    }
    if let Some(senha) = &req.senha {
        let salt = gerar_salt();
        am.senha_hash = Set(hash_senha(senha, &salt));
        am.senha_salt = Set(salt);
    }
    if let Some(ativo) = req.ativo {
        am.ativo = Set(ativo);
    }

    let model = pool.update_inspetor(am).await?;
    info!("Inspetor {} atualizado", model.id);

    Ok(InspetorResponse::from(model))
}

pub async fn remover(pool: &DbPool, id: i32) -> AppResult<()> {
    let affected = pool.delete_inspetor(id).await?;
    if affected == 0 {
        return Err(AppError::NotFound("Inspetor".to_string()));
    }
    info!("Inspetor {} removido", id);
    Ok(())
}
