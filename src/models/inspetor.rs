//! Inspector account models and DTOs.
//!
//! Password material never leaves the server: responses carry no hash or
//! salt, and incoming passwords are hashed before storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::inspetor;

/// Inspector representation returned to clients.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InspetorResponse {
    pub id: i32,
    pub nome: String,
    pub email: String,
    pub ativo: bool,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: DateTime<Utc>,
}

impl From<inspetor::Model> for InspetorResponse {
    fn from(m: inspetor::Model) -> Self {
        Self {
            id: m.id,
            nome: m.nome,
            email: m.email,
            ativo: m.ativo,
            criado_em: m.criado_em,
            atualizado_em: m.atualizado_em,
        }
    }
}

/// Request body for creating an inspector.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CriarInspetorRequest {
    pub nome: String,
    pub email: String,
    pub senha: String,
}

/// Request body for updating an inspector; absent fields are unchanged.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct AtualizarInspetorRequest {
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub senha: Option<String>,
    #[serde(default)]
    pub ativo: Option<bool>,
}
