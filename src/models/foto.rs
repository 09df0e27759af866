//! Photo attachment models and DTOs.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::entity::foto_laudo;

/// A photo received at the boundary, already MIME-filtered by the caller.
#[derive(Debug, Clone)]
pub struct UploadedFoto {
    /// Original filename as declared by the client
    pub nome_original: String,
    /// Declared MIME type
    pub tipo_mime: Option<String>,
    /// Optional free-text description
    pub descricao: Option<String>,
    /// File contents
    pub bytes: Vec<u8>,
}

/// Photo metadata returned to clients.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FotoResponse {
    pub id: i32,
    pub laudo_id: i32,
    pub nome_arquivo: String,
    pub caminho_arquivo: String,
    pub tamanho_arquivo: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_mime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    pub criado_em: DateTime<Utc>,
}

impl From<foto_laudo::Model> for FotoResponse {
    fn from(m: foto_laudo::Model) -> Self {
        Self {
            id: m.id,
            laudo_id: m.laudo_id,
            nome_arquivo: m.nome_arquivo,
            caminho_arquivo: m.caminho_arquivo,
            tamanho_arquivo: m.tamanho_arquivo,
            tipo_mime: m.tipo_mime,
            descricao: m.descricao,
            criado_em: m.criado_em,
        }
    }
}

/// A file that could not be stored during an upload batch.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FalhaUpload {
    pub arquivo: String,
    pub motivo: String,
}

/// Outcome of an upload batch: files are processed sequentially and a
/// storage failure on one file does not roll back the ones already saved.
#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct UploadOutcome {
    /// Photo records persisted, in upload order
    pub salvas: Vec<FotoResponse>,
    /// Files rejected by the storage sink, with reasons
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub falhas: Vec<FalhaUpload>,
}
