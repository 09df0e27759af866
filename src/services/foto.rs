//! Photo attachments: upload to disk storage plus metadata rows.
//!
//! Uploads are partial-success: within one batch each file is saved
//! independently, and a failure on file N never rolls back files 1..N-1.

use tracing::{info, warn};

use crate::db::{DbPool, FotoEntry};
use crate::error::{AppError, AppResult};
use crate::models::{FalhaUpload, FotoResponse, UploadOutcome, UploadedFoto};

use super::storage::Storage;

/// Accepted photo content types, mirroring the upload allow-list
/// enforced at the HTTP boundary.
pub const TIPOS_MIME_PERMITIDOS: [&str; 4] =
    ["image/jpeg", "image/jpg", "image/png", "image/webp"];

pub fn tipo_mime_permitido(mime: &str) -> bool {
    TIPOS_MIME_PERMITIDOS.contains(&mime.to_ascii_lowercase().as_str())
}

#[derive(Clone)]
pub struct FotoService {
    pool: DbPool,
    storage: Storage,
}

impl FotoService {
    pub fn new(pool: DbPool, storage: Storage) -> Self {
        Self { pool, storage }
    }

    /// Attach a batch of photos to a laudo. The laudo must exist and the
    /// batch must be non-empty. Each file is stored and recorded
    /// independently; per-file failures are collected in the outcome.
    pub async fn adicionar_fotos(
        &self,
        laudo_id: i32,
        fotos: Vec<UploadedFoto>,
    ) -> AppResult<UploadOutcome> {
        if fotos.is_empty() {
            return Err(AppError::InvalidInput(
                "Nenhuma foto enviada".to_string(),
            ));
        }

        self.pool
            .get_laudo_by_id(laudo_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Laudo".to_string()))?;

        let mut outcome = UploadOutcome::default();

        for foto in fotos {
            match self.salvar_uma(laudo_id, &foto).await {
                Ok(saved) => outcome.salvas.push(saved),
                Err(e) => {
                    warn!(
                        "Falha no upload de '{}' para laudo {}: {}",
                        foto.nome_original, laudo_id, e
                    );
                    outcome.falhas.push(FalhaUpload {
                        arquivo: foto.nome_original.clone(),
                        motivo: e.to_string(),
                    });
                }
            }
        }

        info!(
            "Laudo {}: {} fotos salvas, {} falhas",
            laudo_id,
            outcome.salvas.len(),
            outcome.falhas.len()
        );
        Ok(outcome)
    }

    async fn salvar_uma(&self, laudo_id: i32, foto: &UploadedFoto) -> AppResult<FotoResponse> {
        let key = Storage::foto_key(laudo_id, &foto.nome_original);
        self.storage.put(&key, &foto.bytes).await?;

        let entry = FotoEntry {
            nome_arquivo: foto.nome_original.clone(),
            caminho_arquivo: key.clone(),
            tamanho_arquivo: foto.bytes.len() as i64,
            tipo_mime: foto.tipo_mime.clone(),
            descricao: foto.descricao.clone(),
        };

        match self.pool.insert_foto(laudo_id, entry).await {
            Ok(model) => Ok(FotoResponse::from(model)),
            Err(e) => {
                // Metadata insert failed after the file landed on disk;
                // remove the orphan so storage stays consistent.
                if let Err(del) = self.storage.delete(&key).await {
                    warn!("Falha ao limpar arquivo órfão '{}': {}", key, del);
                }
                Err(e)
            }
        }
    }

    /// List photo metadata for a laudo, newest first.
    pub async fn listar_por_laudo(&self, laudo_id: i32) -> AppResult<Vec<FotoResponse>> {
        self.pool
            .get_laudo_by_id(laudo_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Laudo".to_string()))?;

        let fotos = self.pool.get_fotos_by_laudo_id(laudo_id).await?;
        Ok(fotos.into_iter().map(FotoResponse::from).collect())
    }

    /// Remove one photo: backing file best-effort first, then the
    /// metadata row. A storage failure never blocks metadata deletion.
    pub async fn remover_foto(&self, foto_id: i32) -> AppResult<()> {
        let foto = self
            .pool
            .get_foto_by_id(foto_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Foto".to_string()))?;

        if let Err(e) = self.storage.delete(&foto.caminho_arquivo).await {
            warn!("Falha ao remover arquivo da foto {}: {}", foto_id, e);
        }

        let affected = self.pool.delete_foto(foto_id).await?;
        if affected == 0 {
            return Err(AppError::NotFound("Foto".to_string()));
        }

        info!("Foto {} removida do laudo {}", foto_id, foto.laudo_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_allow_list_is_case_insensitive() {
        assert!(tipo_mime_permitido("image/jpeg"));
        assert!(tipo_mime_permitido("IMAGE/PNG"));
        assert!(tipo_mime_permitido("image/webp"));
        assert!(tipo_mime_permitido("image/jpg"));
    }

    #[test]
    fn mime_allow_list_rejects_non_images() {
        assert!(!tipo_mime_permitido("application/pdf"));
        assert!(!tipo_mime_permitido("image/gif"));
        assert!(!tipo_mime_permitido("text/html"));
        assert!(!tipo_mime_permitido(""));
    }
}
