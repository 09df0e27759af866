//! Laudo aggregate lifecycle: create, merge-update, delete with cascade.
//!
//! The IPA columns are recomputed from the full field set on every write;
//! a stored score is always reproducible by re-running the engine over
//! the stored checklist. Updates carry an optional expected version for
//! optimistic concurrency; when omitted, last write wins.

use serde_json::Value;
use tracing::{info, warn};

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{IpaResult, LaudoData, LaudoResponse};

use super::scoring::calc_ipa;
use super::storage::Storage;
use super::validation::sanitizar_e_validar;

/// Report aggregate service.
#[derive(Clone)]
pub struct LaudoService {
    pool: DbPool,
    storage: Storage,
}

impl LaudoService {
    pub fn new(pool: DbPool, storage: Storage) -> Self {
        Self { pool, storage }
    }

    /// List every laudo with its photos, newest first.
    pub async fn listar(&self) -> AppResult<Vec<LaudoResponse>> {
        let laudos = self.pool.list_laudos().await?;

        let mut out = Vec::with_capacity(laudos.len());
        for laudo in &laudos {
            let fotos = self.pool.get_fotos_by_laudo_id(laudo.id).await?;
            out.push(LaudoResponse::from_model(laudo, fotos));
        }

        Ok(out)
    }

    /// Get one laudo with its photos.
    pub async fn obter(&self, id: i32) -> AppResult<LaudoResponse> {
        let laudo = self
            .pool
            .get_laudo_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Laudo".to_string()))?;

        let fotos = self.pool.get_fotos_by_laudo_id(laudo.id).await?;
        Ok(LaudoResponse::from_model(&laudo, fotos))
    }

    /// Find laudos by plate (normalized to uppercase), newest first.
    pub async fn buscar_por_placa(&self, placa: &str) -> AppResult<Vec<LaudoResponse>> {
        let normalized = placa.trim().to_uppercase();
        let laudos = self.pool.find_laudos_by_placa(&normalized).await?;

        let mut out = Vec::with_capacity(laudos.len());
        for laudo in &laudos {
            let fotos = self.pool.get_fotos_by_laudo_id(laudo.id).await?;
            out.push(LaudoResponse::from_model(laudo, fotos));
        }

        Ok(out)
    }

    /// Preview the IPA result for a raw field map without persisting.
    /// Uses the same sanitize-validate-score pipeline as `criar`.
    pub async fn previa(&self, raw: &Value) -> AppResult<IpaResult> {
        let data = sanitizar_e_validar(raw)?;
        Ok(calc_ipa(&data))
    }

    /// Create a laudo from raw caller fields. Nothing is persisted unless
    /// validation passes; the stored row carries the IPA outputs computed
    /// from the exact field set being persisted.
    pub async fn criar(&self, raw: &Value) -> AppResult<LaudoResponse> {
        let data = sanitizar_e_validar(raw)?;
        let ipa = calc_ipa(&data);

        let model = self.pool.insert_laudo(&data, &ipa).await?;
        info!(
            "Laudo {} criado: placa={} score={} badge={}",
            model.id, model.placa, model.ipa_score, model.ipa_badge
        );

        Ok(LaudoResponse::from_model(&model, Vec::new()))
    }

    /// Merge a partial field overlay onto a stored laudo, re-validate and
    /// re-score, then persist. A validation failure leaves the stored row
    /// untouched and reports the complete error list.
    ///
    /// When `versao_esperada` is given, the update fails with Conflict if
    /// the stored version differs, so concurrent editors cannot silently
    /// overwrite each other.
    pub async fn atualizar(
        &self,
        id: i32,
        overlay: &Value,
        versao_esperada: Option<i32>,
    ) -> AppResult<LaudoResponse> {
        let existing = self
            .pool
            .get_laudo_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Laudo".to_string()))?;

        if let Some(expected) = versao_esperada
            && expected != existing.versao
        {
            return Err(AppError::Conflict {
                expected,
                actual: existing.versao,
            });
        }

        // Whole-record merge: overlay fields win over stored fields
        let mut merged = serde_json::to_value(LaudoData::from(&existing))?;
        if let (Some(base), Some(patch)) = (merged.as_object_mut(), overlay.as_object()) {
            for (key, value) in patch {
                base.insert(key.clone(), value.clone());
            }
        }

        let data = sanitizar_e_validar(&merged)?;
        let ipa = calc_ipa(&data);

        let model = self.pool.update_laudo(existing, &data, &ipa).await?;
        info!(
            "Laudo {} atualizado: versao={} score={}",
            model.id, model.versao, model.ipa_score
        );

        let fotos = self.pool.get_fotos_by_laudo_id(model.id).await?;
        Ok(LaudoResponse::from_model(&model, fotos))
    }

    /// Delete a laudo. The foreign key cascades photo metadata; backing
    /// files are cleaned up best-effort afterwards (a storage failure is
    /// logged and never blocks the metadata deletion).
    pub async fn remover(&self, id: i32) -> AppResult<()> {
        let fotos = self.pool.get_fotos_by_laudo_id(id).await?;

        let affected = self.pool.delete_laudo(id).await?;
        if affected == 0 {
            return Err(AppError::NotFound("Laudo".to_string()));
        }

        for foto in &fotos {
            if let Err(e) = self.storage.delete(&foto.caminho_arquivo).await {
                warn!("Falha ao remover arquivo da foto {}: {}", foto.id, e);
            }
        }
        if let Err(e) = self.storage.delete_laudo_dir(id).await {
            warn!("Falha ao remover diretório de fotos do laudo {}: {}", id, e);
        }

        info!("Laudo {} removido ({} fotos em cascata)", id, fotos.len());
        Ok(())
    }
}
