//! Database queries for laudo photos.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entity::foto_laudo::{self, ActiveModel, Entity as FotoLaudo};
use crate::error::{AppError, AppResult};

use super::DbPool;

/// Photo metadata to insert.
#[derive(Debug, Clone)]
pub struct FotoEntry {
    pub nome_arquivo: String,
    pub caminho_arquivo: String,
    pub tamanho_arquivo: i64,
    pub tipo_mime: Option<String>,
    pub descricao: Option<String>,
}

impl DbPool {
    /// Insert a photo record for a laudo.
    pub async fn insert_foto(
        &self,
        laudo_id: i32,
        entry: FotoEntry,
    ) -> AppResult<foto_laudo::Model> {
        let model = ActiveModel {
            id: NotSet,
            laudo_id: Set(laudo_id),
            nome_arquivo: Set(entry.nome_arquivo),
            caminho_arquivo: Set(entry.caminho_arquivo),
            tamanho_arquivo: Set(entry.tamanho_arquivo),
            tipo_mime: Set(entry.tipo_mime),
            descricao: Set(entry.descricao),
            criado_em: Set(Utc::now()),
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert foto: {}", e)))?;

        Ok(result)
    }

    /// Get a photo by ID.
    pub async fn get_foto_by_id(&self, id: i32) -> AppResult<Option<foto_laudo::Model>> {
        let result = FotoLaudo::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get foto: {}", e)))?;

        Ok(result)
    }

    /// Get all photos of a laudo, newest first.
    pub async fn get_fotos_by_laudo_id(&self, laudo_id: i32) -> AppResult<Vec<foto_laudo::Model>> {
        let result = FotoLaudo::find()
            .filter(foto_laudo::Column::LaudoId.eq(laudo_id))
            .order_by_desc(foto_laudo::Column::CriadoEm)
            .order_by_desc(foto_laudo::Column::Id)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get fotos: {}", e)))?;

        Ok(result)
    }

    /// Delete a photo record. Returns the number of rows affected.
    pub async fn delete_foto(&self, id: i32) -> AppResult<u64> {
        let result = FotoLaudo::delete_by_id(id)
            .exec(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete foto: {}", e)))?;

        Ok(result.rows_affected)
    }
}
