//! Database queries for inspector accounts.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::entity::inspetor::{self, ActiveModel, Entity as Inspetor};
use crate::error::{AppError, AppResult};

use super::DbPool;

impl DbPool {
    /// Insert a new inspector with pre-hashed credentials.
    pub async fn insert_inspetor(
        &self,
        nome: &str,
        email: &str,
        senha_hash: &str,
        senha_salt: &str,
    ) -> AppResult<inspetor::Model> {
        let now = Utc::now();

        let model = ActiveModel {
            id: NotSet,
            nome: Set(nome.to_string()),
            email: Set(email.to_string()),
            senha_hash: Set(senha_hash.to_string()),
            senha_salt: Set(senha_salt.to_string()),
            ativo: Set(true),
            criado_em: Set(now),
            atualizado_em: Set(now),
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert inspetor: {}", e)))?;

        Ok(result)
    }

    /// Get an inspector by ID.
    pub async fn get_inspetor_by_id(&self, id: i32) -> AppResult<Option<inspetor::Model>> {
        let result = Inspetor::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get inspetor: {}", e)))?;

        Ok(result)
    }

    /// Find an inspector by email.
    pub async fn find_inspetor_by_email(&self, email: &str) -> AppResult<Option<inspetor::Model>> {
        let result = Inspetor::find()
            .filter(inspetor::Column::Email.eq(email))
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to find inspetor: {}", e)))?;

        Ok(result)
    }

    /// List all inspectors, oldest first.
    pub async fn list_inspetores(&self) -> AppResult<Vec<inspetor::Model>> {
        let result = Inspetor::find()
            .order_by_asc(inspetor::Column::Id)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list inspetores: {}", e)))?;

        Ok(result)
    }

    /// Count inspector accounts (used by the bootstrap seeding check).
    pub async fn count_inspetores(&self) -> AppResult<u64> {
        let count = Inspetor::find()
            .count(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to count inspetores: {}", e)))?;

        Ok(count)
    }

    /// Persist an updated inspector model.
    pub async fn update_inspetor(&self, model: ActiveModel) -> AppResult<inspetor::Model> {
        let mut model = model;
        model.atualizado_em = Set(Utc::now());

        let result = model
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to update inspetor: {}", e)))?;

        Ok(result)
    }

    /// Delete an inspector. Returns the number of rows affected.
    pub async fn delete_inspetor(&self, id: i32) -> AppResult<u64> {
        let result = Inspetor::delete_by_id(id)
            .exec(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete inspetor: {}", e)))?;

        Ok(result.rows_affected)
    }
}
