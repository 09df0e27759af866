//! Database queries for laudos.
//!
//! Every write goes through `apply_data`, which sets the checklist
//! columns and the IPA columns from the same computation - there is no
//! path that persists a score detached from its checklist.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entity::laudo::{self, ActiveModel, Entity as Laudo};
use crate::error::{AppError, AppResult};
use crate::models::{IpaResult, LaudoData};

use super::DbPool;

/// Copy checklist fields and the IPA outputs computed from them onto an
/// active model.
fn apply_data(am: &mut ActiveModel, data: &LaudoData, ipa: &IpaResult) {
    am.placa = Set(data.placa.clone());
    am.vin = Set(data.vin.clone());
    am.motor = Set(data.motor.clone());
    am.ano_modelo = Set(data.ano_modelo.clone());
    am.crlv_ok = Set(data.crlv_ok.clone());
    am.historico_risco = Set(data.historico_risco.clone());
    am.longarinas = Set(data.longarinas.clone());
    am.colunas = Set(data.colunas.clone());
    am.cortafogo = Set(data.cortafogo.clone());
    am.colisao_grave = Set(data.colisao_grave.clone());
    am.obs_estrutura = Set(data.obs_estrutura.clone());
    am.pintura_esp = Set(data.pintura_esp);
    am.tonalidade = Set(data.tonalidade.clone());
    am.vidros_orig = Set(data.vidros_orig.clone());
    am.farois_orig = Set(data.farois_orig.clone());
    am.obs_pintura = Set(data.obs_pintura.clone());
    am.oxidacao = Set(data.oxidacao.clone());
    am.carpetes = Set(data.carpetes.clone());
    am.odor = Set(data.odor.clone());
    am.eletrico_geral = Set(data.eletrico_geral.clone());
    am.falhas_obd = Set(data.falhas_obd.clone());
    am.km_obd = Set(data.km_obd);
    am.consistencia_km = Set(data.consistencia_km.clone());
    am.airbags = Set(data.airbags.clone());
    am.obs_obd = Set(data.obs_obd.clone());
    am.vazamentos = Set(data.vazamentos.clone());
    am.pneus = Set(data.pneus.clone());
    am.suspensao = Set(data.suspensao.clone());
    am.direcao = Set(data.direcao.clone());
    am.freios = Set(data.freios.clone());
    am.sistema_eletrico = Set(data.sistema_eletrico.clone());
    am.status_veiculo = Set(data.status_veiculo.clone());
    am.inspetor = Set(data.inspetor.clone());
    am.observacoes_finais = Set(data.observacoes_finais.clone());
    am.ipa_score = Set(ipa.score);
    am.ipa_badge = Set(ipa.badge.as_str().to_string());
    am.ipa_notas = Set(serde_json::json!(ipa.notas));
}

impl DbPool {
    /// Insert a new laudo with its computed IPA outputs.
    pub async fn insert_laudo(
        &self,
        data: &LaudoData,
        ipa: &IpaResult,
    ) -> AppResult<laudo::Model> {
        let now = Utc::now();

        let mut model = ActiveModel {
            id: NotSet,
            versao: Set(1),
            criado_em: Set(now),
            atualizado_em: Set(now),
            ..Default::default()
        };
        apply_data(&mut model, data, ipa);

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert laudo: {}", e)))?;

        Ok(result)
    }

    /// Get a laudo by ID.
    pub async fn get_laudo_by_id(&self, id: i32) -> AppResult<Option<laudo::Model>> {
        let result = Laudo::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get laudo: {}", e)))?;

        Ok(result)
    }

    /// List all laudos, newest first.
    pub async fn list_laudos(&self) -> AppResult<Vec<laudo::Model>> {
        let result = Laudo::find()
            .order_by_desc(laudo::Column::CriadoEm)
            .order_by_desc(laudo::Column::Id)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list laudos: {}", e)))?;

        Ok(result)
    }

    /// Find laudos by normalized plate, newest first.
    pub async fn find_laudos_by_placa(&self, placa: &str) -> AppResult<Vec<laudo::Model>> {
        let result = Laudo::find()
            .filter(laudo::Column::Placa.eq(placa))
            .order_by_desc(laudo::Column::CriadoEm)
            .order_by_desc(laudo::Column::Id)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to find laudos by placa: {}", e)))?;

        Ok(result)
    }

    /// Persist the merged-and-rescored state of an existing laudo,
    /// bumping its version token.
    pub async fn update_laudo(
        &self,
        existing: laudo::Model,
        data: &LaudoData,
        ipa: &IpaResult,
    ) -> AppResult<laudo::Model> {
        let versao = existing.versao + 1;

        let mut model: ActiveModel = existing.into();
        apply_data(&mut model, data, ipa);
        model.versao = Set(versao);
        model.atualizado_em = Set(Utc::now());

        let result = model
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to update laudo: {}", e)))?;

        Ok(result)
    }

    /// Delete a laudo row. Returns the number of rows affected; the
    /// fotos_laudo foreign key cascades metadata removal.
    pub async fn delete_laudo(&self, id: i32) -> AppResult<u64> {
        let result = Laudo::delete_by_id(id)
            .exec(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete laudo: {}", e)))?;

        Ok(result.rows_affected)
    }
}
