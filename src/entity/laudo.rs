//! Laudo (inspection report) entity.
//!
//! ipa_score/ipa_badge/ipa_notas are always written together with the
//! checklist fields that produced them, never independently.

use sea_orm::entity::prelude::*;
use serde_json::Value as JsonValue;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "laudos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    // Identificação do veículo
    pub placa: String,
    pub vin: String,
    pub motor: Option<String>,
    pub ano_modelo: Option<String>,
    pub crlv_ok: String,
    pub historico_risco: String,

    // Estrutura física
    pub longarinas: String,
    pub colunas: String,
    pub cortafogo: String,
    pub colisao_grave: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub obs_estrutura: Option<String>,

    // Carroceria e pintura
    pub pintura_esp: Option<f64>,
    pub tonalidade: String,
    pub vidros_orig: String,
    pub farois_orig: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub obs_pintura: Option<String>,

    // Anti-enchente
    pub oxidacao: String,
    pub carpetes: String,
    pub odor: String,
    pub eletrico_geral: String,

    // OBD
    pub falhas_obd: String,
    pub km_obd: Option<i64>,
    pub consistencia_km: String,
    pub airbags: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub obs_obd: Option<String>,

    // Mecânica
    pub vazamentos: String,
    pub pneus: String,
    pub suspensao: String,

    // Testes funcionais
    pub direcao: String,
    pub freios: String,
    pub sistema_eletrico: String,

    // Conclusão
    pub status_veiculo: String,
    pub inspetor: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub observacoes_finais: Option<String>,

    // IPA score (computed, never caller-supplied)
    pub ipa_score: i32,
    pub ipa_badge: String,
    #[sea_orm(column_type = "Json")]
    pub ipa_notas: JsonValue,

    // Optimistic concurrency token, incremented on every update
    pub versao: i32,

    pub criado_em: DateTimeUtc,
    pub atualizado_em: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::foto_laudo::Entity")]
    Fotos,
}

impl Related<super::foto_laudo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fotos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
