//! Laudo domain models and DTOs.
//!
//! Field names on the wire are camelCase, matching the frontend contract
//! (placa, vin, pinturaEsp, ipaScore, ...). Every checklist field has a
//! baseline default meaning "no defect found", so a laudo created with no
//! answered fields scores 100.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::laudo;

/// The full checklist answer set plus vehicle identification and
/// inspector fields, as accepted from and returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct LaudoData {
    // Identificação do veículo
    pub placa: String,
    pub vin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ano_modelo: Option<String>,
    pub crlv_ok: String,
    pub historico_risco: String,

    // Estrutura física
    pub longarinas: String,
    pub colunas: String,
    pub cortafogo: String,
    pub colisao_grave: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obs_estrutura: Option<String>,

    // Carroceria e pintura
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pintura_esp: Option<f64>,
    pub tonalidade: String,
    pub vidros_orig: String,
    pub farois_orig: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obs_pintura: Option<String>,

    // Anti-enchente
    pub oxidacao: String,
    pub carpetes: String,
    pub odor: String,
    pub eletrico_geral: String,

    // OBD
    pub falhas_obd: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub km_obd: Option<i64>,
    pub consistencia_km: String,
    pub airbags: String,
    #[serde(skip_serializing_if = "Option::is_none")]
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observacoes_finais: Option<String>,
}

impl Default for LaudoData {
    fn default() -> Self {
        Self {
            placa: String::new(),
            vin: String::new(),
            motor: None,
            ano_modelo: None,
            crlv_ok: "Sim".to_string(),
            historico_risco: "Não".to_string(),
            longarinas: "Íntegra".to_string(),
            colunas: "Íntegra".to_string(),
            cortafogo: "Original".to_string(),
            colisao_grave: "Não".to_string(),
            obs_estrutura: None,
            pintura_esp: None,
            tonalidade: "Não".to_string(),
            vidros_orig: "Sim".to_string(),
            farois_orig: "Sim".to_string(),
            obs_pintura: None,
            oxidacao: "Não".to_string(),
            carpetes: "Íntegros".to_string(),
            odor: "Não".to_string(),
            eletrico_geral: "Ok".to_string(),
            falhas_obd: "Não".to_string(),
            km_obd: None,
            consistencia_km: "Sim".to_string(),
            airbags: "Ativos".to_string(),
            obs_obd: None,
            vazamentos: "Não".to_string(),
            pneus: "Uniforme".to_string(),
            suspensao: "Ok".to_string(),
            direcao: "Normal".to_string(),
            freios: "Normal".to_string(),
            sistema_eletrico: "Ok".to_string(),
            status_veiculo: "Sem restrições relevantes".to_string(),
            inspetor: String::new(),
            observacoes_finais: None,
        }
    }
}

impl From<&laudo::Model> for LaudoData {
    fn from(m: &laudo::Model) -> Self {
        Self {
            placa: m.placa.clone(),
            vin: m.vin.clone(),
            motor: m.motor.clone(),
            ano_modelo: m.ano_modelo.clone(),
            crlv_ok: m.crlv_ok.clone(),
            historico_risco: m.historico_risco.clone(),
            longarinas: m.longarinas.clone(),
            colunas: m.colunas.clone(),
            cortafogo: m.cortafogo.clone(),
            colisao_grave: m.colisao_grave.clone(),
            obs_estrutura: m.obs_estrutura.clone(),
            pintura_esp: m.pintura_esp,
            tonalidade: m.tonalidade.clone(),
            vidros_orig: m.vidros_orig.clone(),
            farois_orig: m.farois_orig.clone(),
            obs_pintura: m.obs_pintura.clone(),
            oxidacao: m.oxidacao.clone(),
            carpetes: m.carpetes.clone(),
            odor: m.odor.clone(),
            eletrico_geral: m.eletrico_geral.clone(),
            falhas_obd: m.falhas_obd.clone(),
            km_obd: m.km_obd,
            consistencia_km: m.consistencia_km.clone(),
            airbags: m.airbags.clone(),
            obs_obd: m.obs_obd.clone(),
            vazamentos: m.vazamentos.clone(),
            pneus: m.pneus.clone(),
            suspensao: m.suspensao.clone(),
            direcao: m.direcao.clone(),
            freios: m.freios.clone(),
            sistema_eletrico: m.sistema_eletrico.clone(),
            status_veiculo: m.status_veiculo.clone(),
            inspetor: m.inspetor.clone(),
            observacoes_finais: m.observacoes_finais.clone(),
        }
    }
}

/// IPA badge: four-level qualitative label derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum IpaBadge {
    #[serde(rename = "Verde – Excelente")]
    Excelente,
    #[serde(rename = "Amarelo – Bom")]
    Bom,
    #[serde(rename = "Laranja – Atenção")]
    Atencao,
    #[serde(rename = "Vermelho – Risco")]
    Risco,
}

impl IpaBadge {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excelente => "Verde – Excelente",
            Self::Bom => "Amarelo – Bom",
            Self::Atencao => "Laranja – Atenção",
            Self::Risco => "Vermelho – Risco",
        }
    }

    /// Derive the badge from a clamped score, thresholds top-down.
    pub fn from_score(score: i32) -> Self {
        if score >= 85 {
            Self::Excelente
        } else if score >= 70 {
            Self::Bom
        } else if score >= 50 {
            Self::Atencao
        } else {
            Self::Risco
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Verde – Excelente" => Some(Self::Excelente),
            "Amarelo – Bom" => Some(Self::Bom),
            "Laranja – Atenção" => Some(Self::Atencao),
            "Vermelho – Risco" => Some(Self::Risco),
            _ => None,
        }
    }
}

impl std::fmt::Display for IpaBadge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Output of the scoring engine.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct IpaResult {
    /// Integrity score, clamped to [0, 100]
    pub score: i32,
    /// Deduction notes in rule-evaluation order
    pub notas: Vec<String>,
    /// Qualitative badge derived from the score
    pub badge: IpaBadge,
}

/// Full laudo representation returned to clients.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LaudoResponse {
    pub id: i32,
    #[serde(flatten)]
    pub dados: LaudoData,
    pub ipa_score: i32,
    pub ipa_badge: String,
    pub ipa_notas: Vec<String>,
    pub versao: i32,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: DateTime<Utc>,
    pub fotos: Vec<super::foto::FotoResponse>,
}

impl LaudoResponse {
    pub fn from_model(
        model: &laudo::Model,
        fotos: Vec<crate::entity::foto_laudo::Model>,
    ) -> Self {
        let notas = model
            .ipa_notas
            .as_array()
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            id: model.id,
            dados: LaudoData::from(model),
            ipa_score: model.ipa_score,
            ipa_badge: model.ipa_badge.clone(),
            ipa_notas: notas,
            versao: model.versao,
            criado_em: model.criado_em,
            atualizado_em: model.atualizado_em,
            fotos: fotos
                .into_iter()
                .map(super::foto::FotoResponse::from)
                .collect(),
        }
    }
}
