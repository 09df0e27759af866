//! IPA scoring engine.
//!
//! Pure and deterministic: maps a sanitized, validated checklist to a
//! score in [0, 100], an ordered list of deduction notes and a badge.
//! This is the single implementation of the rule; both the preview
//! endpoint and the persistence path call it, so client-displayed and
//! stored scores cannot drift.

use crate::models::{IpaBadge, IpaResult, LaudoData};

/// Compute the IPA score for a checklist.
///
/// Starts at 100 and applies a fixed, ordered table of independent
/// deduction rules. Deductions are cumulative (never capped per rule)
/// and notes are appended in rule-evaluation order. The running total is
/// clamped to [0, 100] exactly once, after every rule has been evaluated.
///
/// An all-default checklist yields exactly
/// `{score: 100, notas: [], badge: Verde – Excelente}`.
pub fn calc_ipa(data: &LaudoData) -> IpaResult {
    let mut score: i32 = 100;
    let mut notas: Vec<String> = Vec::new();

    if data.longarinas != "Íntegra" {
        score -= 25;
        notas.push("Longarinas com reparos/indícios".to_string());
    }
    if data.colunas != "Íntegra" {
        score -= 20;
        notas.push("Colunas com reparos/indícios".to_string());
    }
    if data.cortafogo != "Original" {
        score -= 10;
        notas.push("Painel corta-fogo alterado".to_string());
    }
    if data.colisao_grave == "Sim" {
        score -= 35;
        notas.push("Sinais de colisão grave".to_string());
    }
    if data.tonalidade == "Sim" {
        score -= 5;
        notas.push("Diferença de tonalidade".to_string());
    }
    if data.vidros_orig == "Não" {
        score -= 3;
        notas.push("Vidros não originais".to_string());
    }
    if data.farois_orig == "Não" {
        score -= 3;
        notas.push("Faróis não originais".to_string());
    }
    if let Some(esp) = data.pintura_esp {
        if esp > 180.0 || esp < 70.0 {
            score -= 5;
            notas.push("Espessura de pintura fora do padrão".to_string());
        }
    }
    // Light and moderate corrosion deduct silently
    if data.oxidacao == "Leve" {
        score -= 5;
    }
    if data.oxidacao == "Moderada" {
        score -= 12;
    }
    if data.oxidacao == "Grave" {
        score -= 25;
        notas.push("Oxidação significativa (enchente?)".to_string());
    }
    if data.carpetes == "Sinais de água" {
        score -= 15;
        notas.push("Carpetes/forros com sinais de água".to_string());
    }
    if data.odor == "Sim" {
        score -= 8;
        notas.push("Odor de umidade".to_string());
    }
    if data.eletrico_geral == "Irregular" {
        score -= 10;
        notas.push("Sistema elétrico irregular".to_string());
    }
    if data.falhas_obd == "Sim" {
        score -= 10;
        notas.push("Falhas registradas no OBD".to_string());
    }
    if data.consistencia_km == "Não" {
        score -= 20;
        notas.push("Inconsistência de quilometragem".to_string());
    }
    if data.airbags == "Falha detectada" {
        score -= 12;
        notas.push("Falha de airbags".to_string());
    }
    if data.vazamentos == "Sim" {
        score -= 8;
        notas.push("Vazamentos visíveis".to_string());
    }
    if data.pneus == "Desgaste irregular" {
        score -= 5;
        notas.push("Pneus com desgaste irregular".to_string());
    }
    if data.suspensao == "Irregularidades" {
        score -= 6;
        notas.push("Irregularidades na suspensão".to_string());
    }
    if data.direcao == "Anomalia" {
        score -= 7;
        notas.push("Anomalia na direção".to_string());
    }
    if data.freios == "Anomalia" {
        score -= 8;
        notas.push("Anomalia nos freios".to_string());
    }
    if data.sistema_eletrico == "Falha" {
        score -= 5;
        notas.push("Falha no sistema elétrico".to_string());
    }
    if !data.historico_risco.is_empty() && data.historico_risco != "Não" {
        score -= 10;
        notas.push(format!("Histórico: {}", data.historico_risco));
    }
    if data.crlv_ok == "Não" {
        score -= 5;
        notas.push("CRLV/CRV não conferido".to_string());
    }

    // Single clamp, after all rules
    let score = score.clamp(0, 100);

    IpaResult {
        score,
        badge: IpaBadge::from_score(score),
        notas,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_defaults_score_exactly_100() {
        let result = calc_ipa(&LaudoData::default());
        assert_eq!(result.score, 100);
        assert!(result.notas.is_empty());
        assert_eq!(result.badge, IpaBadge::Excelente);
    }

    #[test]
    fn test_deductions_are_cumulative_not_capped_per_category() {
        let data = LaudoData {
            colisao_grave: "Sim".to_string(),
            colunas: "Reparada".to_string(),
            ..Default::default()
        };

        let result = calc_ipa(&data);
        assert_eq!(result.score, 100 - 35 - 20);
        assert_eq!(result.badge, IpaBadge::Risco);
        // Notes follow rule-table order: colunas precedes colisão
        assert_eq!(
            result.notas,
            vec!["Colunas com reparos/indícios", "Sinais de colisão grave"]
        );
    }

    #[test]
    fn test_score_clamped_to_zero_once_at_the_end() {
        let data = LaudoData {
            longarinas: "Comprometida".to_string(),
            colunas: "Reparada".to_string(),
            cortafogo: "Alterado".to_string(),
            colisao_grave: "Sim".to_string(),
            oxidacao: "Grave".to_string(),
            carpetes: "Sinais de água".to_string(),
            odor: "Sim".to_string(),
            eletrico_geral: "Irregular".to_string(),
            falhas_obd: "Sim".to_string(),
            consistencia_km: "Não".to_string(),
            airbags: "Falha detectada".to_string(),
            vazamentos: "Sim".to_string(),
            pneus: "Desgaste irregular".to_string(),
            suspensao: "Irregularidades".to_string(),
            direcao: "Anomalia".to_string(),
            freios: "Anomalia".to_string(),
            sistema_eletrico: "Falha".to_string(),
            historico_risco: "Leilão".to_string(),
            crlv_ok: "Não".to_string(),
            ..Default::default()
        };

        let result = calc_ipa(&data);
        assert_eq!(result.score, 0);
        assert_eq!(result.badge, IpaBadge::Risco);
    }

    #[test]
    fn test_corrosion_levels() {
        let leve = calc_ipa(&LaudoData {
            oxidacao: "Leve".to_string(),
            ..Default::default()
        });
        assert_eq!(leve.score, 95);
        assert!(leve.notas.is_empty()); // silent deduction

        let moderada = calc_ipa(&LaudoData {
            oxidacao: "Moderada".to_string(),
            ..Default::default()
        });
        assert_eq!(moderada.score, 88);
        assert!(moderada.notas.is_empty());

        let grave = calc_ipa(&LaudoData {
            oxidacao: "Grave".to_string(),
            ..Default::default()
        });
        assert_eq!(grave.score, 75);
        assert_eq!(grave.notas, vec!["Oxidação significativa (enchente?)"]);
    }

    #[test]
    fn test_paint_thickness_window() {
        let fina = calc_ipa(&LaudoData {
            pintura_esp: Some(69.9),
            ..Default::default()
        });
        assert_eq!(fina.score, 95);

        let grossa = calc_ipa(&LaudoData {
            pintura_esp: Some(180.1),
            ..Default::default()
        });
        assert_eq!(grossa.score, 95);

        let normal = calc_ipa(&LaudoData {
            pintura_esp: Some(120.0),
            ..Default::default()
        });
        assert_eq!(normal.score, 100);

        // Absent thickness never triggers the rule
        let ausente = calc_ipa(&LaudoData::default());
        assert_eq!(ausente.score, 100);
    }

    #[test]
    fn test_boundary_thicknesses_do_not_deduct() {
        for esp in [70.0, 180.0] {
            let result = calc_ipa(&LaudoData {
                pintura_esp: Some(esp),
                ..Default::default()
            });
            assert_eq!(result.score, 100, "thickness {esp} should not deduct");
        }
    }

    #[test]
    fn test_historico_risco_note_interpolates_value() {
        let result = calc_ipa(&LaudoData {
            historico_risco: "Sinistro de enchente".to_string(),
            ..Default::default()
        });
        assert_eq!(result.score, 90);
        assert_eq!(result.notas, vec!["Histórico: Sinistro de enchente"]);
    }

    #[test]
    fn test_notes_are_byte_stable_across_runs() {
        let data = LaudoData {
            longarinas: "Reparada".to_string(),
            odor: "Sim".to_string(),
            freios: "Anomalia".to_string(),
            ..Default::default()
        };

        let first = calc_ipa(&data);
        let second = calc_ipa(&data);
        assert_eq!(first, second);
        assert_eq!(
            first.notas,
            vec![
                "Longarinas com reparos/indícios",
                "Odor de umidade",
                "Anomalia nos freios"
            ]
        );
    }

    #[test]
    fn test_badge_bands_from_realistic_checklists() {
        // -12 moderate corrosion -> 88, still excellent
        let bom = calc_ipa(&LaudoData {
            oxidacao: "Moderada".to_string(),
            ..Default::default()
        });
        assert_eq!(bom.badge, IpaBadge::Excelente);

        // -25 -> 75, good
        let atencao = calc_ipa(&LaudoData {
            longarinas: "Reparada".to_string(),
            ..Default::default()
        });
        assert_eq!(atencao.badge, IpaBadge::Bom);

        // -35 -> 65, attention
        let risco = calc_ipa(&LaudoData {
            colisao_grave: "Sim".to_string(),
            ..Default::default()
        });
        assert_eq!(risco.badge, IpaBadge::Atencao);
    }
}
