//! Structural validation of sanitized laudo field maps.
//!
//! Rules are evaluated independently and every violation is collected,
//! so the caller always sees the complete error list. The validator
//! inspects the already-sanitized map and never mutates it.

use serde_json::Value;

use crate::error::AppError;
use crate::models::LaudoData;

use super::sanitize::sanitize;

/// Result of structural validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub valido: bool,
    pub erros: Vec<String>,
}

/// Validate a Brazilian plate: legacy `LLLDDDD` or Mercosul `LLLDLDD`.
/// Hyphen- and whitespace-tolerant, case-insensitive.
pub fn placa_valida(placa: &str) -> bool {
    let limpa: Vec<char> = placa
        .to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();

    if limpa.len() != 7 {
        return false;
    }

    let letra = |c: &char| c.is_ascii_uppercase();
    let digito = |c: &char| c.is_ascii_digit();

    let antigo = limpa[..3].iter().all(letra) && limpa[3..].iter().all(digito);
    let mercosul = limpa[..3].iter().all(letra)
        && digito(&limpa[3])
        && letra(&limpa[4])
        && digito(&limpa[5])
        && digito(&limpa[6]);

    antigo || mercosul
}

/// Validate a VIN: exactly 17 characters from `A-H J-N P R-Z 0-9`
/// (letters I, O and Q are excluded). Hyphen- and whitespace-tolerant.
pub fn vin_valido(vin: &str) -> bool {
    let limpo: Vec<char> = vin
        .to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();

    limpo.len() == 17
        && limpo
            .iter()
            .all(|c| matches!(c, 'A'..='H' | 'J'..='N' | 'P' | 'R'..='Z' | '0'..='9'))
}

/// Validate mandatory identifying fields, collecting every violation.
fn validar_obrigatorios(data: &Value, erros: &mut Vec<String>) {
    match data.get("placa").and_then(Value::as_str) {
        None | Some("") => erros.push("Placa é obrigatória".to_string()),
        Some(placa) if !placa_valida(placa) => {
            erros.push("Formato da placa inválido".to_string());
        }
        _ => {}
    }

    match data.get("vin").and_then(Value::as_str) {
        None | Some("") => erros.push("Chassi/VIN é obrigatório".to_string()),
        Some(vin) if !vin_valido(vin) => {
            erros.push("Formato do chassi/VIN inválido".to_string());
        }
        _ => {}
    }

    let inspetor = data.get("inspetor").and_then(Value::as_str).unwrap_or("");
    if inspetor.trim().is_empty() {
        erros.push("Nome do inspetor é obrigatório".to_string());
    }
}

/// Bounds-check numeric fields when present. A present value that is not
/// a number (the sanitizer left an unparsable string) is a violation too.
fn validar_numericos(data: &Value, erros: &mut Vec<String>) {
    if let Some(v) = data.get("pinturaEsp") {
        match v.as_f64() {
            Some(esp) if (0.0..=500.0).contains(&esp) => {}
            _ => erros.push("Espessura de pintura deve estar entre 0 e 500 μm".to_string()),
        }
    }

    if let Some(v) = data.get("kmObd") {
        match v.as_f64() {
            Some(km) if (0.0..=9_999_999.0).contains(&km) => {}
            _ => erros.push("Quilometragem OBD inválida".to_string()),
        }
    }
}

/// Validate an already-sanitized field map. `valido` is true iff the
/// error list is empty.
pub fn validate(sanitized: &Value) -> ValidationReport {
    let mut erros = Vec::new();

    validar_obrigatorios(sanitized, &mut erros);
    validar_numericos(sanitized, &mut erros);

    ValidationReport {
        valido: erros.is_empty(),
        erros,
    }
}

/// Sanitize then validate a raw field map, producing the typed checklist
/// on success and the complete error list on failure.
pub fn sanitizar_e_validar(raw: &Value) -> Result<LaudoData, AppError> {
    let sanitized = sanitize(raw);

    let report = validate(&sanitized);
    if !report.valido {
        return Err(AppError::Validation(report.erros));
    }

    let data: LaudoData = serde_json::from_value(sanitized)?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_placa_formats() {
        assert!(placa_valida("ABC1234"));
        assert!(placa_valida("abc-1234"));
        assert!(placa_valida("ABC1D23"));
        assert!(placa_valida("abc-1d23"));
        assert!(!placa_valida("AB1234")); // too short
        assert!(!placa_valida("ABCD1234")); // too long
        assert!(!placa_valida("1BC1234")); // digit where letter expected
        assert!(!placa_valida("ABC12D4")); // Mercosul letter misplaced
        assert!(!placa_valida(""));
    }

    #[test]
    fn test_vin_formats() {
        assert!(vin_valido("9BWZZZ377VT004251"));
        assert!(vin_valido("9bw-zzz 377vt004251")); // tolerant of separators
        assert!(!vin_valido("9BWZZZ377VT00425")); // 16 chars
        assert!(!vin_valido("9BWZZZ377VT00425O")); // letter O
        assert!(!vin_valido("9BWZZZ377VT00425I")); // letter I
        assert!(!vin_valido("9BWZZZ377VT00425Q")); // letter Q
    }

    #[test]
    fn test_all_violations_collected() {
        let report = validate(&json!({
            "placa": "AB1234",
            "vin": "SHORT",
            "inspetor": "   ",
            "pinturaEsp": 600,
            "kmObd": -1
        }));

        assert!(!report.valido);
        assert_eq!(
            report.erros,
            vec![
                "Formato da placa inválido",
                "Formato do chassi/VIN inválido",
                "Nome do inspetor é obrigatório",
                "Espessura de pintura deve estar entre 0 e 500 μm",
                "Quilometragem OBD inválida",
            ]
        );
    }

    #[test]
    fn test_missing_mandatory_fields() {
        let report = validate(&json!({}));
        assert_eq!(
            report.erros,
            vec![
                "Placa é obrigatória",
                "Chassi/VIN é obrigatório",
                "Nome do inspetor é obrigatório",
            ]
        );
    }

    #[test]
    fn test_absent_numerics_are_not_checked() {
        let report = validate(&json!({
            "placa": "ABC1234",
            "vin": "9BWZZZ377VT004251",
            "inspetor": "Maria"
        }));
        assert!(report.valido);
        assert!(report.erros.is_empty());
    }

    #[test]
    fn test_numeric_bounds() {
        let base = json!({
            "placa": "ABC1234",
            "vin": "9BWZZZ377VT004251",
            "inspetor": "Maria"
        });

        let mut ok = base.clone();
        ok["pinturaEsp"] = json!(0);
        ok["kmObd"] = json!(9_999_999);
        assert!(validate(&ok).valido);

        let mut bad = base.clone();
        bad["pinturaEsp"] = json!(500.1);
        assert!(!validate(&bad).valido);

        let mut bad = base;
        bad["kmObd"] = json!(10_000_000);
        assert!(!validate(&bad).valido);
    }

    #[test]
    fn test_sanitizar_e_validar_happy_path() {
        let data = sanitizar_e_validar(&json!({
            "placa": " abc-1234 ",
            "vin": "9bwzzz377vt004251",
            "inspetor": " Maria ",
            "pinturaEsp": "120"
        }))
        .unwrap();

        assert_eq!(data.placa, "ABC1234");
        assert_eq!(data.vin, "9BWZZZ377VT004251");
        assert_eq!(data.inspetor, "Maria");
        assert_eq!(data.pintura_esp, Some(120.0));
    }

    #[test]
    fn test_sanitizar_e_validar_collects_errors() {
        let err = sanitizar_e_validar(&json!({"placa": "AB1234"})).unwrap_err();
        match err {
            crate::error::AppError::Validation(erros) => {
                assert_eq!(erros.len(), 3);
                assert_eq!(erros[0], "Formato da placa inválido");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
