//! 请求体结构校验：在反序列化之前，对原始 `Value` 只做 presence 检查

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Campo 'origem' é obrigatório")]
    MissingOrigem,

    #[error("Campo 'saida' é obrigatório e deve ser um array não vazio")]
    MissingSaida,

    #[error("Cada configuração em 'saida' deve ter um 'mapa' válido com campos 'Campo' e 'Valor'")]
    InvalidSaidaEntry,
}

/// 校验 `{ origem, saida }` 的结构；通过后才允许进入转换
pub fn validate_body(body: &Value) -> Result<(), ValidationError> {
    if !has_origem(body) {
        return Err(ValidationError::MissingOrigem);
    }

    let saida = match body.get("saida") {
        Some(Value::Array(entries)) if !entries.is_empty() => entries,
        _ => return Err(ValidationError::MissingSaida),
    };

    if !saida.iter().all(valid_config) {
        return Err(ValidationError::InvalidSaidaEntry);
    }

    Ok(())
}

/// `origem` 必须存在且非空：null、空数组、空串、false、0 一律视为缺失
fn has_origem(body: &Value) -> bool {
    match body.get("origem") {
        None | Some(Value::Null) => false,
        Some(Value::Array(arr)) => !arr.is_empty(),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        Some(Value::Object(_)) => true,
    }
}

/// 每条配置必须带非空 `mapa`，且每项含 `Campo` 与 `Valor`（只查 key，不查类型）
fn valid_config(config: &Value) -> bool {
    let Some(mapa) = config.get("mapa").and_then(Value::as_array) else {
        return false;
    };
    if mapa.is_empty() {
        return false;
    }
    mapa.iter()
        .all(|entry| entry.is_object() && entry.get("Campo").is_some() && entry.get("Valor").is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_origem() {
        let body = json!({ "saida": [{ "mapa": [{ "Campo": "a", "Valor": "b" }] }] });
        assert_eq!(validate_body(&body), Err(ValidationError::MissingOrigem));

        let body = json!({ "origem": null, "saida": [] });
        assert_eq!(validate_body(&body), Err(ValidationError::MissingOrigem));

        let body = json!({ "origem": [], "saida": [] });
        assert_eq!(validate_body(&body), Err(ValidationError::MissingOrigem));
    }

    #[test]
    fn test_falsy_origem_rejected() {
        for origem in [json!(false), json!(0), json!(0.0), json!("")] {
            let body = json!({
                "origem": origem,
                "saida": [{ "mapa": [{ "Campo": "a", "Valor": "b" }] }]
            });
            assert_eq!(validate_body(&body), Err(ValidationError::MissingOrigem));
        }

        // 非零标量照常放行
        let body = json!({
            "origem": 1,
            "saida": [{ "mapa": [{ "Campo": "a", "Valor": "b" }] }]
        });
        assert!(validate_body(&body).is_ok());
    }

    #[test]
    fn test_missing_saida() {
        let body = json!({ "origem": { "id": "1" } });
        assert_eq!(validate_body(&body), Err(ValidationError::MissingSaida));

        let body = json!({ "origem": { "id": "1" }, "saida": [] });
        assert_eq!(validate_body(&body), Err(ValidationError::MissingSaida));

        let body = json!({ "origem": { "id": "1" }, "saida": "nope" });
        assert_eq!(validate_body(&body), Err(ValidationError::MissingSaida));
    }

    #[test]
    fn test_invalid_saida_entry() {
        // mapa 缺失
        let body = json!({ "origem": {}, "saida": [{ "desc": "x" }] });
        assert_eq!(validate_body(&body), Err(ValidationError::InvalidSaidaEntry));

        // mapa 为空
        let body = json!({ "origem": {}, "saida": [{ "mapa": [] }] });
        assert_eq!(validate_body(&body), Err(ValidationError::InvalidSaidaEntry));

        // 条目缺 Valor
        let body = json!({ "origem": {}, "saida": [{ "mapa": [{ "Campo": "a" }] }] });
        assert_eq!(validate_body(&body), Err(ValidationError::InvalidSaidaEntry));
    }

    #[test]
    fn test_valid_body() {
        // Tipo 缺省也合法
        let body = json!({
            "origem": { "id": "1" },
            "saida": [{ "desc": "P", "tabela": "T", "mapa": [{ "Campo": "a", "Valor": "b" }] }]
        });
        assert!(validate_body(&body).is_ok());
    }
}
