//! Decoding of the backend's loosely-consistent response envelope.
//!
//! Every endpoint wraps its payload in some variation of
//! `{ success: bool, data|records|<dominio>: [...], message: "..." }`.
//! Older endpoints omit `success`, name the payload after the domain, or
//! return an object map keyed by id instead of an array. This module absorbs
//! all of those shapes in one place.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// Payload field names tried before the domain-specific key.
const GENERIC_KEYS: [&str; 2] = ["data", "records"];

/// Whether the envelope reports success.
///
/// A body without a `success` field counts as success when it carries a
/// recognizable payload; legacy list endpoints return the bare array.
pub fn extract_success(body: &Value) -> bool {
    match body.get("success") {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_i64() == Some(1),
        Some(Value::String(s)) => s == "true" || s == "1",
        _ => body.is_array() || body.get("data").is_some(),
    }
}

/// Server-provided message, if any (`message` or `error`).
pub fn extract_message(body: &Value) -> Option<String> {
    for key in ["message", "error", "mensaje"] {
        if let Some(Value::String(s)) = body.get(key) {
            if !s.is_empty() {
                return Some(s.clone());
            }
        }
    }
    None
}

/// Optional error code from the typed envelope (`{success:false, code, message}`).
pub fn extract_code(body: &Value) -> Option<String> {
    match body.get("code").or_else(|| body.get("codigo")) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Locate the record list inside an envelope.
///
/// Tries, in order: the body itself as a bare array, `data`, `records`, the
/// domain key (`empresas`, `comites`, ...), and one nesting level of each
/// (`data.empresas`). An object map found where an array was expected is
/// coerced by taking its values in key order.
pub fn extract_records(body: &Value, domain_key: &str) -> Option<Vec<Value>> {
    if let Value::Array(items) = body {
        return Some(items.clone());
    }

    let mut candidates: Vec<&Value> = Vec::new();
    for key in GENERIC_KEYS.iter().copied().chain([domain_key]) {
        if let Some(v) = body.get(key) {
            candidates.push(v);
        }
    }

    for candidate in candidates {
        match candidate {
            Value::Array(items) => return Some(items.clone()),
            Value::Object(map) => {
                // `{data: {empresas: [...]}}` — one nesting level.
                if let Some(Value::Array(items)) = map.get(domain_key) {
                    return Some(items.clone());
                }
                // Object map keyed by id: take the values.
                if !map.is_empty() && map.values().all(|v| v.is_object()) {
                    return Some(map.values().cloned().collect());
                }
            }
            _ => {}
        }
    }
    None
}

/// Decode a list response end to end: success check, payload location,
/// per-record deserialization.
///
/// Records that fail to deserialize individually are skipped rather than
/// failing the whole list; the backend is known to interleave malformed rows.
pub fn decode_list<T: DeserializeOwned>(body: &Value, domain_key: &str) -> Result<Vec<T>, ApiError> {
    if !extract_success(body) {
        return Err(ApiError::Server {
            code: extract_code(body),
            message: extract_message(body)
                .unwrap_or_else(|| "operación rechazada por el servidor".to_string()),
        });
    }

    let raw = match extract_records(body, domain_key) {
        Some(raw) => raw,
        None => {
            // `{success:true}` with no payload at all: an empty list, not an error.
            return Ok(Vec::new());
        }
    };

    let mut records = Vec::with_capacity(raw.len());
    let mut skipped = 0usize;
    for value in raw {
        match serde_json::from_value::<T>(value) {
            Ok(record) => records.push(record),
            Err(_) => skipped += 1,
        }
    }
    if skipped > 0 && records.is_empty() {
        return Err(ApiError::InvalidBody(format!(
            "ningún registro de '{domain_key}' tiene la forma esperada ({skipped} descartados)"
        )));
    }
    Ok(records)
}

/// Decode a mutation response: success flag plus optional message.
pub fn decode_ack(body: &Value) -> Result<Option<String>, ApiError> {
    if extract_success(body) {
        Ok(extract_message(body))
    } else {
        Err(ApiError::Server {
            code: extract_code(body),
            message: extract_message(body)
                .unwrap_or_else(|| "operación rechazada por el servidor".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Registro {
        id: i64,
        nombre: String,
    }

    #[test]
    fn canonical_envelope_decodes() {
        let body = json!({"success": true, "data": [{"id": 1, "nombre": "Acme"}]});
        let records: Vec<Registro> = decode_list(&body, "empresas").unwrap();
        assert_eq!(records, vec![Registro { id: 1, nombre: "Acme".into() }]);
    }

    #[test]
    fn domain_key_nested_under_data() {
        let body = json!({"success": true, "data": {"empresas": [{"id": 1, "nombre": "Acme"}]}});
        let records: Vec<Registro> = decode_list(&body, "empresas").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].nombre, "Acme");
    }

    #[test]
    fn bare_array_without_envelope() {
        let body = json!([{"id": 3, "nombre": "Sur"}]);
        let records: Vec<Registro> = decode_list(&body, "comites").unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn object_map_is_coerced_to_values() {
        let body = json!({
            "success": true,
            "records": {"7": {"id": 7, "nombre": "Norte"}, "9": {"id": 9, "nombre": "Este"}}
        });
        let records: Vec<Registro> = decode_list(&body, "comites").unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn success_false_surfaces_server_message() {
        let body = json!({"success": false, "message": "Sesión expirada", "code": "AUTH_01"});
        let err = decode_list::<Registro>(&body, "empresas").unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                code: Some("AUTH_01".into()),
                message: "Sesión expirada".into()
            }
        );
    }

    #[test]
    fn success_without_payload_is_empty_list() {
        let body = json!({"success": true});
        let records: Vec<Registro> = decode_list(&body, "eventos").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let body = json!({"success": true, "data": [
            {"id": 1, "nombre": "Acme"},
            {"id": "no-numérico"}
        ]});
        let records: Vec<Registro> = decode_list(&body, "empresas").unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn numeric_success_flag() {
        let body = json!({"success": 1, "data": []});
        assert!(extract_success(&body));
        let body = json!({"success": 0, "message": "no"});
        assert!(!extract_success(&body));
    }

    #[test]
    fn ack_round_trip() {
        let ok = json!({"success": true, "message": "Empresa creada"});
        assert_eq!(decode_ack(&ok).unwrap(), Some("Empresa creada".into()));

        let bad = json!({"success": false, "mensaje": "Nombre duplicado"});
        let err = decode_ack(&bad).unwrap_err();
        assert!(matches!(err, ApiError::Server { message, .. } if message == "Nombre duplicado"));
    }
}
