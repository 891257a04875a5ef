use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Fallback shown wherever the backend omitted a display field.
pub const SIN_ESPECIFICAR: &str = "Sin especificar";

// ============================================================================
// Record identity
// ============================================================================

/// Opaque record identity.
///
/// The backend is inconsistent about id types: most endpoints return integers,
/// a few return the same ids as strings. Both deserialize into the canonical
/// string form so equality works across responses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Default)]
pub struct RecordId(pub String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::Number(n) => Ok(RecordId(n.to_string())),
            serde_json::Value::String(s) => Ok(RecordId(s)),
            other => Err(serde::de::Error::custom(format!(
                "id must be a number or string, got {other}"
            ))),
        }
    }
}

// ============================================================================
// Resource record trait
// ============================================================================

/// Implemented by every domain record the console manages.
///
/// `collection_key` names the payload field in the response envelope;
/// `endpoint_path` is the API path the resource store talks to.
pub trait ResourceRecord: Clone {
    fn id(&self) -> &RecordId;

    /// Text fields the search filter matches against.
    fn display_fields(&self) -> Vec<&str>;

    /// Category facet value, when the domain has one.
    fn categoria(&self) -> Option<&str> {
        None
    }

    /// Status facet value, when the domain has one.
    fn estado(&self) -> Option<&str> {
        None
    }

    fn collection_key() -> &'static str;

    fn endpoint_path() -> &'static str;
}

// ============================================================================
// Client-side filtering
// ============================================================================

/// Ephemeral filter state, rebuilt on every change and never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub termino: String,
    pub categoria: Option<String>,
    pub estado: Option<String>,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.termino.trim().is_empty() && self.categoria.is_none() && self.estado.is_none()
    }
}

/// Pure client-side filtering over the already-loaded list: case-insensitive
/// substring match over display fields plus equality facets. Never refetches.
pub fn apply_filter<R: ResourceRecord>(items: &[R], filter: &FilterState) -> Vec<R> {
    if filter.is_empty() {
        return items.to_vec();
    }
    let term = filter.termino.trim().to_lowercase();

    items
        .iter()
        .filter(|item| {
            if !term.is_empty() {
                let matches_term = item
                    .display_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&term));
                if !matches_term {
                    return false;
                }
            }
            if let Some(categoria) = &filter.categoria {
                if item.categoria() != Some(categoria.as_str()) {
                    return false;
                }
            }
            if let Some(estado) = &filter.estado {
                if item.estado() != Some(estado.as_str()) {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect()
}

/// Missing-field fallback used by record accessors.
pub fn o_sin_especificar(value: &str) -> &str {
    if value.trim().is_empty() {
        SIN_ESPECIFICAR
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Ficha {
        id: RecordId,
        nombre: String,
        descripcion: String,
        categoria: String,
        estado: String,
    }

    impl ResourceRecord for Ficha {
        fn id(&self) -> &RecordId {
            &self.id
        }
        fn display_fields(&self) -> Vec<&str> {
            vec![&self.nombre, &self.descripcion]
        }
        fn categoria(&self) -> Option<&str> {
            Some(&self.categoria)
        }
        fn estado(&self) -> Option<&str> {
            Some(&self.estado)
        }
        fn collection_key() -> &'static str {
            "fichas"
        }
        fn endpoint_path() -> &'static str {
            "/api/fichas.php"
        }
    }

    fn ficha(id: &str, nombre: &str, descripcion: &str, categoria: &str, estado: &str) -> Ficha {
        Ficha {
            id: RecordId::new(id),
            nombre: nombre.into(),
            descripcion: descripcion.into(),
            categoria: categoria.into(),
            estado: estado.into(),
        }
    }

    fn muestra() -> Vec<Ficha> {
        vec![
            ficha("1", "Transportes Acme", "Flota de reparto", "transporte", "activa"),
            ficha("2", "Hostelería Sol", "Cadena de restaurantes", "hosteleria", "activa"),
            ficha("3", "ACME Consulting", "Asesoría legal", "servicios", "inactiva"),
        ]
    }

    #[test]
    fn empty_filter_returns_everything() {
        let items = muestra();
        assert_eq!(apply_filter(&items, &FilterState::default()), items);
    }

    #[test]
    fn term_match_is_case_insensitive_substring() {
        let items = muestra();
        let filter = FilterState { termino: "acme".into(), ..Default::default() };
        let result = apply_filter(&items, &filter);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|f| f.nombre.to_lowercase().contains("acme")));
    }

    #[test]
    fn term_matches_any_display_field() {
        let items = muestra();
        let filter = FilterState { termino: "restaurantes".into(), ..Default::default() };
        assert_eq!(apply_filter(&items, &filter).len(), 1);
    }

    #[test]
    fn facets_are_exact_equality() {
        let items = muestra();
        let filter = FilterState {
            termino: String::new(),
            categoria: Some("transporte".into()),
            estado: None,
        };
        let result = apply_filter(&items, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "1");

        // Facet equality does not do substring matching.
        let filter = FilterState {
            categoria: Some("transport".into()),
            ..Default::default()
        };
        assert!(apply_filter(&items, &filter).is_empty());
    }

    #[test]
    fn term_and_facet_combine_as_intersection() {
        let items = muestra();
        let filter = FilterState {
            termino: "acme".into(),
            categoria: None,
            estado: Some("inactiva".into()),
        };
        let result = apply_filter(&items, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "3");
    }

    #[test]
    fn record_id_accepts_numbers_and_strings() {
        let a: RecordId = serde_json::from_str("42").unwrap();
        let b: RecordId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn fallback_for_empty_fields() {
        assert_eq!(o_sin_especificar("  "), SIN_ESPECIFICAR);
        assert_eq!(o_sin_especificar("Acme"), "Acme");
    }
}
