//! Single fetch layer for the whole console.
//!
//! Every store goes through these helpers: cookie-credentialed requests,
//! cache-busting on reads, body classification before JSON decoding, and the
//! envelope tolerance from `contracts::envelope`. Nothing here throws past the
//! boundary; all paths return `Result<_, ApiError>`.

use contracts::envelope::{decode_ack, decode_list};
use contracts::error::{classify_body, ApiError};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use web_sys::RequestCredentials;

/// Base URL for API requests: same origin as the loaded page.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location.host().unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}", protocol, host)
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Append a cache-busting timestamp; the backend sits behind an aggressive
/// proxy cache that otherwise serves stale lists.
fn with_cache_bust(url: &str) -> String {
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{}{}_={}", url, sep, js_sys::Date::now() as u64)
}

async fn read_body(response: gloo_net::http::Response) -> Result<Value, ApiError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    classify_body(status, &text)?;
    serde_json::from_str(&text)
        .map_err(|e| ApiError::InvalidBody(format!("JSON mal formado: {e}")))
}

/// GET a record list: `<path>?action=listar&_=<ts>`.
pub async fn get_list<T: DeserializeOwned>(
    path: &str,
    domain_key: &str,
) -> Result<Vec<T>, ApiError> {
    let url = with_cache_bust(&format!("{}?action=listar", api_url(path)));
    let response = Request::get(&url)
        .header("Accept", "application/json")
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let body = read_body(response).await?;
    decode_list(&body, domain_key)
}

/// GET a single envelope body (auth probes, dashboard aggregates).
pub async fn get_envelope(path: &str) -> Result<Value, ApiError> {
    let url = with_cache_bust(&api_url(path));
    let response = Request::get(&url)
        .header("Accept", "application/json")
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_body(response).await
}

/// POST a mutation as a JSON body tagged with an explicit `action` field
/// (`crear`/`actualizar`/`eliminar`). Returns the server message, if any.
pub async fn post_action<B: Serialize>(
    path: &str,
    action: &str,
    payload: &B,
) -> Result<Option<String>, ApiError> {
    let mut body = serde_json::to_value(payload)
        .map_err(|e| ApiError::InvalidBody(format!("no se pudo serializar la petición: {e}")))?;
    match &mut body {
        Value::Object(map) => {
            map.insert("action".to_string(), Value::String(action.to_string()));
        }
        _ => {
            return Err(ApiError::InvalidBody(
                "el cuerpo de una mutación debe ser un objeto".to_string(),
            ))
        }
    }

    let response = Request::post(&api_url(path))
        .header("Accept", "application/json")
        .credentials(RequestCredentials::Include)
        .json(&body)
        .map_err(|e| ApiError::InvalidBody(format!("no se pudo serializar la petición: {e}")))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let body = read_body(response).await?;
    decode_ack(&body)
}

/// Extract a single payload object (`data`, `usuario`, or the body itself)
/// and deserialize it.
pub fn decode_object<T: DeserializeOwned>(body: &Value, keys: &[&str]) -> Result<T, ApiError> {
    let candidate = keys
        .iter()
        .find_map(|k| body.get(*k))
        .unwrap_or(body);
    serde_json::from_value(candidate.clone())
        .map_err(|e| ApiError::InvalidBody(format!("el objeto no tiene la forma esperada: {e}")))
}
