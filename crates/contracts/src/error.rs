use std::fmt;

/// Typed API failure taxonomy.
///
/// The backend historically signalled failures three different ways: fetch
/// rejections, non-2xx statuses with arbitrary bodies (often PHP fatal-error
/// HTML), and `{success:false}` envelopes. All of them collapse into this enum
/// at the fetch layer so call sites discriminate on variants instead of
/// sniffing response text.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never completed (DNS, connection reset, CORS).
    Network(String),
    /// Non-2xx response whose body was not a recognizable error envelope.
    Http { status: u16, message: String },
    /// The body was not JSON at all (HTML error page, PHP fatal error dump).
    InvalidBody(String),
    /// Application-level failure: `{success:false, message}`.
    Server {
        code: Option<String>,
        message: String,
    },
}

impl ApiError {
    /// Message suitable for a user-facing toast.
    ///
    /// Server-provided messages surface verbatim; transport-level failures get
    /// a generic Spanish description with the detail appended.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(detail) => {
                format!("Error de conexión con el servidor ({detail})")
            }
            ApiError::Http { status, .. } => {
                format!("El servidor respondió con un error (HTTP {status})")
            }
            ApiError::InvalidBody(detail) => {
                format!("Respuesta inválida del servidor: {detail}")
            }
            ApiError::Server { message, .. } => message.clone(),
        }
    }

    /// True when retrying the same request later can plausibly succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ApiError::Network(_) | ApiError::Http { status: 500..=599, .. }
        )
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(detail) => write!(f, "network error: {detail}"),
            ApiError::Http { status, message } => {
                write!(f, "HTTP {status}: {message}")
            }
            ApiError::InvalidBody(detail) => write!(f, "invalid body: {detail}"),
            ApiError::Server { code, message } => match code {
                Some(code) => write!(f, "server error [{code}]: {message}"),
                None => write!(f, "server error: {message}"),
            },
        }
    }
}

/// Markers that identify an HTML or PHP error page masquerading as JSON.
const NON_JSON_MARKERS: [&str; 5] = [
    "<!DOCTYPE",
    "<!doctype",
    "<html",
    "Fatal error",
    "Parse error",
];

/// Classify a raw response body before attempting JSON decoding.
///
/// A misconfigured backend answers with an HTML error page (often containing a
/// PHP "Fatal error" dump) instead of the JSON envelope. Detecting that here
/// turns a cryptic parse exception into a descriptive [`ApiError`].
///
/// Returns `Ok(())` when the body looks safe to hand to the JSON decoder.
pub fn classify_body(status: u16, text: &str) -> Result<(), ApiError> {
    let head = text.trim_start();
    if NON_JSON_MARKERS.iter().any(|marker| head.contains(marker)) {
        let detail = if head.contains("Fatal error") || head.contains("Parse error") {
            "el servidor devolvió un error de PHP en lugar de JSON"
        } else {
            "el servidor devolvió HTML en lugar de JSON"
        };
        return Err(ApiError::InvalidBody(detail.to_string()));
    }
    if !(200..300).contains(&status) {
        return Err(ApiError::Http {
            status,
            message: head.chars().take(200).collect(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_body_is_invalid_regardless_of_status() {
        let err = classify_body(200, "<!DOCTYPE html><html>...</html>").unwrap_err();
        assert!(matches!(err, ApiError::InvalidBody(_)));
    }

    #[test]
    fn php_fatal_error_is_reported_descriptively() {
        let err = classify_body(500, "<html>Fatal error: Call to undefined function</html>")
            .unwrap_err();
        match err {
            ApiError::InvalidBody(detail) => assert!(detail.contains("PHP")),
            other => panic!("expected InvalidBody, got {other:?}"),
        }
    }

    #[test]
    fn non_2xx_json_body_maps_to_http_error() {
        let err = classify_body(503, "{\"estado\":\"mantenimiento\"}").unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 503,
                message: "{\"estado\":\"mantenimiento\"}".to_string()
            }
        );
    }

    #[test]
    fn plain_json_passes_through() {
        assert!(classify_body(200, "{\"success\":true}").is_ok());
    }

    #[test]
    fn transient_classification() {
        assert!(ApiError::Network("timeout".into()).is_transient());
        assert!(ApiError::Http { status: 502, message: String::new() }.is_transient());
        assert!(!ApiError::Server { code: None, message: "duplicado".into() }.is_transient());
    }
}
