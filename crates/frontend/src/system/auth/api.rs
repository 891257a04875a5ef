use contracts::envelope::extract_success;
use contracts::error::ApiError;
use contracts::system::auth::{LoginRequest, SessionUser};

use crate::shared::api;

/// Session endpoints probed in fixed fallback order. The backend has been
/// deployed under all three paths at different times; the first reachable one
/// wins.
const SESSION_PROBE_PATHS: [&str; 3] = [
    "/api/auth/sesion.php",
    "/api/auth/verificar.php",
    "/api/verificar_sesion.php",
];

/// Outcome of a session probe round.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome {
    /// A probe answered `{success:true, data}`.
    Active(SessionUser),
    /// A probe answered definitively that there is no session.
    NoSession,
    /// Every endpoint failed at the transport level.
    Unreachable(ApiError),
}

/// Ask the backend whether a session cookie is live.
///
/// The first endpoint that answers decides; transport failures fall through
/// to the next path. There are no client-side heuristics here: when every
/// endpoint is unreachable the caller treats the visitor as unauthenticated.
pub async fn probe_session() -> ProbeOutcome {
    let mut last_error = ApiError::Network("sin respuesta de ningún endpoint".to_string());

    for path in SESSION_PROBE_PATHS {
        match api::get_envelope(path).await {
            Ok(body) => {
                if extract_success(&body) {
                    match api::decode_object::<SessionUser>(&body, &["data", "usuario"]) {
                        Ok(user) => return ProbeOutcome::Active(user),
                        Err(err) => {
                            log::warn!("sesión activa pero usuario ilegible en {path}: {err}");
                            last_error = err;
                        }
                    }
                } else {
                    return ProbeOutcome::NoSession;
                }
            }
            Err(err) => {
                log::debug!("probe de sesión fallido en {path}: {err}");
                last_error = err;
            }
        }
    }
    ProbeOutcome::Unreachable(last_error)
}

/// Log in with email and password. The session itself travels back as a
/// cookie; the response body only carries the user for display.
pub async fn login(email: String, password: String) -> Result<SessionUser, ApiError> {
    let request = LoginRequest { email, password };
    api::post_action("/api/auth/login.php", "login", &request).await?;

    // The login response ack has no stable user shape across deployments;
    // re-probe so the displayed user always comes from the same source.
    match probe_session().await {
        ProbeOutcome::Active(user) => Ok(user),
        ProbeOutcome::NoSession => Err(ApiError::Server {
            code: None,
            message: "La sesión no quedó establecida tras el acceso".to_string(),
        }),
        ProbeOutcome::Unreachable(err) => Err(err),
    }
}

/// Close the session server-side.
pub async fn logout() -> Result<(), ApiError> {
    api::post_action("/api/auth/logout.php", "logout", &serde_json::json!({})).await?;
    Ok(())
}
