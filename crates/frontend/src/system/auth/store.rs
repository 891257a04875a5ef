use contracts::system::auth::{AuthPhase, SessionUser};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::api::{self, ProbeOutcome};
use crate::shared::toast::ToastService;

/// How often the live session is re-checked in the background.
const RECHECK_INTERVAL_MS: u32 = 300_000;

/// The single owner of authentication state for the whole page.
///
/// Exactly one instance exists, provided via context at the app root; every
/// UI region that cares about the session subscribes to the same signal.
/// There is deliberately no second reconciler and no override escape hatch:
/// with one owner there is nothing to race against.
#[derive(Clone, Copy)]
pub struct SessionStore {
    phase: RwSignal<AuthPhase>,
    toast: ToastService,
}

impl SessionStore {
    pub fn new(toast: ToastService) -> Self {
        Self {
            phase: RwSignal::new(AuthPhase::Unknown),
            toast,
        }
    }

    /// Reactive read of the current phase.
    pub fn phase(&self) -> AuthPhase {
        self.phase.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase.with(|p| p.is_authenticated())
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.phase.with(|p| p.user().cloned())
    }

    /// Probe the backend and settle on Authenticated/Unauthenticated.
    ///
    /// Unreachable endpoints resolve to Unauthenticated: the old
    /// referrer/grace-window guesses are gone on purpose, the server answer
    /// is the only source of truth.
    pub fn check(self) {
        if self.phase.with_untracked(|p| *p == AuthPhase::Checking) {
            return;
        }
        self.phase.set(AuthPhase::Checking);
        spawn_local(async move {
            let next = match api::probe_session().await {
                ProbeOutcome::Active(user) => AuthPhase::Authenticated(user),
                ProbeOutcome::NoSession => AuthPhase::Unauthenticated,
                ProbeOutcome::Unreachable(err) => {
                    log::warn!("ningún endpoint de sesión respondió: {err}");
                    AuthPhase::Unauthenticated
                }
            };
            self.phase.set(next);
        });
    }

    /// Background re-check while the page lives.
    ///
    /// Unlike [`check`], the phase never passes through `Checking`: the open
    /// page (and any modal on it) must not unmount while the probe runs. An
    /// unreachable backend keeps a live session; only a definitive
    /// `NoSession` locks the page.
    pub fn start_periodic_recheck(self) {
        spawn_local(async move {
            loop {
                TimeoutFuture::new(RECHECK_INTERVAL_MS).await;

                let outcome = api::probe_session().await;
                if let ProbeOutcome::Unreachable(err) = &outcome {
                    log::warn!("re-chequeo de sesión sin respuesta: {err}");
                }
                let actual = self.phase.get_untracked();
                if let Some(siguiente) = fase_tras_recheck(&actual, &outcome) {
                    if siguiente == AuthPhase::Unauthenticated && actual.is_authenticated() {
                        self.toast.warning("La sesión ha caducado");
                    }
                    if siguiente != actual {
                        self.phase.set(siguiente);
                    }
                }
            }
        });
    }

    /// Attempt a login; on success the whole page unlocks through the shared
    /// signal. Returns the error message for the form when it fails.
    pub async fn login(self, email: String, password: String) -> Result<(), String> {
        match api::login(email, password).await {
            Ok(user) => {
                self.toast
                    .success(format!("Bienvenido, {}", user.nombre_mostrado()));
                self.phase.set(AuthPhase::Authenticated(user));
                Ok(())
            }
            Err(err) => Err(err.user_message()),
        }
    }

    pub fn logout(self) {
        spawn_local(async move {
            if let Err(err) = api::logout().await {
                // The cookie may already be gone; lock the UI regardless.
                log::warn!("cierre de sesión con error: {err}");
            }
            self.phase.set(AuthPhase::Unauthenticated);
            self.toast.info("Sesión cerrada");
        });
    }
}

/// Phase transition of a background re-check. `None` keeps the current
/// phase untouched.
fn fase_tras_recheck(actual: &AuthPhase, outcome: &ProbeOutcome) -> Option<AuthPhase> {
    match outcome {
        ProbeOutcome::Active(user) => Some(AuthPhase::Authenticated(user.clone())),
        ProbeOutcome::NoSession => Some(AuthPhase::Unauthenticated),
        // No answer is not "no session": a network blip must not lock out a
        // page someone is working in.
        ProbeOutcome::Unreachable(_) => match actual {
            AuthPhase::Authenticated(_) => None,
            _ => Some(AuthPhase::Unauthenticated),
        },
    }
}

/// Hook to access the session store.
pub fn use_session() -> SessionStore {
    use_context::<SessionStore>().expect("SessionStore not provided in context (provide it in app root)")
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::error::ApiError;

    fn usuario(nombre: &str) -> SessionUser {
        SessionUser {
            nombre: nombre.to_string(),
            ..SessionUser::default()
        }
    }

    #[test]
    fn outage_during_recheck_keeps_live_session() {
        let actual = AuthPhase::Authenticated(usuario("Ana"));
        let outcome = ProbeOutcome::Unreachable(ApiError::Network("reset".into()));
        assert_eq!(fase_tras_recheck(&actual, &outcome), None);
    }

    #[test]
    fn definitive_no_session_locks_the_page() {
        let actual = AuthPhase::Authenticated(usuario("Ana"));
        assert_eq!(
            fase_tras_recheck(&actual, &ProbeOutcome::NoSession),
            Some(AuthPhase::Unauthenticated)
        );
    }

    #[test]
    fn recheck_never_passes_through_checking() {
        let actual = AuthPhase::Authenticated(usuario("Ana"));
        let outcome = ProbeOutcome::Active(usuario("Ana B."));
        // The probe refreshes the user in place; at no point does the phase
        // become `Checking`, so the page stays mounted.
        assert_eq!(
            fase_tras_recheck(&actual, &outcome),
            Some(AuthPhase::Authenticated(usuario("Ana B.")))
        );
    }

    #[test]
    fn outage_without_session_stays_locked() {
        let outcome = ProbeOutcome::Unreachable(ApiError::Network("reset".into()));
        assert_eq!(
            fase_tras_recheck(&AuthPhase::Unauthenticated, &outcome),
            Some(AuthPhase::Unauthenticated)
        );
    }
}
