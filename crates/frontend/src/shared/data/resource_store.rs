//! The generalized resource manager: one store per domain, constructed once
//! at bootstrap, owning the list state, CRUD lifecycle, filtering, and the
//! silent-refresh poller for its endpoint.

use contracts::domain::common::{apply_filter, FilterState, RecordId, ResourceRecord};
use contracts::error::ApiError;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;

use super::list_state::{ListState, LoadPhase, RefreshBackoff};
use crate::shared::api;
use crate::shared::toast::ToastService;

/// Base interval of the background poller.
const SILENT_REFRESH_MS: u32 = 30_000;
/// Backoff cap after repeated poll failures.
const SILENT_REFRESH_MAX_MS: u32 = 300_000;

/// Body of a delete request, or `None` when the confirmation was declined.
/// Without a payload nothing leaves the store.
fn payload_de_eliminacion(id: RecordId, confirmed: bool) -> Option<serde_json::Value> {
    confirmed.then(|| serde_json::json!({ "id": id }))
}

/// Browser confirmation dialog. Destructive operations go through this before
/// any network call is issued.
pub fn confirmar(mensaje: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(mensaje).unwrap_or(false))
        .unwrap_or(false)
}

pub struct ResourceStore<R: Send + Sync + 'static> {
    state: RwSignal<ListState<R>>,
    filter: RwSignal<FilterState>,
    started: StoredValue<bool>,
    backoff: StoredValue<RefreshBackoff>,
    toast: ToastService,
}

// The store only holds handles, so it is Copy even when `R` is not; a derive
// would bound both impls on `R`.
impl<R: Send + Sync + 'static> Clone for ResourceStore<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Send + Sync + 'static> Copy for ResourceStore<R> {}

impl<R> ResourceStore<R>
where
    R: ResourceRecord + DeserializeOwned + Send + Sync + 'static,
{
    pub fn new(toast: ToastService) -> Self {
        Self {
            state: RwSignal::new(ListState::new()),
            filter: RwSignal::new(FilterState::default()),
            started: StoredValue::new(false),
            backoff: StoredValue::new(RefreshBackoff::new(
                SILENT_REFRESH_MS,
                SILENT_REFRESH_MAX_MS,
            )),
            toast,
        }
    }

    /// First mount of a page for this domain: load once and start the poller.
    /// Subsequent mounts are no-ops; the store outlives the pages.
    pub fn ensure_started(self) {
        if self.started.get_value() {
            return;
        }
        self.started.set_value(true);
        self.load();
        self.start_polling();
    }

    // ------------------------------------------------------------------
    // Read side (reactive)
    // ------------------------------------------------------------------

    pub fn phase(&self) -> LoadPhase {
        self.state.with(|s| s.phase)
    }

    pub fn error(&self) -> Option<ApiError> {
        self.state.with(|s| s.error.clone())
    }

    pub fn total(&self) -> usize {
        self.state.with(|s| s.items.len())
    }

    /// Current list after applying the client-side filter.
    pub fn filtered(&self) -> Vec<R> {
        let filter = self.filter.get();
        self.state.with(|s| apply_filter(&s.items, &filter))
    }

    pub fn filter_state(&self) -> FilterState {
        self.filter.get()
    }

    pub fn set_termino(&self, termino: String) {
        self.filter.update(|f| f.termino = termino);
    }

    pub fn set_categoria(&self, categoria: Option<String>) {
        self.filter.update(|f| f.categoria = categoria);
    }

    pub fn set_estado(&self, estado: Option<String>) {
        self.filter.update(|f| f.estado = estado);
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// User-visible load. Supersedes any load still in flight; a failure
    /// leaves an empty list plus a recorded error, never an exception.
    pub fn load(self) {
        let token = match self.state.try_update(|s| s.begin_load()) {
            Some(token) => token,
            None => return,
        };
        spawn_local(async move {
            let result = api::get_list::<R>(R::endpoint_path(), R::collection_key()).await;
            if let Err(err) = &result {
                log::error!("carga de {} fallida: {err}", R::collection_key());
            }
            self.state.update(|s| {
                s.apply_load(token, result);
            });
        });
    }

    /// Background poller: refreshes the list without loading indicators,
    /// swallows errors, and backs off while the endpoint keeps failing. Only
    /// one poller runs per store, and a tick is skipped while a user-visible
    /// load is in flight.
    fn start_polling(self) {
        spawn_local(async move {
            loop {
                let delay = self.backoff.get_value().current_delay_ms();
                TimeoutFuture::new(delay).await;

                if self.state.with_untracked(|s| s.is_loading()) {
                    continue;
                }
                let token = match self.state.try_update(|s| s.begin_silent()) {
                    Some(token) => token,
                    None => continue,
                };
                let result = api::get_list::<R>(R::endpoint_path(), R::collection_key()).await;
                match &result {
                    Ok(_) => self.backoff.update_value(|b| b.record_success()),
                    Err(err) => {
                        // Retrying a transient outage soon makes sense; a
                        // persistent failure goes straight to the longest
                        // interval.
                        if err.is_transient() {
                            self.backoff.update_value(|b| b.record_failure());
                        } else {
                            self.backoff.update_value(|b| b.record_persistent_failure());
                        }
                        log::debug!(
                            "refresco silencioso de {} fallido: {err}",
                            R::collection_key()
                        );
                    }
                }
                self.state.update(|s| {
                    s.apply_silent(token, result);
                });
            }
        });
    }

    // ------------------------------------------------------------------
    // Mutations: POST, then resync from the server. The list is never
    // mutated optimistically; the backend is the source of truth.
    // ------------------------------------------------------------------

    pub fn create<D: Serialize + 'static>(self, dto: D) {
        self.mutate("crear", dto);
    }

    pub fn update_record<D: Serialize + 'static>(self, dto: D) {
        self.mutate("actualizar", dto);
    }

    /// Destructive delete. `confirmed` must come from an explicit user
    /// confirmation; without it no network call is made.
    pub fn delete(self, id: RecordId, confirmed: bool) {
        match payload_de_eliminacion(id, confirmed) {
            Some(payload) => self.mutate("eliminar", payload),
            None => log::debug!("eliminación de {} cancelada", R::collection_key()),
        }
    }

    fn mutate<D: Serialize + 'static>(self, action: &'static str, dto: D) {
        spawn_local(async move {
            match api::post_action(R::endpoint_path(), action, &dto).await {
                Ok(mensaje) => {
                    self.toast.success(
                        mensaje.unwrap_or_else(|| "Operación realizada correctamente".to_string()),
                    );
                    self.load();
                }
                Err(err) => {
                    log::error!("{action} en {} fallido: {err}", R::collection_key());
                    self.toast.error(err.user_message());
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::empresa::Empresa;

    fn assert_copy<T: Copy>() {}

    #[test]
    fn store_is_copy_even_for_non_copy_records() {
        // Pages move the store into several closures; it must copy although
        // the record type only clones.
        assert_copy::<ResourceStore<Empresa>>();
    }

    #[test]
    fn unconfirmed_delete_produces_no_request_body() {
        assert_eq!(payload_de_eliminacion(RecordId("7".into()), false), None);
    }

    #[test]
    fn confirmed_delete_carries_the_record_id() {
        let payload = payload_de_eliminacion(RecordId("7".into()), true);
        assert_eq!(payload, Some(serde_json::json!({ "id": "7" })));
    }
}
