use contracts::dashboards::stats::{
    resumen_de_muestra, serie_de_muestra, ResumenStats, SerieActividad,
};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::api;

const MESES_DE_MUESTRA: usize = 12;

/// Reactive state behind the summary dashboard.
///
/// Cheap to copy; all fields are signals. When the stats endpoint is down the
/// store substitutes deterministic sample data and flags it so the page can
/// show a notice instead of an empty chart.
#[derive(Clone, Copy)]
pub struct DashboardStore {
    stats: RwSignal<ResumenStats>,
    serie: RwSignal<SerieActividad>,
    datos_de_muestra: RwSignal<bool>,
    cargando: RwSignal<bool>,
    started: StoredValue<bool>,
}

impl DashboardStore {
    pub fn new() -> Self {
        Self {
            stats: RwSignal::new(ResumenStats::default()),
            serie: RwSignal::new(SerieActividad::default()),
            datos_de_muestra: RwSignal::new(false),
            cargando: RwSignal::new(false),
            started: StoredValue::new(false),
        }
    }

    pub fn stats(&self) -> ResumenStats {
        self.stats.get()
    }

    pub fn serie(&self) -> SerieActividad {
        self.serie.get()
    }

    pub fn datos_de_muestra(&self) -> bool {
        self.datos_de_muestra.get()
    }

    pub fn cargando(&self) -> bool {
        self.cargando.get()
    }

    /// First render of the dashboard triggers a fetch; later renders reuse
    /// whatever is already loaded and refresh in place.
    pub fn ensure_started(self) {
        if self.started.get_value() {
            return;
        }
        self.started.set_value(true);
        self.refresh();
    }

    pub fn refresh(self) {
        if self.cargando.get_untracked() {
            return;
        }
        self.cargando.set(true);

        spawn_local(async move {
            let resumen = api::fetch_resumen().await;
            let actividad = api::fetch_actividad().await;

            match (resumen, actividad) {
                (Ok(stats), Ok(serie)) => {
                    self.stats.set(stats);
                    self.serie.set(serie);
                    self.datos_de_muestra.set(false);
                }
                (resumen, actividad) => {
                    if let Err(error) = &resumen {
                        log::warn!("resumen de estadísticas no disponible: {error}");
                    }
                    if let Err(error) = &actividad {
                        log::warn!("serie de actividad no disponible: {error}");
                    }
                    log::warn!("el panel muestra datos de muestra");
                    self.stats.set(resumen.unwrap_or_else(|_| resumen_de_muestra()));
                    self.serie
                        .set(actividad.unwrap_or_else(|_| serie_de_muestra(MESES_DE_MUESTRA)));
                    self.datos_de_muestra.set(true);
                }
            }
            self.cargando.set(false);
        });
    }
}

impl Default for DashboardStore {
    fn default() -> Self {
        Self::new()
    }
}
