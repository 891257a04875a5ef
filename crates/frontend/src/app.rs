use contracts::domain::comite::Comite;
use contracts::domain::descuento::Descuento;
use contracts::domain::empresa::Empresa;
use contracts::domain::evento::Evento;
use leptos::prelude::*;

use crate::dashboards::resumen::DashboardStore;
use crate::routes::AppRoutes;
use crate::shared::data::ResourceStore;
use crate::shared::toast::ToastService;
use crate::system::auth::store::SessionStore;

/// Application root.
///
/// Every store is constructed exactly once here and handed down via context:
/// one session store, one toast service, one resource store per domain, one
/// dashboard store. Nothing attaches to `window`.
#[component]
pub fn App() -> impl IntoView {
    let toast = ToastService::new();
    provide_context(toast);

    let session = SessionStore::new(toast);
    provide_context(session);

    provide_context(ResourceStore::<Empresa>::new(toast));
    provide_context(ResourceStore::<Comite>::new(toast));
    provide_context(ResourceStore::<Descuento>::new(toast));
    provide_context(ResourceStore::<Evento>::new(toast));
    provide_context(DashboardStore::new());

    // Resolve the session once at bootstrap; the store re-checks periodically.
    session.check();
    session.start_periodic_recheck();

    view! {
        <AppRoutes />
    }
}
