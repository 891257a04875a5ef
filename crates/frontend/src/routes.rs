use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::resumen::ui::ResumenDashboard;
use crate::domain::comites::list::ComitesList;
use crate::domain::descuentos::list::DescuentosList;
use crate::domain::empresas::list::EmpresasList;
use crate::domain::eventos::list::EventosList;
use crate::layout::header::Header;
use crate::shared::toast::ToastHost;
use crate::system::auth::guard::RequireSession;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Header />
            <main class="main">
                <Routes fallback=|| view! { <p class="not-found">"Página no encontrada"</p> }>
                    <Route
                        path=path!("/")
                        view=|| view! { <RequireSession><ResumenDashboard /></RequireSession> }
                    />
                    <Route
                        path=path!("/empresas")
                        view=|| view! { <RequireSession><EmpresasList /></RequireSession> }
                    />
                    <Route
                        path=path!("/comites")
                        view=|| view! { <RequireSession><ComitesList /></RequireSession> }
                    />
                    <Route
                        path=path!("/descuentos")
                        view=|| view! { <RequireSession><DescuentosList /></RequireSession> }
                    />
                    <Route
                        path=path!("/eventos")
                        view=|| view! { <RequireSession><EventosList /></RequireSession> }
                    />
                </Routes>
            </main>
            <ToastHost />
        </Router>
    }
}
