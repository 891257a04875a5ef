use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;
use crate::system::auth::store::use_session;

/// Top bar: navigation plus the session region.
///
/// Both the restricted styling of the nav entries and the login/user menu
/// derive from the one session store; there is no separate script fixing the
/// menu after the fact.
#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();

    let nav_entries = [
        ("/", "Panel", "panel"),
        ("/empresas", "Empresas", "empresas"),
        ("/comites", "Comités", "comites"),
        ("/descuentos", "Descuentos", "descuentos"),
        ("/eventos", "Eventos", "eventos"),
    ];

    view! {
        <header class="header">
            <div class="header__content">
                <span class="header__title">"Clúster · Administración"</span>
                <nav class="header__nav">
                    {nav_entries
                        .into_iter()
                        .map(|(href, label, icon_name)| {
                            view! {
                                <A
                                    href=href
                                    attr:class=move || {
                                        if session.is_authenticated() {
                                            "nav-link"
                                        } else {
                                            "nav-link nav-link--restricted"
                                        }
                                    }
                                    attr:data-restricted=move || {
                                        (!session.is_authenticated()).then_some("true")
                                    }
                                >
                                    {icon(icon_name)}
                                    {label}
                                </A>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
            <div class="header__actions">
                {move || match session.user() {
                    Some(user) => {
                        let nombre = user.nombre_mostrado().to_string();
                        let es_admin = user.es_admin();
                        view! {
                            <div class="user-menu">
                                {icon("user")}
                                <span class="user-menu__name">{nombre}</span>
                                {es_admin
                                    .then(|| {
                                        view! {
                                            <span class="badge badge--rol">"Administrador"</span>
                                        }
                                    })}
                                <button
                                    class="button button--ghost"
                                    on:click=move |_| session.logout()
                                >
                                    {icon("logout")}
                                    "Cerrar sesión"
                                </button>
                            </div>
                        }
                            .into_any()
                    }
                    None => {
                        view! {
                            <span class="user-menu user-menu--anonymous">
                                {icon("user")}
                                "Identifícate para administrar"
                            </span>
                        }
                            .into_any()
                    }
                }}
            </div>
        </header>
    }
}
