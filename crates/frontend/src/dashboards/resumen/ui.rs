use leptos::prelude::*;

use super::chart::{atributo_polyline, escalar_puntos, GEOMETRIA_ACTIVIDAD};
use super::counter::AnimatedCounter;
use super::store::DashboardStore;
use crate::shared::icons::icon;

#[component]
fn StatCard(
    icon_name: &'static str,
    label: &'static str,
    #[prop(into)] value: Signal<u64>,
) -> impl IntoView {
    view! {
        <article class="stat-card">
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__body">
                <AnimatedCounter target=value />
                <span class="stat-card__label">{label}</span>
            </div>
        </article>
    }
}

#[component]
pub fn ResumenDashboard() -> impl IntoView {
    let store = use_context::<DashboardStore>()
        .expect("DashboardStore not provided in context");
    store.ensure_started();

    let geom = GEOMETRIA_ACTIVIDAD;

    view! {
        <div class="page page--dashboard">
            <div class="page__header">
                <h1 class="page__title">"Panel de control"</h1>
                <div class="page__actions">
                    <button
                        class="button button--secondary"
                        disabled=move || store.cargando()
                        on:click=move |_| store.refresh()
                    >
                        {icon("refresh")}
                        "Actualizar"
                    </button>
                </div>
            </div>

            {move || {
                store
                    .datos_de_muestra()
                    .then(|| {
                        view! {
                            <div class="banner banner--warning" role="status">
                                {icon("warning")}
                                "Las estadísticas no están disponibles; se muestran datos de muestra."
                            </div>
                        }
                    })
            }}

            <div class="stat-grid">
                <StatCard
                    icon_name="empresas"
                    label="Empresas"
                    value=Signal::derive(move || store.stats().total_empresas)
                />
                <StatCard
                    icon_name="comites"
                    label="Comités"
                    value=Signal::derive(move || store.stats().total_comites)
                />
                <StatCard
                    icon_name="descuentos"
                    label="Descuentos"
                    value=Signal::derive(move || store.stats().total_descuentos)
                />
                <StatCard
                    icon_name="eventos"
                    label="Eventos"
                    value=Signal::derive(move || store.stats().total_eventos)
                />
            </div>

            <section class="chart-panel">
                <h2 class="chart-panel__title">"Actividad mensual"</h2>
                {move || {
                    let serie = store.serie();
                    let escalados = escalar_puntos(&serie.puntos, geom);
                    let linea = atributo_polyline(&escalados);
                    let etiquetas = serie
                        .puntos
                        .iter()
                        .zip(escalados.iter())
                        .map(|(punto, &(x, _))| {
                            view! {
                                <text
                                    class="chart__label"
                                    x=format!("{x:.1}")
                                    y=format!("{:.1}", geom.height - 8.0)
                                    text-anchor="middle"
                                >
                                    {punto.etiqueta.clone()}
                                </text>
                            }
                        })
                        .collect_view();

                    view! {
                        <svg
                            class="chart"
                            viewBox=format!("0 0 {} {}", geom.width, geom.height)
                            preserveAspectRatio="xMidYMid meet"
                        >
                            <line
                                class="chart__baseline"
                                x1=format!("{:.1}", geom.padding)
                                y1=format!("{:.1}", geom.height - geom.padding)
                                x2=format!("{:.1}", geom.width - geom.padding)
                                y2=format!("{:.1}", geom.height - geom.padding)
                            />
                            <polyline class="chart__line" fill="none" points=linea />
                            {etiquetas}
                        </svg>
                    }
                }}
            </section>
        </div>
    }
}
