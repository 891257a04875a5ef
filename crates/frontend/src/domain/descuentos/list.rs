use contracts::domain::descuento::Descuento;
use leptos::prelude::*;

use super::details::DescuentoDetails;
use crate::shared::components::{EmptyState, ErrorState, FacetSelect, SearchInput};
use crate::shared::data::resource_store::confirmar;
use crate::shared::data::{LoadPhase, ResourceStore};
use crate::shared::icons::icon;

pub const CATEGORIAS_DESCUENTO: [&str; 5] =
    ["alimentacion", "ocio", "salud", "formacion", "viajes"];

pub const ESTADOS_DESCUENTO: [&str; 2] = ["activo", "inactivo"];

#[component]
pub fn DescuentosList() -> impl IntoView {
    let store = use_context::<ResourceStore<Descuento>>()
        .expect("ResourceStore<Descuento> not provided in context");
    store.ensure_started();

    let (show_form, set_show_form) = signal(false);
    let (editando, set_editando) = signal(Option::<Descuento>::None);

    let hoy = chrono::Utc::now().date_naive();

    let handle_delete = move |descuento: &Descuento| {
        let confirmed = confirmar(&format!(
            "¿Eliminar el descuento \"{}\"?",
            descuento.titulo_mostrado()
        ));
        store.delete(descuento.id.clone(), confirmed);
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Descuentos"</h1>
                <div class="page__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| {
                            set_editando.set(None);
                            set_show_form.set(true);
                        }
                    >
                        {icon("plus")}
                        "Nuevo descuento"
                    </button>
                    <button class="button button--secondary" on:click=move |_| store.load()>
                        {icon("refresh")}
                        "Actualizar"
                    </button>
                </div>
            </div>

            <div class="page__filters">
                <SearchInput
                    value=Signal::derive(move || store.filter_state().termino)
                    on_change=Callback::new(move |termino| store.set_termino(termino))
                    placeholder="Buscar por título o empresa..."
                />
                <FacetSelect
                    label="Categoría"
                    options=CATEGORIAS_DESCUENTO.to_vec()
                    value=Signal::derive(move || store.filter_state().categoria)
                    on_change=Callback::new(move |categoria| store.set_categoria(categoria))
                />
                <FacetSelect
                    label="Estado"
                    options=ESTADOS_DESCUENTO.to_vec()
                    value=Signal::derive(move || store.filter_state().estado)
                    on_change=Callback::new(move |estado| store.set_estado(estado))
                />
            </div>

            <ErrorState
                error=Signal::derive(move || store.error())
                on_retry=Callback::new(move |_| store.load())
            />

            {move || {
                let items = store.filtered();
                match store.phase() {
                    LoadPhase::Idle | LoadPhase::Loading if items.is_empty() => {
                        view! { <div class="loading">"Cargando descuentos..."</div> }.into_any()
                    }
                    LoadPhase::Failed => ().into_any(),
                    _ if items.is_empty() => {
                        view! { <EmptyState message="No hay descuentos que mostrar." /> }
                            .into_any()
                    }
                    _ => {
                        view! {
                            <div class="card-grid">
                                {items
                                    .into_iter()
                                    .map(|descuento| {
                                        let para_editar = descuento.clone();
                                        let para_borrar = descuento.clone();
                                        let vigente = descuento.vigente_en(hoy);
                                        view! {
                                            <article class="card card--descuento">
                                                <div class="card__header">
                                                    <span class="card__percent">
                                                        {format!("{:.0}%", descuento.porcentaje)}
                                                    </span>
                                                    <h3 class="card__title">
                                                        {descuento.titulo_mostrado().to_string()}
                                                    </h3>
                                                    {(!vigente)
                                                        .then(|| {
                                                            view! {
                                                                <span class="badge badge--muted">"Caducado"</span>
                                                            }
                                                        })}
                                                </div>
                                                <p class="card__description">
                                                    {descuento.descripcion.clone()}
                                                </p>
                                                <dl class="card__meta">
                                                    <dt>"Empresa"</dt>
                                                    <dd>{descuento.empresa_mostrada().to_string()}</dd>
                                                    <dt>"Vigencia"</dt>
                                                    <dd>
                                                        {format!(
                                                            "{} – {}",
                                                            descuento.fecha_inicio,
                                                            descuento.fecha_fin,
                                                        )}
                                                    </dd>
                                                </dl>
                                                <div class="card__actions">
                                                    <button
                                                        class="button button--secondary"
                                                        on:click=move |_| {
                                                            set_editando.set(Some(para_editar.clone()));
                                                            set_show_form.set(true);
                                                        }
                                                    >
                                                        {icon("edit")}
                                                        "Editar"
                                                    </button>
                                                    <button
                                                        class="button button--danger"
                                                        on:click=move |_| handle_delete(&para_borrar)
                                                    >
                                                        {icon("delete")}
                                                        "Eliminar"
                                                    </button>
                                                </div>
                                            </article>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                        .into_any()
                    }
                }
            }}

            {move || {
                show_form
                    .get()
                    .then(|| {
                        view! {
                            <DescuentoDetails
                                descuento=editando.get_untracked()
                                on_close=Callback::new(move |_| set_show_form.set(false))
                            />
                        }
                    })
            }}
        </div>
    }
}
