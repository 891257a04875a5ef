use contracts::domain::evento::Evento;
use leptos::prelude::*;

use super::details::EventoDetails;
use crate::shared::components::{EmptyState, ErrorState, FacetSelect, SearchInput};
use crate::shared::data::resource_store::confirmar;
use crate::shared::data::{LoadPhase, ResourceStore};
use crate::shared::icons::icon;

pub const CATEGORIAS_EVENTO: [&str; 4] = ["formacion", "networking", "asamblea", "feria"];

pub const ESTADOS_EVENTO: [&str; 2] = ["programado", "cancelado"];

#[component]
pub fn EventosList() -> impl IntoView {
    let store = use_context::<ResourceStore<Evento>>()
        .expect("ResourceStore<Evento> not provided in context");
    store.ensure_started();

    let (show_form, set_show_form) = signal(false);
    let (editando, set_editando) = signal(Option::<Evento>::None);
    // Extra facet derived client-side from the event date.
    let (solo_proximos, set_solo_proximos) = signal(false);

    let hoy = chrono::Utc::now().date_naive();

    let handle_delete = move |evento: &Evento| {
        let confirmed = confirmar(&format!(
            "¿Eliminar el evento \"{}\"?",
            evento.titulo_mostrado()
        ));
        store.delete(evento.id.clone(), confirmed);
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Eventos"</h1>
                <div class="page__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| {
                            set_editando.set(None);
                            set_show_form.set(true);
                        }
                    >
                        {icon("plus")}
                        "Nuevo evento"
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
                    placeholder="Buscar por título o lugar..."
                />
                <FacetSelect
                    label="Categoría"
                    options=CATEGORIAS_EVENTO.to_vec()
                    value=Signal::derive(move || store.filter_state().categoria)
                    on_change=Callback::new(move |categoria| store.set_categoria(categoria))
                />
                <label class="facet-select facet-select--toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || solo_proximos.get()
                        on:change=move |ev| set_solo_proximos.set(event_target_checked(&ev))
                    />
                    <span>"Solo próximos"</span>
                </label>
            </div>

            <ErrorState
                error=Signal::derive(move || store.error())
                on_retry=Callback::new(move |_| store.load())
            />

            {move || {
                let mut items = store.filtered();
                if solo_proximos.get() {
                    items.retain(|e| e.es_proximo(hoy));
                }
                match store.phase() {
                    LoadPhase::Idle | LoadPhase::Loading if items.is_empty() => {
                        view! { <div class="loading">"Cargando eventos..."</div> }.into_any()
                    }
                    LoadPhase::Failed => ().into_any(),
                    _ if items.is_empty() => {
                        view! { <EmptyState message="No hay eventos que mostrar." /> }.into_any()
                    }
                    _ => {
                        view! {
                            <div class="card-grid">
                                {items
                                    .into_iter()
                                    .map(|evento| {
                                        let para_editar = evento.clone();
                                        let para_borrar = evento.clone();
                                        let proximo = evento.es_proximo(hoy);
                                        view! {
                                            <article class="card card--evento">
                                                <div class="card__header">
                                                    {icon("eventos")}
                                                    <h3 class="card__title">
                                                        {evento.titulo_mostrado().to_string()}
                                                    </h3>
                                                    {(!proximo)
                                                        .then(|| {
                                                            view! {
                                                                <span class="badge badge--muted">"Celebrado"</span>
                                                            }
                                                        })}
                                                </div>
                                                <p class="card__description">
                                                    {evento.descripcion.clone()}
                                                </p>
                                                <dl class="card__meta">
                                                    <dt>"Fecha"</dt>
                                                    <dd>
                                                        {format!("{} {}", evento.fecha, evento.hora)}
                                                    </dd>
                                                    <dt>"Lugar"</dt>
                                                    <dd>{evento.lugar_mostrado().to_string()}</dd>
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
                            <EventoDetails
                                evento=editando.get_untracked()
                                on_close=Callback::new(move |_| set_show_form.set(false))
                            />
                        }
                    })
            }}
        </div>
    }
}
