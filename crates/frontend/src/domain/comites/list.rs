use contracts::domain::comite::Comite;
use leptos::prelude::*;

use super::details::ComiteDetails;
use crate::shared::components::{EmptyState, ErrorState, FacetSelect, SearchInput};
use crate::shared::data::resource_store::confirmar;
use crate::shared::data::{LoadPhase, ResourceStore};
use crate::shared::icons::icon;

pub const ESTADOS_COMITE: [&str; 2] = ["activo", "inactivo"];

#[component]
pub fn ComitesList() -> impl IntoView {
    let store = use_context::<ResourceStore<Comite>>()
        .expect("ResourceStore<Comite> not provided in context");
    store.ensure_started();

    let (show_form, set_show_form) = signal(false);
    let (editando, set_editando) = signal(Option::<Comite>::None);

    let handle_delete = move |comite: &Comite| {
        let confirmed = confirmar(&format!(
            "¿Eliminar el comité \"{}\"?",
            comite.nombre_mostrado()
        ));
        store.delete(comite.id.clone(), confirmed);
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Comités"</h1>
                <div class="page__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| {
                            set_editando.set(None);
                            set_show_form.set(true);
                        }
                    >
                        {icon("plus")}
                        "Nuevo comité"
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
                    placeholder="Buscar comité..."
                />
                <FacetSelect
                    label="Estado"
                    options=ESTADOS_COMITE.to_vec()
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
                        view! { <div class="loading">"Cargando comités..."</div> }.into_any()
                    }
                    LoadPhase::Failed => ().into_any(),
                    _ if items.is_empty() => {
                        view! { <EmptyState message="No hay comités que mostrar." /> }.into_any()
                    }
                    _ => {
                        view! {
                            <div class="table">
                                <table class="table__data table--striped">
                                    <thead class="table__head">
                                        <tr>
                                            <th class="table__header-cell">"Nombre"</th>
                                            <th class="table__header-cell">"Responsable"</th>
                                            <th class="table__header-cell">"Miembros"</th>
                                            <th class="table__header-cell">"Estado"</th>
                                            <th class="table__header-cell"></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {items
                                            .into_iter()
                                            .map(|comite| {
                                                let para_editar = comite.clone();
                                                let para_borrar = comite.clone();
                                                view! {
                                                    <tr class="table__row">
                                                        <td class="table__cell">
                                                            {comite.nombre_mostrado().to_string()}
                                                        </td>
                                                        <td class="table__cell">
                                                            {comite.responsable_mostrado().to_string()}
                                                        </td>
                                                        <td class="table__cell">{comite.num_miembros}</td>
                                                        <td class="table__cell">{comite.estado.clone()}</td>
                                                        <td class="table__cell table__cell--actions">
                                                            <button
                                                                class="button button--ghost"
                                                                title="Editar"
                                                                on:click=move |_| {
                                                                    set_editando.set(Some(para_editar.clone()));
                                                                    set_show_form.set(true);
                                                                }
                                                            >
                                                                {icon("edit")}
                                                            </button>
                                                            <button
                                                                class="button button--ghost"
                                                                title="Eliminar"
                                                                on:click=move |_| handle_delete(&para_borrar)
                                                            >
                                                                {icon("delete")}
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
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
                            <ComiteDetails
                                comite=editando.get_untracked()
                                on_close=Callback::new(move |_| set_show_form.set(false))
                            />
                        }
                    })
            }}
        </div>
    }
}
