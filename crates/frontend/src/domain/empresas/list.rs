use contracts::domain::empresa::Empresa;
use leptos::prelude::*;

use super::details::EmpresaDetails;
use crate::shared::components::{EmptyState, ErrorState, FacetSelect, SearchInput};
use crate::shared::data::resource_store::confirmar;
use crate::shared::data::{LoadPhase, ResourceStore};
use crate::shared::icons::icon;

pub const CATEGORIAS_EMPRESA: [&str; 6] = [
    "industria",
    "servicios",
    "transporte",
    "hosteleria",
    "tecnologia",
    "comercio",
];

pub const ESTADOS_EMPRESA: [&str; 2] = ["activa", "inactiva"];

#[component]
pub fn EmpresasList() -> impl IntoView {
    let store = use_context::<ResourceStore<Empresa>>()
        .expect("ResourceStore<Empresa> not provided in context");
    store.ensure_started();

    let (show_form, set_show_form) = signal(false);
    let (editando, set_editando) = signal(Option::<Empresa>::None);

    let handle_create_new = move || {
        set_editando.set(None);
        set_show_form.set(true);
    };

    let handle_edit = move |empresa: Empresa| {
        set_editando.set(Some(empresa));
        set_show_form.set(true);
    };

    let handle_delete = move |empresa: &Empresa| {
        let confirmed = confirmar(&format!(
            "¿Eliminar la empresa \"{}\"? Esta acción no se puede deshacer.",
            empresa.nombre_mostrado()
        ));
        store.delete(empresa.id.clone(), confirmed);
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Empresas"</h1>
                <div class="page__actions">
                    <button class="button button--primary" on:click=move |_| handle_create_new()>
                        {icon("plus")}
                        "Nueva empresa"
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
                    placeholder="Buscar por nombre, descripción o dirección..."
                />
                <FacetSelect
                    label="Categoría"
                    options=CATEGORIAS_EMPRESA.to_vec()
                    value=Signal::derive(move || store.filter_state().categoria)
                    on_change=Callback::new(move |categoria| store.set_categoria(categoria))
                />
                <FacetSelect
                    label="Estado"
                    options=ESTADOS_EMPRESA.to_vec()
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
                        view! { <div class="loading">"Cargando empresas..."</div> }.into_any()
                    }
                    LoadPhase::Failed => ().into_any(),
                    _ if items.is_empty() => {
                        view! {
                            <EmptyState message="No hay empresas que coincidan con el filtro." />
                        }
                        .into_any()
                    }
                    _ => {
                        view! {
                            <div class="card-grid">
                                {items
                                    .into_iter()
                                    .map(|empresa| {
                                        let para_editar = empresa.clone();
                                        let para_borrar = empresa.clone();
                                        view! {
                                            <article class="card card--empresa">
                                                <div class="card__header">
                                                    {(!empresa.logo.is_empty())
                                                        .then(|| {
                                                            view! {
                                                                <img
                                                                    class="card__logo"
                                                                    src=empresa.logo.clone()
                                                                    alt=""
                                                                />
                                                            }
                                                        })}
                                                    <h3 class="card__title">
                                                        {empresa.nombre_mostrado().to_string()}
                                                    </h3>
                                                    {empresa
                                                        .tiene_convenio()
                                                        .then(|| {
                                                            view! {
                                                                <span class="badge badge--primary">"Convenio"</span>
                                                            }
                                                        })}
                                                </div>
                                                <p class="card__description">
                                                    {empresa.descripcion.clone()}
                                                </p>
                                                <dl class="card__meta">
                                                    <dt>"Categoría"</dt>
                                                    <dd>{empresa.categoria_mostrada().to_string()}</dd>
                                                    <dt>"Estado"</dt>
                                                    <dd>{empresa.estado.clone()}</dd>
                                                </dl>
                                                <div class="card__actions">
                                                    <button
                                                        class="button button--secondary"
                                                        on:click=move |_| handle_edit(para_editar.clone())
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
                            <EmpresaDetails
                                empresa=editando.get_untracked()
                                on_close=Callback::new(move |_| set_show_form.set(false))
                            />
                        }
                    })
            }}
        </div>
    }
}
