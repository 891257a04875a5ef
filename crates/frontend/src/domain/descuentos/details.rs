use contracts::domain::descuento::{Descuento, DescuentoDto};
use leptos::prelude::*;

use super::list::{CATEGORIAS_DESCUENTO, ESTADOS_DESCUENTO};
use crate::shared::data::ResourceStore;
use crate::shared::icons::icon;

#[component]
pub fn DescuentoDetails(
    descuento: Option<Descuento>,
    on_close: Callback<()>,
) -> impl IntoView {
    let store = use_context::<ResourceStore<Descuento>>()
        .expect("ResourceStore<Descuento> not provided in context");

    let editing_id = descuento.as_ref().map(|d| d.id.clone());
    let titulo_modal = if editing_id.is_some() { "Editar descuento" } else { "Nuevo descuento" };

    let base = descuento.unwrap_or_default();
    let titulo = RwSignal::new(base.titulo.clone());
    let descripcion = RwSignal::new(base.descripcion.clone());
    let categoria = RwSignal::new(base.categoria.clone());
    let estado = RwSignal::new(if base.estado.is_empty() {
        "activo".to_string()
    } else {
        base.estado.clone()
    });
    let empresa = RwSignal::new(base.empresa.clone());
    let porcentaje = RwSignal::new(base.porcentaje.to_string());
    let fecha_inicio = RwSignal::new(base.fecha_inicio.clone());
    let fecha_fin = RwSignal::new(base.fecha_fin.clone());
    let validation_error = RwSignal::new(Option::<String>::None);

    let on_submit = {
        let editing_id = editing_id.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();

            let porcentaje_num = match porcentaje.get().trim().replace(',', ".").parse::<f64>() {
                Ok(n) => n,
                Err(_) => {
                    validation_error.set(Some("El porcentaje debe ser un número".to_string()));
                    return;
                }
            };

            let dto = DescuentoDto {
                id: editing_id.clone(),
                titulo: titulo.get(),
                descripcion: descripcion.get(),
                categoria: categoria.get(),
                estado: estado.get(),
                empresa: empresa.get(),
                porcentaje: porcentaje_num,
                fecha_inicio: fecha_inicio.get(),
                fecha_fin: fecha_fin.get(),
            };

            if let Err(message) = dto.validate() {
                validation_error.set(Some(message));
                return;
            }

            if dto.id.is_some() {
                store.update_record(dto);
            } else {
                store.create(dto);
            }
            on_close.run(());
        }
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal__header">
                    <h2>{titulo_modal}</h2>
                    <button class="modal__close" aria-label="Cerrar" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>

                {move || {
                    validation_error
                        .get()
                        .map(|message| view! { <div class="form-error" role="alert">{message}</div> })
                }}

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="descuento-titulo">"Título *"</label>
                        <input
                            type="text"
                            id="descuento-titulo"
                            prop:value=move || titulo.get()
                            on:input=move |ev| titulo.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="descuento-descripcion">"Descripción"</label>
                        <textarea
                            id="descuento-descripcion"
                            prop:value=move || descripcion.get()
                            on:input=move |ev| descripcion.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="descuento-empresa">"Empresa *"</label>
                            <input
                                type="text"
                                id="descuento-empresa"
                                prop:value=move || empresa.get()
                                on:input=move |ev| empresa.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="descuento-porcentaje">"Porcentaje"</label>
                            <input
                                type="number"
                                id="descuento-porcentaje"
                                min="0"
                                max="100"
                                prop:value=move || porcentaje.get()
                                on:input=move |ev| porcentaje.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="descuento-inicio">"Inicio de vigencia"</label>
                            <input
                                type="date"
                                id="descuento-inicio"
                                prop:value=move || fecha_inicio.get()
                                on:input=move |ev| fecha_inicio.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="descuento-fin">"Fin de vigencia"</label>
                            <input
                                type="date"
                                id="descuento-fin"
                                prop:value=move || fecha_fin.get()
                                on:input=move |ev| fecha_fin.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="descuento-categoria">"Categoría"</label>
                            <select
                                id="descuento-categoria"
                                on:change=move |ev| categoria.set(event_target_value(&ev))
                            >
                                <option value="" selected=move || categoria.get().is_empty()>
                                    "Selecciona..."
                                </option>
                                {CATEGORIAS_DESCUENTO
                                    .into_iter()
                                    .map(|opt| {
                                        view! {
                                            <option
                                                value=opt
                                                selected=move || categoria.get() == opt
                                            >
                                                {opt}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="descuento-estado">"Estado"</label>
                            <select
                                id="descuento-estado"
                                on:change=move |ev| estado.set(event_target_value(&ev))
                            >
                                {ESTADOS_DESCUENTO
                                    .into_iter()
                                    .map(|opt| {
                                        view! {
                                            <option value=opt selected=move || estado.get() == opt>
                                                {opt}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                    </div>

                    <div class="modal__actions">
                        <button type="button" class="button button--secondary" on:click=move |_| on_close.run(())>
                            "Cancelar"
                        </button>
                        <button type="submit" class="button button--primary">
                            "Guardar"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
