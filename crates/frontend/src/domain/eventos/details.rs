use contracts::domain::evento::{Evento, EventoDto};
use leptos::prelude::*;

use super::list::{CATEGORIAS_EVENTO, ESTADOS_EVENTO};
use crate::shared::data::ResourceStore;
use crate::shared::icons::icon;

#[component]
pub fn EventoDetails(
    evento: Option<Evento>,
    on_close: Callback<()>,
) -> impl IntoView {
    let store = use_context::<ResourceStore<Evento>>()
        .expect("ResourceStore<Evento> not provided in context");

    let editing_id = evento.as_ref().map(|e| e.id.clone());
    let titulo_modal = if editing_id.is_some() { "Editar evento" } else { "Nuevo evento" };

    let base = evento.unwrap_or_default();
    let titulo = RwSignal::new(base.titulo.clone());
    let descripcion = RwSignal::new(base.descripcion.clone());
    let categoria = RwSignal::new(base.categoria.clone());
    let estado = RwSignal::new(if base.estado.is_empty() {
        "programado".to_string()
    } else {
        base.estado.clone()
    });
    let fecha = RwSignal::new(base.fecha.clone());
    let hora = RwSignal::new(base.hora.clone());
    let lugar = RwSignal::new(base.lugar.clone());
    let validation_error = RwSignal::new(Option::<String>::None);

    let on_submit = {
        let editing_id = editing_id.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();

            let dto = EventoDto {
                id: editing_id.clone(),
                titulo: titulo.get(),
                descripcion: descripcion.get(),
                categoria: categoria.get(),
                estado: estado.get(),
                fecha: fecha.get(),
                hora: hora.get(),
                lugar: lugar.get(),
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
                        <label for="evento-titulo">"Título *"</label>
                        <input
                            type="text"
                            id="evento-titulo"
                            prop:value=move || titulo.get()
                            on:input=move |ev| titulo.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="evento-descripcion">"Descripción"</label>
                        <textarea
                            id="evento-descripcion"
                            prop:value=move || descripcion.get()
                            on:input=move |ev| descripcion.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="evento-fecha">"Fecha *"</label>
                            <input
                                type="date"
                                id="evento-fecha"
                                prop:value=move || fecha.get()
                                on:input=move |ev| fecha.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="evento-hora">"Hora"</label>
                            <input
                                type="time"
                                id="evento-hora"
                                prop:value=move || hora.get()
                                on:input=move |ev| hora.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div class="form-group">
                        <label for="evento-lugar">"Lugar"</label>
                        <input
                            type="text"
                            id="evento-lugar"
                            prop:value=move || lugar.get()
                            on:input=move |ev| lugar.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="evento-categoria">"Categoría"</label>
                            <select
                                id="evento-categoria"
                                on:change=move |ev| categoria.set(event_target_value(&ev))
                            >
                                <option value="" selected=move || categoria.get().is_empty()>
                                    "Selecciona..."
                                </option>
                                {CATEGORIAS_EVENTO
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
                            <label for="evento-estado">"Estado"</label>
                            <select
                                id="evento-estado"
                                on:change=move |ev| estado.set(event_target_value(&ev))
                            >
                                {ESTADOS_EVENTO
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
