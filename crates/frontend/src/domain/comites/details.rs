use contracts::domain::comite::{Comite, ComiteDto};
use leptos::prelude::*;

use super::list::ESTADOS_COMITE;
use crate::shared::data::ResourceStore;
use crate::shared::icons::icon;

#[component]
pub fn ComiteDetails(
    comite: Option<Comite>,
    on_close: Callback<()>,
) -> impl IntoView {
    let store = use_context::<ResourceStore<Comite>>()
        .expect("ResourceStore<Comite> not provided in context");

    let editing_id = comite.as_ref().map(|c| c.id.clone());
    let titulo = if editing_id.is_some() { "Editar comité" } else { "Nuevo comité" };

    let base = comite.unwrap_or_default();
    let nombre = RwSignal::new(base.nombre.clone());
    let descripcion = RwSignal::new(base.descripcion.clone());
    let responsable = RwSignal::new(base.responsable.clone());
    let email = RwSignal::new(base.email.clone());
    let estado = RwSignal::new(if base.estado.is_empty() {
        "activo".to_string()
    } else {
        base.estado.clone()
    });
    let validation_error = RwSignal::new(Option::<String>::None);

    let on_submit = {
        let editing_id = editing_id.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();

            let dto = ComiteDto {
                id: editing_id.clone(),
                nombre: nombre.get(),
                descripcion: descripcion.get(),
                estado: estado.get(),
                responsable: responsable.get(),
                email: email.get(),
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
                    <h2>{titulo}</h2>
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
                        <label for="comite-nombre">"Nombre *"</label>
                        <input
                            type="text"
                            id="comite-nombre"
                            prop:value=move || nombre.get()
                            on:input=move |ev| nombre.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="comite-descripcion">"Descripción"</label>
                        <textarea
                            id="comite-descripcion"
                            prop:value=move || descripcion.get()
                            on:input=move |ev| descripcion.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="comite-responsable">"Responsable *"</label>
                            <input
                                type="text"
                                id="comite-responsable"
                                prop:value=move || responsable.get()
                                on:input=move |ev| responsable.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="comite-email">"Email"</label>
                            <input
                                type="text"
                                id="comite-email"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div class="form-group">
                        <label for="comite-estado">"Estado"</label>
                        <select
                            id="comite-estado"
                            on:change=move |ev| estado.set(event_target_value(&ev))
                        >
                            {ESTADOS_COMITE
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
