use contracts::domain::empresa::{Empresa, EmpresaDto};
use leptos::prelude::*;

use super::list::{CATEGORIAS_EMPRESA, ESTADOS_EMPRESA};
use crate::shared::data::ResourceStore;
use crate::shared::icons::icon;

/// Create/edit form for an empresa, shown as a modal over the list.
///
/// Validation runs client-side before the POST; the store resynchronizes the
/// list from the server after a successful mutation, so the form never
/// touches the list itself.
#[component]
pub fn EmpresaDetails(
    empresa: Option<Empresa>,
    on_close: Callback<()>,
) -> impl IntoView {
    let store = use_context::<ResourceStore<Empresa>>()
        .expect("ResourceStore<Empresa> not provided in context");

    let editing_id = empresa.as_ref().map(|e| e.id.clone());
    let titulo = if editing_id.is_some() { "Editar empresa" } else { "Nueva empresa" };

    let base = empresa.unwrap_or_default();
    let nombre = RwSignal::new(base.nombre.clone());
    let descripcion = RwSignal::new(base.descripcion.clone());
    let categoria = RwSignal::new(base.categoria.clone());
    let estado = RwSignal::new(if base.estado.is_empty() {
        "activa".to_string()
    } else {
        base.estado.clone()
    });
    let convenio = RwSignal::new(base.tiene_convenio());
    let logo = RwSignal::new(base.logo.clone());
    let sitio_web = RwSignal::new(base.sitio_web.clone());
    let email = RwSignal::new(base.email.clone());
    let telefono = RwSignal::new(base.telefono.clone());
    let direccion = RwSignal::new(base.direccion.clone());
    let validation_error = RwSignal::new(Option::<String>::None);

    let on_submit = {
        let editing_id = editing_id.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();

            let dto = EmpresaDto {
                id: editing_id.clone(),
                nombre: nombre.get(),
                descripcion: descripcion.get(),
                categoria: categoria.get(),
                estado: estado.get(),
                convenio: convenio.get(),
                logo: logo.get(),
                sitio_web: sitio_web.get(),
                email: email.get(),
                telefono: telefono.get(),
                direccion: direccion.get(),
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
                        <label for="empresa-nombre">"Nombre *"</label>
                        <input
                            type="text"
                            id="empresa-nombre"
                            prop:value=move || nombre.get()
                            on:input=move |ev| nombre.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="empresa-descripcion">"Descripción"</label>
                        <textarea
                            id="empresa-descripcion"
                            prop:value=move || descripcion.get()
                            on:input=move |ev| descripcion.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="empresa-categoria">"Categoría *"</label>
                            <select
                                id="empresa-categoria"
                                on:change=move |ev| categoria.set(event_target_value(&ev))
                            >
                                <option value="" selected=move || categoria.get().is_empty()>
                                    "Selecciona..."
                                </option>
                                {CATEGORIAS_EMPRESA
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
                            <label for="empresa-estado">"Estado"</label>
                            <select
                                id="empresa-estado"
                                on:change=move |ev| estado.set(event_target_value(&ev))
                            >
                                {ESTADOS_EMPRESA
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

                    <div class="form-group form-group--inline">
                        <input
                            type="checkbox"
                            id="empresa-convenio"
                            prop:checked=move || convenio.get()
                            on:change=move |ev| convenio.set(event_target_checked(&ev))
                        />
                        <label for="empresa-convenio">"Tiene convenio con el clúster"</label>
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="empresa-email">"Email de contacto"</label>
                            <input
                                type="text"
                                id="empresa-email"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="empresa-telefono">"Teléfono"</label>
                            <input
                                type="text"
                                id="empresa-telefono"
                                prop:value=move || telefono.get()
                                on:input=move |ev| telefono.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div class="form-group">
                        <label for="empresa-direccion">"Dirección"</label>
                        <input
                            type="text"
                            id="empresa-direccion"
                            prop:value=move || direccion.get()
                            on:input=move |ev| direccion.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="empresa-logo">"URL del logo"</label>
                            <input
                                type="text"
                                id="empresa-logo"
                                prop:value=move || logo.get()
                                on:input=move |ev| logo.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="empresa-sitio">"Sitio web"</label>
                            <input
                                type="text"
                                id="empresa-sitio"
                                prop:value=move || sitio_web.get()
                                on:input=move |ev| sitio_web.set(event_target_value(&ev))
                            />
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_prop_takes_the_record_option_directly() {
        // List pages hand over `editando.get_untracked()` as-is; the prop
        // setter must accept the `Option`, not the inner record.
        let props = EmpresaDetailsProps::builder()
            .empresa(None)
            .on_close(Callback::new(|_| {}))
            .build();
        assert!(props.empresa.is_none());
    }
}
