//! Small reusable pieces shared by every list page.

use contracts::error::ApiError;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Search box bound to the list filter. Updates on every keystroke; the
/// filtering itself is pure and cheap, so no debounce is needed.
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            {icon("search")}
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            {move || {
                if value.get().is_empty() {
                    ().into_any()
                } else {
                    view! {
                        <button
                            class="search-input__clear"
                            title="Limpiar búsqueda"
                            on:click=move |_| on_change.run(String::new())
                        >
                            {icon("x")}
                        </button>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

/// Facet dropdown: an empty selection means "no filter".
#[component]
pub fn FacetSelect(
    #[prop(into)] label: String,
    options: Vec<&'static str>,
    #[prop(into)] value: Signal<Option<String>>,
    #[prop(into)] on_change: Callback<Option<String>>,
) -> impl IntoView {
    view! {
        <label class="facet-select">
            <span class="facet-select__label">{label}</span>
            <select on:change=move |ev| {
                let selected = event_target_value(&ev);
                on_change.run(if selected.is_empty() { None } else { Some(selected) });
            }>
                <option value="" selected=move || value.get().is_none()>
                    "Todas"
                </option>
                {options
                    .into_iter()
                    .map(|opt| {
                        view! {
                            <option
                                value=opt
                                selected=move || value.get().as_deref() == Some(opt)
                            >
                                {opt}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Distinct empty state shown whenever the (filtered) list has no records.
#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="empty-state">
            <span class="empty-state__icon">{icon("search")}</span>
            <p class="empty-state__message">{message}</p>
        </div>
    }
}

/// Error state with a retry affordance. Every load failure degrades to this;
/// nothing is fatal.
#[component]
pub fn ErrorState(
    #[prop(into)] error: Signal<Option<ApiError>>,
    #[prop(into)] on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        {move || {
            error
                .get()
                .map(|err| {
                    view! {
                        <div class="error-state" role="alert">
                            <span class="error-state__icon">{icon("warning")}</span>
                            <span class="error-state__message">{err.user_message()}</span>
                            <button
                                class="button button--secondary"
                                on:click=move |_| on_retry.run(())
                            >
                                {icon("refresh")}
                                "Reintentar"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
