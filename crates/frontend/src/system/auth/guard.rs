use leptos::prelude::*;

use super::store::use_session;
use crate::system::pages::login::LoginPage;

/// Renders its children only with a live session.
///
/// While the probe is still resolving a neutral placeholder is shown, so the
/// page never flashes the locked state and then unlocks. Without a session
/// the login form takes the region over; there is no click-interception
/// layer to keep in sync.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        {move || {
            let phase = session.phase();
            if phase.is_resolving() {
                view! {
                    <div class="session-placeholder">"Comprobando sesión..."</div>
                }
                .into_any()
            } else if phase.is_authenticated() {
                children().into_any()
            } else {
                view! { <LoginPage /> }.into_any()
            }
        }}
    }
}
