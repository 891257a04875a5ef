use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// How long a toast stays on screen before expiring on its own.
///
/// The value is deliberately a single constant: every notification in the
/// console lives exactly this long.
pub const TOAST_DURATION_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Warning => "toast toast--warning",
            ToastKind::Info => "toast toast--info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct ToastEntry {
    id: u64,
    message: String,
    kind: ToastKind,
}

/// Transient notification stack.
///
/// One instance is provided at the app root; every store and page notifies
/// through it. Toasts stack in a fixed screen corner, expire after
/// [`TOAST_DURATION_MS`], and always offer a manual dismiss.
#[derive(Clone, Copy)]
pub struct ToastService {
    stack: RwSignal<Vec<ToastEntry>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn notify(&self, message: impl Into<String>, kind: ToastKind) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.stack.update(|s| {
            s.push(ToastEntry {
                id,
                message: message.into(),
                kind,
            })
        });

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            svc.dismiss(id);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(message, ToastKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(message, ToastKind::Error);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.notify(message, ToastKind::Warning);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(message, ToastKind::Info);
    }

    fn dismiss(&self, id: u64) {
        self.stack.update(|s| s.retain(|t| t.id != id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the toast stack. Must be mounted exactly once, at the app root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_context::<ToastService>()
        .expect("ToastService not provided in context (provide it in app root)");

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || svc.stack.get()
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;
                    view! {
                        <div class=entry.kind.css_class() role="status">
                            <span class="toast__message">{entry.message.clone()}</span>
                            <button
                                class="toast__dismiss"
                                aria-label="Cerrar aviso"
                                on:click=move |_| svc.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
