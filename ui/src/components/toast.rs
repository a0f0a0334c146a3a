use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::compat;
use crate::hooks::use_toast::use_toast;
use dioxus::prelude::*;

/// Renders the current toast and clears it after the configured delay.
///
/// The dismissal timer is a resource keyed on the toast itself: showing a
/// new toast restarts it, and unmounting the toaster drops it.
#[component]
pub fn Toaster() -> Element {
    let app_state = use_context::<AppState>();
    let toast = use_context::<AppStateMut>().toast;
    let mut handle = use_toast();
    let linger = app_state.prefs.latency().toast;

    let _dismissal = use_resource(move || async move {
        if toast.read().is_some() {
            compat::sleep(linger).await;
            handle.dismiss();
        }
    });

    let current = toast.read().clone();
    rsx! {
        if let Some(t) = current {
            div {
                class: if t.kind.is_destructive() { "pq-toast destructive" } else { "pq-toast" },
                role: "status",
                onclick: move |_| handle.dismiss(),
                strong { "{t.title}" }
                p { "{t.description}" }
            }
        }
    }
}
