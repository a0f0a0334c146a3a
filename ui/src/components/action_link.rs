use crate::navigate;
use crate::Screen;
use dioxus::prelude::*;

/// An anchor that switches to another tab instead of following a URL.
#[component]
pub fn ActionLink(to: Screen, children: Element) -> Element {
    let active_screen = use_context::<Signal<Screen>>();

    rsx! {
        a {
            href: "#",
            class: "pq-action-link",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                navigate(active_screen, to);
            },
            {children}
        }
    }
}
