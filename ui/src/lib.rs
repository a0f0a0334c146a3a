// The client-side Dioxus application logic.

use dioxus::prelude::*;
use dioxus_logger::tracing::info;

mod app_state;
mod app_state_mut;
mod backend;
pub mod compat;
mod components;
pub mod hooks;
mod screens;

use api::prefs::latency::SimulatedLatency;
use api::prefs::user_prefs::UserPrefs;
use app_state::AppState;
use app_state_mut::AppStateMut;
use components::toast::Toaster;
use screens::history::HistoryScreen;
use screens::home::HomeScreen;
use screens::profile::ProfileScreen;
use screens::recharge::RechargeScreen;
use strum::IntoEnumIterator;

/// The four tabs of the application.
///
/// The lowercase variant name is the tab's key: `"history".parse::<Screen>()`.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    Default,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum Screen {
    #[default]
    Home,
    Recharge,
    History,
    Profile,
}

impl Screen {
    /// Helper to get the display name for each screen.
    pub fn label(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Recharge => "Recharge",
            Screen::History => "History",
            Screen::Profile => "Profile",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Screen::Home => "⌂",
            Screen::Recharge => "⚡",
            Screen::History => "🕘",
            Screen::Profile => "👤",
        }
    }

    pub fn key(&self) -> &'static str {
        self.into()
    }
}

/// Switches the active tab, logging the change.
pub(crate) fn navigate(mut active_screen: Signal<Screen>, to: Screen) {
    if *active_screen.peek() != to {
        info!("switching to {} screen", to);
        active_screen.set(to);
    }
}

/// The bottom navigation bar.
#[component]
fn BottomTabs(active_screen: Signal<Screen>) -> Element {
    rsx! {
        nav {
            class: "tab-bar",
            for screen in Screen::iter() {
                a {
                    key: "{screen.key()}",
                    href: "#",
                    class: if active_screen() == screen { "tab active-tab" } else { "tab" },
                    "aria-current": if active_screen() == screen { "page" } else { "false" },
                    onclick: move |event| {
                        event.prevent_default();
                        navigate(active_screen, screen);
                    },
                    span { class: "tab-icon", "{screen.icon()}" }
                    span { class: "tab-label", "{screen.label()}" }
                }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let frame_css = r#"
    * { box-sizing: border-box; }

    html, body {
        height: 100%;
        margin: 0;
        padding: 0;
        background-color: var(--pico-muted-border-color);
    }

    /* --- APP FRAME --- */
    .app-main-container {
        max-width: 28rem;
        min-height: 100vh;
        margin: 0 auto;
        background-color: var(--pico-background-color);
    }

    .app-main-container .content {
        padding: 1rem 1rem 5rem 1rem;
    }

    /* --- BOTTOM TABS --- */
    .tab-bar {
        position: fixed;
        bottom: 0; left: 0; right: 0;
        display: flex;
        justify-content: space-around;
        padding: 0.5rem 0;
        border-top: 1px solid var(--pico-muted-border-color);
        background-color: var(--pico-card-background-color);
        z-index: 100;
    }

    .tab-bar .tab {
        display: flex;
        flex-direction: column;
        align-items: center;
        text-decoration: none;
        color: var(--pico-muted-color);
        font-size: 0.75rem;
    }

    .tab-bar .tab.active-tab {
        color: var(--pico-primary);
        font-weight: bold;
    }

    .tab-bar .tab-icon { font-size: 1.25rem; }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css",
        }
        document::Stylesheet {
            href: asset!("/assets/css/parkqwik.css"),
        }
        style {
            "{frame_css}"
        }
        LoadedApp {
            app_state: AppState::new(UserPrefs::new(SimulatedLatency::from_env())),
        }
    }
}

/// Provides the app contexts and renders the active screen.
#[component]
fn LoadedApp(app_state: AppState) -> Element {
    use_hook(|| info!("prefs: {:#?}", app_state.prefs));

    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());

    // Create signals for mutable state at the top level of the component.
    let toast_signal = use_signal(|| None);
    use_context_provider(|| AppStateMut {
        toast: toast_signal,
    });

    let active_screen = use_signal(Screen::default);
    use_context_provider(|| active_screen);

    rsx! {
        ScreenHost {}
    }
}

/// Renders whichever screen the shared `Signal<Screen>` points at, with the
/// toast and tab bar around it.
#[component]
fn ScreenHost() -> Element {
    let active_screen = use_context::<Signal<Screen>>();

    rsx! {
        div {
            class: "app-main-container",
            div {
                class: "content",
                match active_screen() {
                    Screen::Home => rsx! {
                        HomeScreen {}
                    },
                    Screen::Recharge => rsx! {
                        RechargeScreen {}
                    },
                    Screen::History => rsx! {
                        HistoryScreen {}
                    },
                    Screen::Profile => rsx! {
                        ProfileScreen {}
                    },
                }
            }
            Toaster {}
            BottomTabs {
                active_screen,
            }
        }
    }
}
