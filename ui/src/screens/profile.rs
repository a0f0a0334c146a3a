//=============================================================================
// File: src/screens/profile.rs
//=============================================================================
use crate::app_state::AppState;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Input;
use crate::components::pico::Switch;
use api::profile::NotificationPrefs;
use api::profile::UserProfile;
use dioxus::prelude::*;
use dioxus_logger::tracing::info;

pub const APP_VERSION: &str = "ParkQwik v1.0.0";

/// Entries in the settings menu, as (icon, label, description).
pub const MENU_ITEMS: [(&str, &str, &str); 6] = [
    ("🚗", "Vehicle Management", "Manage your vehicles"),
    ("💳", "Payment Methods", "Cards and UPI"),
    ("🔔", "Notifications", "Manage alerts"),
    ("🛡", "Security", "Privacy & security"),
    ("❓", "Help & Support", "FAQs and contact"),
    ("⚙", "App Settings", "General settings"),
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Alert {
    Toll,
    Recharge,
    Balance,
}

impl Alert {
    const ALL: [Alert; 3] = [Alert::Toll, Alert::Recharge, Alert::Balance];

    fn title(&self) -> &'static str {
        match self {
            Alert::Toll => "Toll Alerts",
            Alert::Recharge => "Recharge Alerts",
            Alert::Balance => "Low Balance Alerts",
        }
    }

    fn hint(&self) -> &'static str {
        match self {
            Alert::Toll => "Get notified for every toll payment",
            Alert::Recharge => "Confirmation for successful recharges",
            Alert::Balance => "Alert when balance is low",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            Alert::Toll => "toll_alerts",
            Alert::Recharge => "recharge_alerts",
            Alert::Balance => "balance_alerts",
        }
    }

    fn get(&self, prefs: &NotificationPrefs) -> bool {
        match self {
            Alert::Toll => prefs.toll_alerts,
            Alert::Recharge => prefs.recharge_alerts,
            Alert::Balance => prefs.balance_alerts,
        }
    }

    fn set(&self, prefs: &mut NotificationPrefs, on: bool) {
        match self {
            Alert::Toll => prefs.toll_alerts = on,
            Alert::Recharge => prefs.recharge_alerts = on,
            Alert::Balance => prefs.balance_alerts = on,
        }
    }
}

/// Avatar, name and membership line. Follows edits made in the card below.
#[component]
fn ProfileHeader(profile: Signal<UserProfile>) -> Element {
    let name = profile.read().name.clone();

    rsx! {
        div {
            class: "pq-center",
            div { class: "pq-avatar", "👤" }
            h1 { class: "pq-title", "{name}" }
            p { class: "pq-muted", "ParkQwik Member" }
        }
    }
}

/// The personal information card. Fields are read-only until "Edit" is
/// pressed; "Save" only leaves edit mode, nothing is persisted.
#[component]
pub fn PersonalInfoCard(
    mut profile: Signal<UserProfile>,
    #[props(default = false)] editing: bool,
) -> Element {
    let mut edit_mode = use_signal(|| editing);

    let toggle_edit = move |_: MouseEvent| {
        if edit_mode() {
            info!("profile saved: {:?}", profile.peek());
        }
        edit_mode.toggle();
    };

    let p = profile.read().clone();
    let locked = !edit_mode();

    rsx! {
        Card {
            div {
                class: "pq-row",
                h3 { class: "pq-grow pq-strong", "Personal Information" }
                Button {
                    button_type: ButtonType::Ghost,
                    on_click: toggle_edit,
                    if edit_mode() { "Save" } else { "Edit" }
                }
            }
            Input {
                label: "Full Name",
                name: "name",
                value: "{p.name}",
                icon: "👤",
                disabled: locked,
                on_input: move |evt: FormEvent| profile.with_mut(|p| p.name = evt.value()),
            }
            Input {
                label: "Email",
                name: "email",
                input_type: "email",
                value: "{p.email}",
                icon: "✉",
                disabled: locked,
                on_input: move |evt: FormEvent| profile.with_mut(|p| p.email = evt.value()),
            }
            Input {
                label: "Phone Number",
                name: "phone",
                input_type: "tel",
                value: "{p.phone}",
                icon: "📞",
                disabled: locked,
                on_input: move |evt: FormEvent| profile.with_mut(|p| p.phone = evt.value()),
            }
            Input {
                label: "Vehicle Number",
                name: "vehicle_number",
                value: "{p.vehicle_number}",
                icon: "🚗",
                disabled: locked,
                on_input: move |evt: FormEvent| profile.with_mut(|p| p.vehicle_number = evt.value()),
            }
        }
    }
}

#[component]
fn NotificationCard() -> Element {
    let mut prefs = use_signal(NotificationPrefs::default);
    let current = *prefs.read();

    rsx! {
        Card {
            h3 { class: "pq-strong", "Notification Preferences" }
            for alert in Alert::ALL {
                div {
                    key: "{alert.key()}",
                    class: "pq-row",
                    div {
                        class: "pq-grow",
                        p { class: "pq-strong", "{alert.title()}" }
                        p { class: "pq-muted pq-small", "{alert.hint()}" }
                    }
                    Switch {
                        name: alert.key(),
                        checked: alert.get(&current),
                        on_change: move |on: bool| {
                            info!("{} turned {}", alert.key(), if on { "on" } else { "off" });
                            prefs.with_mut(|p| alert.set(p, on));
                        },
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProfileScreen() -> Element {
    let app_state = use_context::<AppState>();
    let profile = use_signal(|| app_state.profile.clone());

    rsx! {
        div {
            class: "pq-screen",

            ProfileHeader { profile }
            PersonalInfoCard { profile }
            NotificationCard {}

            Card {
                for (icon, label, description) in MENU_ITEMS {
                    a {
                        key: "{label}",
                        href: "#",
                        class: "pq-row pq-menu-item",
                        onclick: move |evt: MouseEvent| evt.prevent_default(),
                        span { class: "pq-tx-icon", "{icon}" }
                        div {
                            class: "pq-grow",
                            p { class: "pq-strong", "{label}" }
                            p { class: "pq-muted pq-small", "{description}" }
                        }
                        span { class: "pq-muted", "›" }
                    }
                }
            }

            div {
                class: "pq-center pq-muted pq-small",
                p { class: "pq-strong", "{APP_VERSION}" }
                p { "Made with ❤️ for seamless travel" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::prefs::latency::SimulatedLatency;
    use api::prefs::user_prefs::UserPrefs;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn inputs_locked_until_editing() {
        fn locked() -> Element {
            let profile = use_signal(UserProfile::sample);
            rsx! { PersonalInfoCard { profile } }
        }
        fn editing() -> Element {
            let profile = use_signal(UserProfile::sample);
            rsx! { PersonalInfoCard { profile, editing: true } }
        }

        let html = render(locked);
        assert!(html.contains("rahul.sharma@email.com"));
        assert_eq!(html.matches("disabled").count(), 4);
        assert!(html.contains("Edit"));

        let html = render(editing);
        assert!(!html.contains("disabled"));
        assert!(html.contains("Save"));
    }

    #[test]
    fn alert_accessors_cover_each_flag() {
        let mut prefs = NotificationPrefs::default();
        for alert in Alert::ALL {
            assert!(alert.get(&prefs));
            alert.set(&mut prefs, false);
            assert!(!alert.get(&prefs));
        }
        assert_eq!(
            prefs,
            NotificationPrefs {
                toll_alerts: false,
                recharge_alerts: false,
                balance_alerts: false,
            }
        );
    }

    #[tokio::test]
    async fn edited_name_reaches_the_header() {
        fn app() -> Element {
            let mut profile = use_signal(UserProfile::sample);
            // the same write the name input performs
            use_hook(|| spawn(async move { profile.with_mut(|p| p.name = "Priya Verma".to_string()) }));
            rsx! {
                ProfileHeader { profile }
                PersonalInfoCard { profile, editing: true }
            }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert_eq!(html.matches("Rahul Sharma").count(), 2);

        dom.wait_for_work().await;
        dom.render_immediate_to_vec();
        let html = dioxus_ssr::render(&dom);
        assert!(!html.contains("Rahul Sharma"));
        assert_eq!(html.matches("Priya Verma").count(), 2);
    }

    #[test]
    fn screen_lists_menu_and_footer() {
        fn app() -> Element {
            use_context_provider(|| AppState::new(UserPrefs::new(SimulatedLatency::ZERO)));
            rsx! { ProfileScreen {} }
        }
        let html = render(app);
        // "&" may come back escaped
        let shown = |text: &str| html.contains(text) || html.contains(&text.replace('&', "&amp;"));
        for (_, label, description) in MENU_ITEMS {
            assert!(shown(label), "missing {label}");
            assert!(shown(description), "missing {description}");
        }
        assert!(html.contains("Rahul Sharma"));
        assert!(html.contains("ParkQwik v1.0.0"));
        assert!(html.contains("Made with ❤️ for seamless travel"));
    }
}
