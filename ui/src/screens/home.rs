//=============================================================================
// File: src/screens/home.rs
//=============================================================================
use crate::app_state::AppState;
use crate::backend;
use crate::components::action_link::ActionLink;
use crate::components::amount::Amount;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::components::pico::Skeleton;
use crate::screens::history::TransactionRow;
use crate::Screen;
use api::profile::greeting_now;
use api::rupee_amount::RupeeAmount;
use chrono::Utc;
use dioxus::prelude::*;

/// The gradient card at the top of the dashboard.
///
/// `balance` is `None` while the simulated fetch is in flight.
#[component]
pub fn BalanceCard(balance: Option<RupeeAmount>, vehicle_number: String) -> Element {
    let mut visible = use_signal(|| true);

    rsx! {
        Card {
            class: "pq-balance-card",
            div {
                class: "pq-row",
                p { class: "pq-grow pq-small", "FASTag Balance" }
                Button {
                    button_type: ButtonType::Ghost,
                    on_click: move |_| visible.toggle(),
                    if visible() { "🙈" } else { "👁" }
                }
            }
            match balance {
                None => rsx! {
                    div {
                        class: "pq-shimmer",
                        Skeleton { width: "8rem", height: "2rem" }
                    }
                },
                Some(amount) => rsx! {
                    h2 {
                        class: "pq-balance",
                        Amount { amount, masked: !visible() }
                    }
                },
            }
            div {
                class: "pq-row pq-small",
                span { class: "pq-grow", "Vehicle: {vehicle_number}" }
                span { class: "pq-status", "Active" }
            }
        }
    }
}

#[component]
pub fn HomeScreen() -> Element {
    let app_state = use_context::<AppState>();

    let balance = use_resource({
        let app_state = app_state.clone();
        move || {
            let state = app_state.clone();
            async move { backend::wallet_balance(state).await }
        }
    });

    let profile = &app_state.profile;
    let greeting = greeting_now();
    let latest = app_state.latest_transaction().cloned();

    rsx! {
        div {
            class: "pq-screen",

            // Header
            div {
                class: "pq-row",
                div { class: "pq-logo-icon", "🚗" }
                div {
                    class: "pq-grow",
                    h1 { class: "pq-title", "ParkQwik" }
                    p { class: "pq-muted pq-small", "{greeting}, {profile.first_name()}!" }
                }
            }

            BalanceCard {
                balance: *balance.read(),
                vehicle_number: profile.vehicle_number.clone(),
            }

            // Quick Actions
            h3 { class: "pq-strong", "Quick Actions" }
            Grid {
                ActionLink {
                    to: Screen::Recharge,
                    Card {
                        class: "pq-center",
                        div { class: "pq-tx-icon credit", "{Screen::Recharge.icon()}" }
                        p { class: "pq-strong", "Recharge" }
                        p { class: "pq-muted pq-small", "Add money" }
                    }
                }
                ActionLink {
                    to: Screen::History,
                    Card {
                        class: "pq-center",
                        div { class: "pq-tx-icon", "{Screen::History.icon()}" }
                        p { class: "pq-strong", "Transactions" }
                        p { class: "pq-muted pq-small", "View history" }
                    }
                }
            }

            // Recent Activity
            h3 { class: "pq-strong", "Recent Activity" }
            if let Some(transaction) = latest {
                TransactionRow { transaction, now: Utc::now() }
            } else {
                p { class: "pq-muted", "No recent activity" }
            }
        }
    }
}
