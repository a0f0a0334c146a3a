//=============================================================================
// File: src/screens/history.rs
//=============================================================================
use crate::app_state::AppState;
use crate::backend;
use crate::components::amount::TransactionAmount;
use crate::components::empty_state::EmptyState;
use crate::components::pico::Badge;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Input;
use crate::components::pico::Skeleton;
use api::filter::Category;
use api::filter::TransactionFilter;
use api::relative_time::format_relative;
use api::transaction::Transaction;
use chrono::DateTime;
use chrono::Utc;
use dioxus::prelude::*;
use strum::IntoEnumIterator;

/// How many placeholder cards to show while the history loads.
const SKELETON_ROWS: usize = 5;

/// A self-contained component for rendering a single transaction card.
#[component]
pub fn TransactionRow(transaction: Transaction, now: DateTime<Utc>) -> Element {
    let kind = transaction.kind();
    let (icon_class, icon) = if kind.is_recharge() {
        ("pq-tx-icon credit", "💳")
    } else {
        ("pq-tx-icon debit", "📍")
    };
    let age = format_relative(transaction.occurred_at(), now);

    rsx! {
        Card {
            class: "pq-tx-row",
            div {
                class: "pq-row",
                div { class: "{icon_class}", "{icon}" }
                div {
                    class: "pq-grow",
                    div {
                        class: "pq-row pq-tight",
                        p { class: "pq-truncate pq-strong", "{transaction.description()}" }
                        Badge { "{transaction.status()}" }
                    }
                    div {
                        class: "pq-row pq-tight pq-muted pq-small",
                        span { "🕘" }
                        span { "{age}" }
                        if let Some(location) = transaction.location() {
                            span { "•" }
                            span { class: "pq-truncate", "{location}" }
                        }
                    }
                }
                TransactionAmount { amount: transaction.amount(), kind }
            }
        }
    }
}

/// The list area of the history screen.
///
/// `transactions` is `None` while loading, which renders the skeleton; an
/// empty list renders the "No transactions found" state instead.
#[component]
pub fn TransactionList(
    transactions: Option<Vec<Transaction>>,
    has_query: bool,
    now: DateTime<Utc>,
) -> Element {
    match transactions {
        None => rsx! {
            for index in 0..SKELETON_ROWS {
                Card {
                    key: "{index}",
                    class: "pq-tx-row pq-shimmer",
                    div {
                        class: "pq-row",
                        Skeleton { width: "2.5rem", height: "2.5rem" }
                        div {
                            class: "pq-grow",
                            Skeleton { width: "75%", height: "1rem" }
                            Skeleton { width: "50%", height: "0.75rem" }
                        }
                        Skeleton { width: "4rem", height: "1rem" }
                    }
                }
            }
        },
        Some(list) if list.is_empty() => {
            let hint = if has_query {
                "Try adjusting your search terms"
            } else {
                "Your transaction history will appear here"
            };
            rsx! {
                EmptyState {
                    title: "No transactions found",
                    description: hint.to_string(),
                    icon: rsx! { "🕘" },
                }
            }
        }
        Some(list) => rsx! {
            for transaction in list {
                TransactionRow {
                    key: "{transaction.id()}",
                    transaction: transaction.clone(),
                    now,
                }
            }
        },
    }
}

#[allow(non_snake_case)]
#[component]
pub fn HistoryScreen() -> Element {
    let app_state = use_context::<AppState>();
    let mut query = use_signal(String::new);
    let mut category = use_signal(Category::default);

    let history = use_resource(move || {
        let state = app_state.clone();
        async move { backend::history(state).await }
    });

    let filter = TransactionFilter::new(query(), category());
    let visible = history.read().as_ref().map(|all| filter.apply(all));
    let now = Utc::now();

    rsx! {
        div {
            class: "pq-screen",
            h1 { class: "pq-title", "Transaction History" }

            Input {
                name: "history_search",
                value: "{query}",
                placeholder: "Search transactions...",
                icon: "🔍",
                on_input: move |evt: FormEvent| query.set(evt.value()),
            }

            div {
                class: "pq-row pq-tight",
                for choice in Category::iter() {
                    Button {
                        key: "{choice.label()}",
                        button_type: ButtonType::Primary,
                        outline: category() != choice,
                        class: "pq-chip",
                        on_click: move |_| category.set(choice),
                        "{choice.label()}"
                    }
                }
            }

            div {
                class: "pq-stack",
                TransactionList {
                    transactions: visible,
                    has_query: filter.has_query(),
                    now,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::mock_data;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn sample() -> Vec<Transaction> {
        mock_data::sample_transactions(Utc::now())
    }

    #[test]
    fn loading_renders_skeleton_not_empty_state() {
        fn app() -> Element {
            rsx! { TransactionList { transactions: None, has_query: false, now: Utc::now() } }
        }
        let html = render(app);
        assert_eq!(html.matches("pq-shimmer").count(), SKELETON_ROWS);
        assert!(!html.contains("No transactions found"));
    }

    #[test]
    fn unmatched_search_renders_empty_state_not_skeleton() {
        fn app() -> Element {
            let filtered = TransactionFilter::new("zzz", Category::All).apply(&sample());
            rsx! { TransactionList { transactions: Some(filtered), has_query: true, now: Utc::now() } }
        }
        let html = render(app);
        assert!(html.contains("No transactions found"));
        assert!(html.contains("Try adjusting your search terms"));
        assert!(!html.contains("pq-shimmer"));
    }

    #[test]
    fn empty_history_without_query_has_generic_hint() {
        fn app() -> Element {
            rsx! { TransactionList { transactions: Some(vec![]), has_query: false, now: Utc::now() } }
        }
        let html = render(app);
        assert!(html.contains("Your transaction history will appear here"));
    }

    #[test]
    fn rows_show_description_location_age_and_amount() {
        fn app() -> Element {
            let now = Utc::now();
            let tolls = TransactionFilter::new("", Category::Toll)
                .apply(&mock_data::sample_transactions(now));
            rsx! { TransactionList { transactions: Some(tolls), has_query: false, now } }
        }
        let html = render(app);
        assert!(html.contains("Delhi-Gurgaon Expressway"));
        assert!(html.contains("Toll Plaza 1"));
        assert!(html.contains("2h ago"));
        assert!(html.contains("₹85.00"));
        assert!(html.contains("completed"));
        assert!(!html.contains("FASTag Recharge"));
        assert!(!html.contains("-₹"));
        // original order is kept
        let delhi = html.find("Delhi-Gurgaon").unwrap();
        let mumbai = html.find("Mumbai-Pune").unwrap();
        let yamuna = html.find("Yamuna").unwrap();
        assert!(delhi < mumbai && mumbai < yamuna);
    }
}
