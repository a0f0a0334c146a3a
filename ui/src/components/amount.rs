//! Components for displaying rupee amounts.

use api::rupee_amount::RupeeAmount;
use api::transaction::TransactionKind;
use dioxus::prelude::*;

#[derive(PartialEq, Clone, Copy, Debug, Default)]
pub enum AmountFormat {
    /// "₹85.00"
    #[default]
    Symbol,
    /// "₹85" when whole, "₹85.50" otherwise.
    Compact,
}

impl AmountFormat {
    pub fn render(&self, amount: RupeeAmount) -> String {
        match self {
            Self::Symbol => amount.to_string_with_symbol(),
            Self::Compact => amount.to_string_compact(),
        }
    }
}

/// A plain rupee amount. When `masked` is set the digits are replaced by
/// dots, e.g. while the user has hidden their balance.
#[component]
pub fn Amount(
    amount: RupeeAmount,
    #[props(default)] format: AmountFormat,
    #[props(default = false)] masked: bool,
) -> Element {
    let (text, title) = if masked {
        (RupeeAmount::MASKED.to_string(), String::new())
    } else {
        // the exact value stays available on hover even when compacted
        (format.render(amount), amount.to_string_with_symbol())
    };

    rsx! {
        span {
            title: "{title}",
            "{text}"
        }
    }
}

/// A transaction amount: magnitude only, coloured and marked by kind
/// (green "+" for recharges, red "−" for tolls).
#[component]
pub fn TransactionAmount(amount: RupeeAmount, kind: TransactionKind) -> Element {
    let (class, marker) = match kind {
        TransactionKind::Recharge => ("pq-credit", "+"),
        TransactionKind::Toll => ("pq-debit", "−"),
    };

    rsx! {
        span {
            class: "pq-amount {class}",
            span { class: "pq-amount-marker", "{marker}" }
            Amount { amount: amount.abs() }
        }
    }
}
