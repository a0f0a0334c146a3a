//! The wallet's built-in sample data. Nothing here is fetched or persisted.

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::rupee_amount::RupeeAmount;
use crate::transaction::Transaction;

/// Balance shown on the home screen once the simulated load finishes.
pub const SAMPLE_BALANCE: RupeeAmount = RupeeAmount::from_paise(245_075);

/// Builds the sample history, newest first, with ages measured from `now`.
pub fn sample_transactions(now: DateTime<Utc>) -> Vec<Transaction> {
    vec![
        Transaction::toll(
            "1",
            RupeeAmount::from_rupees(85),
            "Delhi-Gurgaon Expressway",
            "Toll Plaza 1",
            now - Duration::hours(2),
        ),
        Transaction::recharge("2", RupeeAmount::from_rupees(1000), now - Duration::days(1)),
        Transaction::toll(
            "3",
            RupeeAmount::from_rupees(45),
            "Mumbai-Pune Expressway",
            "Toll Plaza 3",
            now - Duration::days(2),
        ),
        Transaction::toll(
            "4",
            RupeeAmount::from_rupees(120),
            "Yamuna Expressway",
            "Toll Plaza 2",
            now - Duration::days(3),
        ),
        Transaction::recharge("5", RupeeAmount::from_rupees(500), now - Duration::days(5)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relative_time::format_relative;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let sample = sample_transactions(Utc::now());
        let ids: HashSet<_> = sample.iter().map(|tx| tx.id()).collect();
        assert_eq!(ids.len(), sample.len());
    }

    #[test]
    fn only_tolls_carry_a_location() {
        for tx in sample_transactions(Utc::now()) {
            assert_eq!(tx.location().is_some(), tx.kind().is_toll(), "{}", tx.id());
            assert!(tx.status().is_completed());
        }
    }

    #[test]
    fn ages_render_as_expected() {
        let now = Utc::now();
        let labels: Vec<_> = sample_transactions(now)
            .iter()
            .map(|tx| format_relative(tx.occurred_at(), now))
            .collect();
        assert_eq!(labels, ["2h ago", "1d ago", "2d ago", "3d ago", "5d ago"]);
    }

    #[test]
    fn balance_formats() {
        assert_eq!(SAMPLE_BALANCE.to_string_with_symbol(), "₹2450.75");
    }
}
