//! Short "how long ago" labels for transaction timestamps.

use chrono::DateTime;
use chrono::Utc;

const HOURS_PER_DAY: i64 = 24;

/// Formats the age of `then` relative to `now`.
///
/// Whole hours are truncated, never rounded:
/// - under one hour: "Just now"
/// - under a day: "5h ago"
/// - otherwise whole days: "3d ago"
///
/// Timestamps in the future count as "Just now".
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - then).num_hours().max(0);

    match hours {
        0 => "Just now".to_string(),
        h if h < HOURS_PER_DAY => format!("{h}h ago"),
        h => format!("{}d ago", h / HOURS_PER_DAY),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn ago(duration: Duration) -> String {
        let now = Utc::now();
        format_relative(now - duration, now)
    }

    #[test]
    fn under_an_hour_is_just_now() {
        assert_eq!(ago(Duration::zero()), "Just now");
        assert_eq!(ago(Duration::minutes(59)), "Just now");
    }

    #[test]
    fn hours_are_truncated() {
        assert_eq!(ago(Duration::hours(1)), "1h ago");
        assert_eq!(ago(Duration::minutes(2 * 60 + 59)), "2h ago");
        assert_eq!(ago(Duration::hours(23) + Duration::minutes(59)), "23h ago");
    }

    #[test]
    fn days_use_integer_division() {
        assert_eq!(ago(Duration::hours(24)), "1d ago");
        assert_eq!(ago(Duration::hours(47)), "1d ago");
        assert_eq!(ago(Duration::hours(48)), "2d ago");
        assert_eq!(ago(Duration::days(5)), "5d ago");
        assert_eq!(ago(Duration::days(400)), "400d ago");
    }

    #[test]
    fn future_timestamps_are_just_now() {
        assert_eq!(ago(Duration::hours(-3)), "Just now");
        assert_eq!(ago(Duration::days(-2)), "Just now");
    }

    #[test]
    fn matches_label_rule_for_every_hour_in_a_month() {
        let now = Utc::now();
        for h in 0..(31 * 24) {
            let expected = match h {
                0 => "Just now".to_string(),
                h if h < 24 => format!("{h}h ago"),
                h => format!("{}d ago", h / 24),
            };
            assert_eq!(format_relative(now - Duration::hours(h), now), expected);
        }
    }
}
