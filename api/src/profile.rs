//! The signed-in member's details and alert settings.

use chrono::Timelike;
use serde::Deserialize;
use serde::Serialize;

/// Personal information shown (and editable) on the profile screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub vehicle_number: String,
}

impl UserProfile {
    pub fn sample() -> Self {
        Self {
            name: "Rahul Sharma".to_string(),
            email: "rahul.sharma@email.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            vehicle_number: "HR 26 DQ 1234".to_string(),
        }
    }

    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPrefs {
    /// Notify on every toll deduction.
    pub toll_alerts: bool,
    /// Confirm successful recharges.
    pub recharge_alerts: bool,
    /// Warn when the balance runs low.
    pub balance_alerts: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            toll_alerts: true,
            recharge_alerts: true,
            balance_alerts: true,
        }
    }
}

/// Time-of-day salutation for an hour in `0..24`.
pub fn greeting(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good Morning",
        12..=16 => "Good Afternoon",
        _ => "Good Evening",
    }
}

/// [`greeting`] for the local wall clock.
pub fn greeting_now() -> &'static str {
    greeting(chrono::Local::now().hour())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_boundaries() {
        assert_eq!(greeting(0), "Good Morning");
        assert_eq!(greeting(11), "Good Morning");
        assert_eq!(greeting(12), "Good Afternoon");
        assert_eq!(greeting(16), "Good Afternoon");
        assert_eq!(greeting(17), "Good Evening");
        assert_eq!(greeting(23), "Good Evening");
    }

    #[test]
    fn first_name() {
        assert_eq!(UserProfile::sample().first_name(), "Rahul");

        let blank = UserProfile {
            name: String::new(),
            ..UserProfile::sample()
        };
        assert_eq!(blank.first_name(), "");
    }

    #[test]
    fn all_alerts_on_by_default() {
        let prefs = NotificationPrefs::default();
        assert!(prefs.toll_alerts && prefs.recharge_alerts && prefs.balance_alerts);
    }
}
