use serde::Deserialize;
use serde::Serialize;
use std::env;
use std::time::Duration;

/// How long each simulated backend call pretends to take.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SimulatedLatency {
    /// Home screen balance fetch.
    pub balance: Duration,
    /// History screen transaction fetch.
    pub history: Duration,
    /// Payment processing after "Pay" is pressed.
    pub recharge: Duration,
    /// How long a toast stays on screen.
    pub toast: Duration,
}

impl SimulatedLatency {
    pub const DEFAULT_BALANCE_MS: u64 = 1500;
    pub const DEFAULT_HISTORY_MS: u64 = 1000;
    pub const DEFAULT_RECHARGE_MS: u64 = 2000;
    pub const DEFAULT_TOAST_MS: u64 = 4000;

    /// No waiting at all.
    pub const ZERO: Self = Self {
        balance: Duration::ZERO,
        history: Duration::ZERO,
        recharge: Duration::ZERO,
        toast: Duration::ZERO,
    };

    /// Creates a SimulatedLatency instance from environment variables,
    /// with in-code defaults.
    ///
    /// # Environment Variables (milliseconds):
    /// - `PARKQWIK_BALANCE_DELAY_MS`: defaults to 1500
    /// - `PARKQWIK_HISTORY_DELAY_MS`: defaults to 1000
    /// - `PARKQWIK_RECHARGE_DELAY_MS`: defaults to 2000
    /// - `PARKQWIK_TOAST_MS`: defaults to 4000
    ///
    /// Unset or unparseable values fall back to the default. In the browser
    /// there is no environment, so the defaults always apply.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let millis = |key: &str, default: u64| {
            let ms = lookup(key)
                .and_then(|val| val.trim().parse::<u64>().ok())
                .unwrap_or(default);
            Duration::from_millis(ms)
        };

        Self {
            balance: millis("PARKQWIK_BALANCE_DELAY_MS", Self::DEFAULT_BALANCE_MS),
            history: millis("PARKQWIK_HISTORY_DELAY_MS", Self::DEFAULT_HISTORY_MS),
            recharge: millis("PARKQWIK_RECHARGE_DELAY_MS", Self::DEFAULT_RECHARGE_MS),
            toast: millis("PARKQWIK_TOAST_MS", Self::DEFAULT_TOAST_MS),
        }
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn with_vars(vars: &[(&str, &str)]) -> SimulatedLatency {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SimulatedLatency::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let latency = with_vars(&[]);
        assert_eq!(latency.balance, Duration::from_millis(1500));
        assert_eq!(latency.history, Duration::from_millis(1000));
        assert_eq!(latency.recharge, Duration::from_millis(2000));
        assert_eq!(latency.toast, Duration::from_millis(4000));
    }

    #[test]
    fn overrides_and_bad_values() {
        let latency = with_vars(&[
            ("PARKQWIK_RECHARGE_DELAY_MS", "250"),
            ("PARKQWIK_HISTORY_DELAY_MS", " 0 "),
            ("PARKQWIK_BALANCE_DELAY_MS", "soon"),
        ]);
        assert_eq!(latency.recharge, Duration::from_millis(250));
        assert_eq!(latency.history, Duration::ZERO);
        assert_eq!(latency.balance, Duration::from_millis(1500));
    }
}
