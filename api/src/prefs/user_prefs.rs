use super::latency::SimulatedLatency;
use serde::Deserialize;
use serde::Serialize;

/// Represents all user prefs. Intended for saving to a file, editing in a settings dialog, etc.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize, Default)]
pub struct UserPrefs {
    latency: SimulatedLatency,
}

impl UserPrefs {
    pub fn new(latency: SimulatedLatency) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> &SimulatedLatency {
        &self.latency
    }
}
