pub mod latency;
pub mod user_prefs;
