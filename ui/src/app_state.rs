use api::mock_data;
use api::prefs::user_prefs::UserPrefs;
use api::profile::UserProfile;
use api::transaction::Transaction;
use chrono::Utc;
use std::ops::Deref;
use std::sync::Arc;

/// Everything that is fixed for the life of the process.
#[derive(Debug, PartialEq)]
pub struct AppStateData {
    pub prefs: UserPrefs,
    pub profile: UserProfile,
    /// The sample history, generated once at startup.
    pub transactions: Vec<Transaction>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    /// Builds the state with sample history dated relative to now.
    pub fn new(prefs: UserPrefs) -> Self {
        Self(Arc::new(AppStateData {
            prefs,
            profile: UserProfile::sample(),
            transactions: mock_data::sample_transactions(Utc::now()),
        }))
    }

    /// The newest transaction, for the home screen's recent activity card.
    pub fn latest_transaction(&self) -> Option<&Transaction> {
        self.transactions.iter().max_by_key(|tx| tx.occurred_at())
    }
}
