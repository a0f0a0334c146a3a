//! The simulated wallet backend.
//!
//! Each call waits for its configured latency and then answers from the
//! sample data in [`AppState`]. Nothing leaves the process. Callers own the
//! returned futures, so dropping them (e.g. when a screen unmounts) cancels
//! the pending wait.

use api::mock_data::SAMPLE_BALANCE;
use api::recharge::RechargeReceipt;
use api::rupee_amount::RupeeAmount;
use api::transaction::Transaction;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::info;

use crate::app_state::AppState;
use crate::compat;

/// The FASTag balance shown on the home screen.
pub async fn wallet_balance(state: AppState) -> RupeeAmount {
    compat::sleep(state.prefs.latency().balance).await;
    debug!("balance loaded: {}", SAMPLE_BALANCE);
    SAMPLE_BALANCE
}

/// The full transaction history, newest first.
pub async fn history(state: AppState) -> Vec<Transaction> {
    compat::sleep(state.prefs.latency().history).await;
    debug!("history loaded: {} transactions", state.transactions.len());
    state.transactions.clone()
}

/// "Processes" a payment. The amount must already be validated.
pub async fn recharge(state: AppState, vehicle_number: String, amount: RupeeAmount) -> RechargeReceipt {
    info!("recharge of {} started", amount.to_string_with_symbol());
    compat::sleep(state.prefs.latency().recharge).await;

    let receipt = RechargeReceipt::new(&vehicle_number, amount);
    match serde_json::to_string(&receipt) {
        Ok(json) => info!("recharge receipt: {}", json),
        Err(e) => debug!("could not serialize receipt: {}", e),
    }
    receipt
}
