//! Validation of user-entered recharge amounts.

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::rupee_amount::RupeeAmount;

/// The smallest recharge the wallet accepts.
pub const MIN_RECHARGE: RupeeAmount = RupeeAmount::from_rupees(10);

/// One-tap amounts on the recharge screen, in rupees.
pub const PRESET_AMOUNTS: [i64; 6] = [100, 200, 500, 1000, 2000, 5000];

/// Why a recharge was refused. `Display` is the user-facing message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RechargeError {
    #[error("Please enter an amount of at least {}", MIN_RECHARGE.to_string_compact())]
    Empty,
    #[error("Please enter an amount of at least {}", MIN_RECHARGE.to_string_compact())]
    NotANumber,
    #[error("Please enter an amount of at least {}", .min.to_string_compact())]
    BelowMinimum { min: RupeeAmount },
    /// A payment is still in flight; only one may run at a time.
    #[error("A recharge is already being processed")]
    AlreadyProcessing,
}

/// Parses and checks the amount typed on the recharge screen.
pub fn validate_amount(input: &str) -> Result<RupeeAmount, RechargeError> {
    if input.trim().is_empty() {
        return Err(RechargeError::Empty);
    }
    let amount = RupeeAmount::new_from_str(input).map_err(|_| RechargeError::NotANumber)?;
    if amount < MIN_RECHARGE {
        return Err(RechargeError::BelowMinimum { min: MIN_RECHARGE });
    }
    Ok(amount)
}

/// What the simulated payment gateway hands back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RechargeReceipt {
    pub vehicle_number: String,
    pub amount: RupeeAmount,
}

impl RechargeReceipt {
    pub fn new(vehicle_number: &str, amount: RupeeAmount) -> Self {
        Self {
            vehicle_number: vehicle_number.trim().to_uppercase(),
            amount,
        }
    }
}
