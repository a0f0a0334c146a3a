//! The wallet's single entity: a FASTag transaction.

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::rupee_amount::RupeeAmount;

/// What moved money on the tag.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIs,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money added to the tag. Always a credit.
    Recharge,
    /// A toll plaza deduction. Always a debit.
    Toll,
}

impl TransactionKind {
    /// Applies this kind's sign to an amount magnitude.
    pub fn signed(&self, magnitude: RupeeAmount) -> RupeeAmount {
        match self {
            Self::Recharge => magnitude.abs(),
            Self::Toll => -magnitude.abs(),
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIs,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    #[default]
    Completed,
    Pending,
    Failed,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransactionError {
    #[error("a {kind} of {amount} has the wrong sign")]
    SignMismatch {
        kind: TransactionKind,
        amount: RupeeAmount,
    },
}

/// A single recharge or toll payment.
///
/// The amount's sign always agrees with the kind: constructors take a
/// magnitude and derive the sign, so a toll can never show up as a credit.
/// Deserialization checks the same rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TransactionRecord")]
pub struct Transaction {
    id: String,
    kind: TransactionKind,
    amount: RupeeAmount,
    description: String,
    location: Option<String>,
    occurred_at: DateTime<Utc>,
    status: TransactionStatus,
}

/// The unchecked wire shape of a [`Transaction`].
#[derive(Deserialize)]
struct TransactionRecord {
    id: String,
    kind: TransactionKind,
    amount: RupeeAmount,
    description: String,
    location: Option<String>,
    occurred_at: DateTime<Utc>,
    status: TransactionStatus,
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = TransactionError;

    fn try_from(record: TransactionRecord) -> Result<Self, Self::Error> {
        if record.kind.signed(record.amount) != record.amount {
            return Err(TransactionError::SignMismatch {
                kind: record.kind,
                amount: record.amount,
            });
        }
        Ok(Self {
            id: record.id,
            kind: record.kind,
            amount: record.amount,
            description: record.description,
            location: record.location,
            occurred_at: record.occurred_at,
            status: record.status,
        })
    }
}

impl Transaction {
    pub fn new(
        id: impl Into<String>,
        kind: TransactionKind,
        magnitude: RupeeAmount,
        description: impl Into<String>,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            amount: kind.signed(magnitude),
            description: description.into(),
            location: None,
            occurred_at,
            status: TransactionStatus::default(),
        }
    }

    /// A credit to the tag.
    pub fn recharge(
        id: impl Into<String>,
        magnitude: RupeeAmount,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self::new(id, TransactionKind::Recharge, magnitude, "FASTag Recharge", occurred_at)
    }

    /// A deduction at a toll plaza.
    pub fn toll(
        id: impl Into<String>,
        magnitude: RupeeAmount,
        road: impl Into<String>,
        plaza: impl Into<String>,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self::new(id, TransactionKind::Toll, magnitude, road, occurred_at).with_location(plaza)
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_status(mut self, status: TransactionStatus) -> Self {
        self.status = status;
        self
    }

    // --- Getters ---

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// The signed amount: negative for debits, positive for credits.
    pub fn amount(&self) -> RupeeAmount {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    pub fn status(&self) -> TransactionStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn sign_follows_kind() {
        let now = Utc::now();
        let fee = RupeeAmount::from_rupees(85);

        let toll = Transaction::toll("a", fee, "Yamuna Expressway", "Toll Plaza 2", now);
        assert!(toll.amount().is_negative());

        // a caller passing an already-negative magnitude still gets a debit
        let toll = Transaction::toll("b", -fee, "Yamuna Expressway", "Toll Plaza 2", now);
        assert_eq!(toll.amount(), -fee);

        let recharge = Transaction::recharge("c", -fee, now);
        assert_eq!(recharge.amount(), fee);
        assert_eq!(recharge.location(), None);
        assert_eq!(recharge.description(), "FASTag Recharge");
    }

    #[test]
    fn kind_and_status_keys() {
        assert_eq!(TransactionKind::Toll.to_string(), "toll");
        assert_eq!(TransactionKind::from_str("Recharge"), Ok(TransactionKind::Recharge));
        assert_eq!(TransactionStatus::Pending.to_string(), "pending");
        assert_eq!(TransactionStatus::default(), TransactionStatus::Completed);
    }

    #[test]
    fn serializes_with_lowercase_keys() {
        let now = Utc::now();
        let tx = Transaction::recharge("2", RupeeAmount::from_rupees(1000), now)
            .with_status(TransactionStatus::Failed);

        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["kind"], "recharge");
        assert_eq!(json["status"], "failed");
        assert_eq!(json["amount"]["paise"], 100000);

        let back: Transaction = serde_json::from_value(json).unwrap();
        assert_eq!(back, tx);
    }

    #[test]
    fn deserializing_a_credit_toll_fails() {
        let now = Utc::now();
        let toll = Transaction::toll("1", RupeeAmount::from_rupees(85), "Yamuna Expressway", "Toll Plaza 2", now);

        let mut json = serde_json::to_value(&toll).unwrap();
        json["amount"]["paise"] = serde_json::json!(8500);

        let err = serde_json::from_value::<Transaction>(json).unwrap_err();
        assert!(err.to_string().contains("wrong sign"), "{err}");
    }
}
