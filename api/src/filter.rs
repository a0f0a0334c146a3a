//! Client-side search and category filtering of transaction history.

use serde::Deserialize;
use serde::Serialize;

use crate::transaction::Transaction;
use crate::transaction::TransactionKind;

/// The category buttons above the history list.
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
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Category {
    #[default]
    All,
    Recharge,
    Toll,
}

impl Category {
    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Recharge => "Recharge",
            Self::Toll => "Toll",
        }
    }

    pub fn admits(&self, kind: TransactionKind) -> bool {
        match self {
            Self::All => true,
            Self::Recharge => kind.is_recharge(),
            Self::Toll => kind.is_toll(),
        }
    }
}

/// A free-text query combined with a category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionFilter {
    query: String,
    category: Category,
}

impl TransactionFilter {
    pub fn new(query: impl Into<String>, category: Category) -> Self {
        Self {
            query: query.into(),
            category,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    /// True if `tx` passes both the category and the text search.
    ///
    /// The search is a case-insensitive substring match against the
    /// description and, when present, the location. An empty query matches
    /// everything.
    pub fn matches(&self, tx: &Transaction) -> bool {
        self.category.admits(tx.kind()) && self.matches_query(tx)
    }

    fn matches_query(&self, tx: &Transaction) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

        contains(tx.description()) || tx.location().is_some_and(contains)
    }

    /// Returns the matching transactions in their original order.
    pub fn apply<'a, I>(&self, transactions: I) -> Vec<Transaction>
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        transactions
            .into_iter()
            .filter(|tx| self.matches(tx))
            .cloned()
            .collect()
    }
}
