//! This crate contains the wallet's platform-independent data: the
//! transaction model, rupee amounts, search/filter, relative-time labels,
//! recharge validation, user prefs and the built-in sample data.

pub mod filter;
pub mod mock_data;
pub mod prefs;
pub mod profile;
pub mod recharge;
pub mod relative_time;
pub mod rupee_amount;
pub mod transaction;
