//! Provides a safe, self-contained type for representing rupee amounts.

use std::fmt;
use std::ops::Neg;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Number of paise in one rupee.
const PAISE_PER_RUPEE: i64 = 100;

/// Number of decimal places a rupee amount may carry.
const DECIMALS: usize = 2;

/// An error that can occur when parsing a string into a `RupeeAmount`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseRupeeAmountError {
    /// The string is not in a valid numeric format (e.g., "abc", "1.2.3").
    #[error("invalid rupee amount format")]
    InvalidFormat,
    /// The string has more than two decimal places (e.g., "1.234").
    #[error("too many decimal places for rupees")]
    TooManyDecimals,
}

/// Represents a monetary value in Indian rupees.
///
/// Internally, the amount is stored as a signed 64-bit integer count of paise
/// to prevent floating-point inaccuracies. The default `Display`
/// implementation formats this as a plain numeric string ("2450.75").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RupeeAmount {
    paise: i64,
}

impl RupeeAmount {
    pub const ZERO: Self = Self { paise: 0 };

    /// The currency symbol.
    pub const SYMBOL: &'static str = "₹";

    /// Shown in place of digits when the balance is hidden.
    pub const MASKED: &'static str = "₹••••••";

    // --- Constructors ---

    /// Creates a new `RupeeAmount` directly from paise.
    ///
    /// # Example
    /// ```
    /// # use api::rupee_amount::RupeeAmount;
    /// let amount = RupeeAmount::from_paise(245075);
    /// assert_eq!(amount.to_string(), "2450.75");
    /// ```
    pub const fn from_paise(paise: i64) -> Self {
        Self { paise }
    }

    /// Creates a new `RupeeAmount` from a whole number of rupees.
    pub const fn from_rupees(rupees: i64) -> Self {
        Self {
            paise: rupees * PAISE_PER_RUPEE,
        }
    }

    /// Creates a new `RupeeAmount` by parsing a decimal string.
    ///
    /// Surrounding whitespace is ignored. A leading `-` is accepted, but
    /// exponents, thousands separators and currency symbols are not.
    ///
    /// # Examples
    /// ```
    /// # use api::rupee_amount::{RupeeAmount, ParseRupeeAmountError};
    /// let amount = RupeeAmount::new_from_str("123.4").unwrap();
    /// assert_eq!(amount.as_paise(), 12340);
    ///
    /// let err = RupeeAmount::new_from_str("1.234").unwrap_err();
    /// assert_eq!(err, ParseRupeeAmountError::TooManyDecimals);
    /// ```
    pub fn new_from_str(s: &str) -> Result<Self, ParseRupeeAmountError> {
        let s = s.trim();

        let (is_negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };

        let mut parts = s.split('.');
        let major_str = parts.next().unwrap_or("");
        let minor_str = parts.next().unwrap_or("");

        if parts.next().is_some() || (major_str.is_empty() && minor_str.is_empty()) {
            return Err(ParseRupeeAmountError::InvalidFormat);
        }

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(major_str) || !all_digits(minor_str) {
            return Err(ParseRupeeAmountError::InvalidFormat);
        }

        if minor_str.len() > DECIMALS {
            return Err(ParseRupeeAmountError::TooManyDecimals);
        }

        let major_units = if major_str.is_empty() {
            0
        } else {
            major_str
                .parse::<i64>()
                .map_err(|_| ParseRupeeAmountError::InvalidFormat)?
        };

        let minor_units = if minor_str.is_empty() {
            0
        } else {
            minor_str
                .parse::<i64>()
                .map_err(|_| ParseRupeeAmountError::InvalidFormat)?
        };

        let scaling_factor = 10_i64.pow((DECIMALS - minor_str.len()) as u32);
        let total = major_units
            .checked_mul(PAISE_PER_RUPEE)
            .and_then(|major| major.checked_add(minor_units * scaling_factor))
            .ok_or(ParseRupeeAmountError::InvalidFormat)?;

        Ok(Self::from_paise(if is_negative { -total } else { total }))
    }

    // --- Getters ---

    /// Returns the raw amount in paise.
    pub fn as_paise(&self) -> i64 {
        self.paise
    }

    pub fn abs(&self) -> Self {
        Self::from_paise(self.paise.abs())
    }

    pub fn is_negative(&self) -> bool {
        self.paise < 0
    }

    pub fn is_positive(&self) -> bool {
        self.paise > 0
    }

    // --- Display Methods ---

    /// Formats the amount with the rupee symbol (e.g., "₹25.34").
    ///
    /// Negative amounts put the sign before the symbol ("-₹85.00").
    pub fn to_string_with_symbol(&self) -> String {
        if self.is_negative() {
            format!("-{}{}", Self::SYMBOL, self.abs())
        } else {
            format!("{}{}", Self::SYMBOL, self)
        }
    }

    /// Like [`Self::to_string_with_symbol`] but drops the paise when the
    /// amount is a whole number of rupees ("₹500", "₹10.50").
    pub fn to_string_compact(&self) -> String {
        if self.paise % PAISE_PER_RUPEE != 0 {
            return self.to_string_with_symbol();
        }
        let rupees = self.paise / PAISE_PER_RUPEE;
        if rupees < 0 {
            format!("-{}{}", Self::SYMBOL, -rupees)
        } else {
            format!("{}{}", Self::SYMBOL, rupees)
        }
    }

    /// Formats the amount with an explicit sign and the rupee symbol
    /// ("+₹1000.00", "-₹85.00").
    pub fn to_string_signed(&self) -> String {
        if self.is_negative() {
            self.to_string_with_symbol()
        } else {
            format!("+{}", self.to_string_with_symbol())
        }
    }
}

/// Formats the amount as a numeric string with two decimals (e.g., "25.34").
impl fmt::Display for RupeeAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.paise.unsigned_abs();
        let per_rupee = PAISE_PER_RUPEE as u64;

        write!(
            f,
            "{}{}.{:0width$}",
            sign,
            abs / per_rupee,
            abs % per_rupee,
            width = DECIMALS
        )
    }
}

impl Neg for RupeeAmount {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_paise(-self.paise)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_and_fractional_rupees() {
        assert_eq!(RupeeAmount::new_from_str("10"), Ok(RupeeAmount::from_rupees(10)));
        assert_eq!(RupeeAmount::new_from_str("2450.75"), Ok(RupeeAmount::from_paise(245075)));
        assert_eq!(RupeeAmount::new_from_str("0.5"), Ok(RupeeAmount::from_paise(50)));
        assert_eq!(RupeeAmount::new_from_str(".5"), Ok(RupeeAmount::from_paise(50)));
        assert_eq!(RupeeAmount::new_from_str(" 100 "), Ok(RupeeAmount::from_rupees(100)));
        assert_eq!(RupeeAmount::new_from_str("-85"), Ok(RupeeAmount::from_rupees(-85)));
    }

    #[test]
    fn rejects_malformed_input() {
        for input in ["", "abc", "1.2.3", ".", "12abc", "+5", "1e3", "₹10", "1,000"] {
            assert_eq!(
                RupeeAmount::new_from_str(input),
                Err(ParseRupeeAmountError::InvalidFormat),
                "input {input:?}"
            );
        }
        assert_eq!(
            RupeeAmount::new_from_str("1.234"),
            Err(ParseRupeeAmountError::TooManyDecimals)
        );
    }

    #[test]
    fn overflow_is_an_error() {
        assert_eq!(
            RupeeAmount::new_from_str("99999999999999999999"),
            Err(ParseRupeeAmountError::InvalidFormat)
        );
    }

    #[test]
    fn display_variants() {
        let debit = RupeeAmount::from_rupees(-85);
        assert_eq!(debit.to_string(), "-85.00");
        assert_eq!(debit.to_string_with_symbol(), "-₹85.00");
        assert_eq!(debit.abs().to_string_with_symbol(), "₹85.00");

        let credit = RupeeAmount::from_paise(100005);
        assert_eq!(credit.to_string_with_symbol(), "₹1000.05");
        assert_eq!(credit.to_string_signed(), "+₹1000.05");
        assert_eq!((-credit).to_string_signed(), "-₹1000.05");

        assert_eq!(RupeeAmount::from_paise(-5).to_string(), "-0.05");

        assert_eq!(RupeeAmount::from_rupees(500).to_string_compact(), "₹500");
        assert_eq!(RupeeAmount::from_paise(1050).to_string_compact(), "₹10.50");
        assert_eq!(RupeeAmount::from_rupees(-85).to_string_compact(), "-₹85");
    }
}
