//! # Bank Module
//!
//! A bank is an immutable value shared by reference between the accounts and
//! credits opened with it.

use crate::config::LedgerConfig;
use crate::error::CoreResult;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A bank: full name, short name and base interest rate in percent.
///
/// # Examples
/// ```
/// use pocketbank_core::Bank;
/// use rust_decimal::Decimal;
///
/// let bank = Bank::new("Sberbank of Russia", "SBER", Decimal::new(15, 1));
/// assert_eq!(bank.short_name, "SBER");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bank {
    pub name: String,
    pub short_name: String,
    /// Base rate in percent, expected within 0.1..=2.0
    pub interest_rate: Decimal,
}

impl Bank {
    /// Create a bank, accepting every value as-is.
    pub fn new(name: &str, short_name: &str, interest_rate: Decimal) -> Self {
        Self {
            name: name.to_string(),
            short_name: short_name.to_string(),
            interest_rate,
        }
    }

    /// Create a bank whose rate is checked against the configured range.
    pub fn validated(
        name: &str,
        short_name: &str,
        interest_rate: Decimal,
        config: &LedgerConfig,
    ) -> CoreResult<Self> {
        let bank = Self::new(name, short_name, interest_rate);
        config.validate_bank(&bank)?;
        Ok(bank)
    }

    /// Wrap into the shared handle accounts and credits hold
    pub fn shared(self) -> Arc<Bank> {
        Arc::new(self)
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {}%)", self.name, self.short_name, self.interest_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_bank_fields_read_back() {
        let bank = Bank::new("Tinkoff Bank", "TCS", dec!(1.2));

        assert_eq!(bank.name, "Tinkoff Bank");
        assert_eq!(bank.short_name, "TCS");
        assert_eq!(bank.interest_rate, dec!(1.2));
    }

    #[test]
    fn test_bank_new_is_total() {
        // No validation on the plain constructor
        let bank = Bank::new("", "", dec!(-7));
        assert_eq!(bank.interest_rate, dec!(-7));
    }

    #[test]
    fn test_bank_validated() {
        let config = LedgerConfig::default();

        assert!(Bank::validated("VTB Bank", "VTB", dec!(0.5), &config).is_ok());
        assert!(Bank::validated("VTB Bank", "VTB", dec!(0.05), &config).is_err());
    }

    #[test]
    fn test_bank_structural_equality() {
        let a = Bank::new("Alfa-Bank", "ALFA", dec!(1.0));
        let b = Bank::new("Alfa-Bank", "ALFA", dec!(1.0));
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "Alfa-Bank (ALFA, 1.0%)");
    }
}
