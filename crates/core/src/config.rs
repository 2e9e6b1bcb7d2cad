//! Ledger configuration
//!
//! Bounds and presentation settings are read from a JSON file so they can be
//! tuned without recompilation. Missing fields fall back to defaults.

use crate::bank::Bank;
use crate::error::{CoreError, CoreResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Configuration shared by the core and the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Lowest accepted bank interest rate, in percent
    #[serde(default = "default_min_bank_rate")]
    pub min_bank_rate: Decimal,

    /// Highest accepted bank interest rate, in percent
    #[serde(default = "default_max_bank_rate")]
    pub max_bank_rate: Decimal,

    /// Decimal places used when amounts are printed
    #[serde(default = "default_display_scale")]
    pub display_scale: u32,
}

fn default_min_bank_rate() -> Decimal {
    Decimal::new(1, 1) // 0.1
}

fn default_max_bank_rate() -> Decimal {
    Decimal::new(2, 0)
}

fn default_display_scale() -> u32 {
    2
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            min_bank_rate: default_min_bank_rate(),
            max_bank_rate: default_max_bank_rate(),
            display_scale: default_display_scale(),
        }
    }
}

impl LedgerConfig {
    /// Load configuration from JSON file
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Check that a bank's rate lies inside `[min_bank_rate, max_bank_rate]`
    pub fn validate_bank(&self, bank: &Bank) -> CoreResult<()> {
        if bank.interest_rate < self.min_bank_rate || bank.interest_rate > self.max_bank_rate {
            return Err(CoreError::InvalidArgument(format!(
                "bank {} interest rate {} outside {}..={}",
                bank.short_name, bank.interest_rate, self.min_bank_rate, self.max_bank_rate
            )));
        }
        Ok(())
    }

    /// Round an amount for display
    pub fn display(&self, amount: Decimal) -> Decimal {
        amount.round_dp(self.display_scale)
    }
}
