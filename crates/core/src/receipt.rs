//! Structured results of the ledger commands.
//!
//! A receipt carries the amounts involved and renders the human-readable
//! notification through `Display`. Callers branch on the `Result` returned by
//! the command, the text is for presentation only.

use crate::account::AccountType;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a successful transfer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferReceipt {
    pub amount: Decimal,
    pub source_type: AccountType,
    pub target_type: AccountType,
    /// Short name of the target account's bank
    pub target_bank: String,
    /// Source balance after the transfer
    pub source_balance: Decimal,
    /// Target balance after the transfer
    pub target_balance: Decimal,
}

impl TransferReceipt {
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TransferReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transferred {} to {} account at {}",
            self.amount,
            self.target_type.label(),
            self.target_bank
        )
    }
}

/// Kind of repayment that produced a receipt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepaymentKind {
    Partial,
    Full,
}

/// Result of a successful credit repayment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepaymentReceipt {
    pub kind: RepaymentKind,
    /// Amount credited by this call
    pub amount: Decimal,
    pub paid_amount: Decimal,
    pub remaining: Decimal,
}

impl RepaymentReceipt {
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RepaymentReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RepaymentKind::Partial => write!(
                f,
                "Repaid {}, total paid {}, remaining {}",
                self.amount, self.paid_amount, self.remaining
            ),
            RepaymentKind::Full => write!(f, "Credit fully repaid, total paid {}", self.paid_amount),
        }
    }
}
