//! # Pocketbank Core
//!
//! Personal banking ledger: banks, current/credit/deposit accounts, credits
//! and the person who holds them.
//!
//! Computations:
//! - transfer between accounts ([`BankAccount::transfer`])
//! - deposit income projection ([`DepositAccount::project_income`])
//! - credit overpayment and payment schedule ([`Credit::overpayment`],
//!   [`Credit::payment_schedule`])
//! - credit repayment ([`Credit::repay_partial`], [`Credit::repay_full`])

pub mod account;
pub mod bank;
pub mod config;
pub mod credit;
pub mod error;
pub mod money;
pub mod person;
pub mod receipt;

pub use account::{
    transfer_between, Account, AccountCore, AccountType, BankAccount, CreditAccount,
    CurrentAccount, DepositAccount,
};
pub use bank::Bank;
pub use config::LedgerConfig;
pub use credit::{Credit, Installment, PaymentSchedule};
pub use error::{CoreError, CoreResult};
pub use person::Person;
pub use receipt::{RepaymentKind, RepaymentReceipt, TransferReceipt};
