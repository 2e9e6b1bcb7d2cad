//! # Person Module
//!
//! A person is a bookkeeping aggregate: identity fields plus the accounts,
//! credits and deposits they hold. Operations run on the held instances
//! directly; the person never mediates them.

use crate::account::{Account, BankAccount, DepositAccount};
use crate::credit::Credit;
use crate::error::CoreResult;
use crate::money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Account holder.
///
/// Identity fields are stored as given. No format check is made on the INN
/// (12 digits by convention) or the passport fields, and nothing ties a
/// deposit in `deposits` to an entry in `accounts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub full_name: String,
    pub inn: String,
    pub passport_number: String,
    pub passport_series: String,
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub credits: Vec<Credit>,
    #[serde(default)]
    pub deposits: Vec<DepositAccount>,
}

impl Person {
    pub fn new(full_name: &str, inn: &str, passport_number: &str, passport_series: &str) -> Self {
        Self {
            full_name: full_name.to_string(),
            inn: inn.to_string(),
            passport_number: passport_number.to_string(),
            passport_series: passport_series.to_string(),
            accounts: Vec::new(),
            credits: Vec::new(),
            deposits: Vec::new(),
        }
    }

    pub fn add_account(&mut self, account: impl Into<Account>) -> &mut Account {
        self.accounts.push(account.into());
        let last = self.accounts.len() - 1;
        &mut self.accounts[last]
    }

    pub fn add_credit(&mut self, credit: Credit) -> &mut Credit {
        self.credits.push(credit);
        let last = self.credits.len() - 1;
        &mut self.credits[last]
    }

    pub fn add_deposit(&mut self, deposit: DepositAccount) -> &mut DepositAccount {
        self.deposits.push(deposit);
        let last = self.deposits.len() - 1;
        &mut self.deposits[last]
    }

    /// Sum of balances over `accounts` and `deposits`
    pub fn total_balance(&self) -> CoreResult<Decimal> {
        let accounts = self.accounts.iter().map(|a| a.balance());
        let deposits = self.deposits.iter().map(|d| d.balance());
        money::sum(accounts.chain(deposits), "total balance")
    }

    /// Principal still owed across all credits
    pub fn outstanding_debt(&self) -> CoreResult<Decimal> {
        money::sum(self.credits.iter().map(Credit::remaining), "outstanding debt")
    }

    /// Projected income of every deposit in `deposits`
    pub fn projected_deposit_income(&self) -> CoreResult<Decimal> {
        let incomes = self
            .deposits
            .iter()
            .map(DepositAccount::project_income)
            .collect::<CoreResult<Vec<_>>>()?;
        money::sum(incomes, "deposit income")
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (INN {}, passport {} {}; accounts: {}, credits: {}, deposits: {})",
            self.full_name,
            self.inn,
            self.passport_series,
            self.passport_number,
            self.accounts.len(),
            self.credits.len(),
            self.deposits.len()
        )
    }
}
