//! # Account Module
//!
//! Bank accounts held by a person. Three variants share one base record
//! (`AccountCore`: bank + balance) and one capability (`BankAccount`), which
//! is where `transfer` lives:
//! - `CurrentAccount`: no extra fields
//! - `CreditAccount`: carries a bare loan amount, unrelated to `Credit`
//! - `DepositAccount`: term deposit with its own rate and income projection

use crate::bank::Bank;
use crate::error::{CoreError, CoreResult};
use crate::money;
use crate::receipt::TransferReceipt;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Closed set of account kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Current,
    Credit,
    Deposit,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Current => "current",
            AccountType::Credit => "credit",
            AccountType::Deposit => "deposit",
        }
    }

    /// Human label used in notifications
    pub fn label(&self) -> &'static str {
        match self {
            AccountType::Current => "current",
            AccountType::Credit => "credit card",
            AccountType::Deposit => "deposit",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "current" => Some(AccountType::Current),
            "credit" => Some(AccountType::Credit),
            "deposit" => Some(AccountType::Deposit),
            _ => None,
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fields every account variant shares.
///
/// The balance is only changed through [`BankAccount::transfer`] and
/// [`BankAccount::self_transfer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountCore {
    pub bank: Arc<Bank>,
    balance: Decimal,
}

impl AccountCore {
    pub fn new(bank: Arc<Bank>, opening_balance: Decimal) -> Self {
        Self {
            bank,
            balance: opening_balance,
        }
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }
}

/// Validates a transfer and computes both resulting balances.
///
/// Nothing is mutated here; callers assign the pair only on `Ok`.
fn plan_transfer(
    available: Decimal,
    target_balance: Decimal,
    amount: Decimal,
) -> CoreResult<(Decimal, Decimal)> {
    if amount < Decimal::ZERO {
        return Err(CoreError::invalid(format!(
            "transfer amount must not be negative: {}",
            amount
        )));
    }
    if available < amount {
        return Err(CoreError::InsufficientFunds {
            needed: amount,
            available,
        });
    }
    let source = money::sub(available, amount, "transfer source balance")?;
    let target = money::add(target_balance, amount, "transfer target balance")?;
    Ok((source, target))
}

/// Capability shared by all account variants.
pub trait BankAccount {
    fn core(&self) -> &AccountCore;

    fn core_mut(&mut self) -> &mut AccountCore;

    fn account_type(&self) -> AccountType;

    fn balance(&self) -> Decimal {
        self.core().balance
    }

    fn bank(&self) -> &Bank {
        &self.core().bank
    }

    /// Move `amount` from this account to `target`.
    ///
    /// Fails with `InsufficientFunds` when the balance is below `amount`, with
    /// `InvalidArgument` for a negative amount and with `Overflow` when the
    /// target balance cannot hold the credit. Nothing changes on failure.
    /// Zero amounts and cross-bank transfers are accepted.
    fn transfer(
        &mut self,
        target: &mut dyn BankAccount,
        amount: Decimal,
    ) -> CoreResult<TransferReceipt> {
        let source_type = self.account_type();
        let target_type = target.account_type();

        let (source_balance, target_balance) =
            match plan_transfer(self.balance(), target.balance(), amount) {
                Ok(balances) => balances,
                Err(err) => {
                    warn!(
                        %amount,
                        source = %source_type,
                        target = %target_type,
                        error = %err,
                        "Transfer rejected"
                    );
                    return Err(err);
                }
            };

        self.core_mut().balance = source_balance;
        target.core_mut().balance = target_balance;

        let receipt = TransferReceipt {
            amount,
            source_type,
            target_type,
            target_bank: target.bank().short_name.clone(),
            source_balance: self.balance(),
            target_balance: target.balance(),
        };
        info!(
            %amount,
            source = %source_type,
            target = %target_type,
            bank = %receipt.target_bank,
            "{}",
            receipt
        );
        Ok(receipt)
    }

    /// Transfer from this account to itself.
    ///
    /// Same validation as [`BankAccount::transfer`]; on success the debit and
    /// credit land on the same balance, which ends where it started.
    fn self_transfer(&mut self, amount: Decimal) -> CoreResult<TransferReceipt> {
        let account_type = self.account_type();

        let debited = match plan_transfer(self.balance(), Decimal::ZERO, amount) {
            Ok((debited, _)) => debited,
            Err(err) => {
                warn!(%amount, account = %account_type, error = %err, "Self-transfer rejected");
                return Err(err);
            }
        };

        // Debit then credit the same balance; the sum is the original value
        self.core_mut().balance = money::add(debited, amount, "self-transfer balance")?;

        let receipt = TransferReceipt {
            amount,
            source_type: account_type,
            target_type: account_type,
            target_bank: self.bank().short_name.clone(),
            source_balance: self.balance(),
            target_balance: self.balance(),
        };
        info!(%amount, account = %account_type, "{}", receipt);
        Ok(receipt)
    }
}

/// Everyday current account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentAccount {
    pub core: AccountCore,
}

impl CurrentAccount {
    pub fn new(bank: Arc<Bank>, opening_balance: Decimal) -> Self {
        Self {
            core: AccountCore::new(bank, opening_balance),
        }
    }
}

impl BankAccount for CurrentAccount {
    fn core(&self) -> &AccountCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AccountCore {
        &mut self.core
    }

    fn account_type(&self) -> AccountType {
        AccountType::Current
    }
}

/// Credit-card style account with a bare loan amount.
///
/// Not linked to [`crate::Credit`]; the two are independent concepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditAccount {
    pub core: AccountCore,
    pub loan_amount: Decimal,
}

impl CreditAccount {
    pub fn new(bank: Arc<Bank>, opening_balance: Decimal, loan_amount: Decimal) -> Self {
        Self {
            core: AccountCore::new(bank, opening_balance),
            loan_amount,
        }
    }
}

impl BankAccount for CreditAccount {
    fn core(&self) -> &AccountCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AccountCore {
        &mut self.core
    }

    fn account_type(&self) -> AccountType {
        AccountType::Credit
    }
}

/// Term deposit.
///
/// `is_withdrawable` and `is_renewable` are stored terms only; no withdrawal
/// or rollover logic reads them yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositAccount {
    pub core: AccountCore,
    /// Deposit rate in percent, independent of the bank's base rate
    pub interest_rate: Decimal,
    /// Term in months
    pub deposit_period: u32,
    pub is_withdrawable: bool,
    pub is_renewable: bool,
}

impl DepositAccount {
    pub fn new(
        bank: Arc<Bank>,
        opening_balance: Decimal,
        interest_rate: Decimal,
        deposit_period: u32,
    ) -> Self {
        Self {
            core: AccountCore::new(bank, opening_balance),
            interest_rate,
            deposit_period,
            is_withdrawable: false,
            is_renewable: false,
        }
    }

    pub fn withdrawable(mut self, is_withdrawable: bool) -> Self {
        self.is_withdrawable = is_withdrawable;
        self
    }

    pub fn renewable(mut self, is_renewable: bool) -> Self {
        self.is_renewable = is_renewable;
        self
    }

    /// Flat income over the whole term:
    /// `balance * (interest_rate / 100) * deposit_period`.
    ///
    /// The rate is applied once per month of the term without annual
    /// normalisation. Negative rates are not rejected; a result that does not
    /// fit in a `Decimal` is an `Overflow`.
    pub fn project_income(&self) -> CoreResult<Decimal> {
        let rate = money::percent(self.interest_rate, "deposit rate")?;
        let per_month = money::mul(self.balance(), rate, "deposit income")?;
        let income = money::mul(per_month, Decimal::from(self.deposit_period), "deposit income")?;
        debug!(
            balance = %self.balance(),
            rate = %self.interest_rate,
            period = self.deposit_period,
            %income,
            "Projected deposit income"
        );
        Ok(income)
    }
}

impl BankAccount for DepositAccount {
    fn core(&self) -> &AccountCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AccountCore {
        &mut self.core
    }

    fn account_type(&self) -> AccountType {
        AccountType::Deposit
    }
}

/// Any account variant, as stored in a person's account list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Account {
    Current(CurrentAccount),
    Credit(CreditAccount),
    Deposit(DepositAccount),
}

impl Account {
    pub fn as_deposit(&self) -> Option<&DepositAccount> {
        match self {
            Account::Deposit(deposit) => Some(deposit),
            _ => None,
        }
    }
}

impl BankAccount for Account {
    fn core(&self) -> &AccountCore {
        match self {
            Account::Current(a) => a.core(),
            Account::Credit(a) => a.core(),
            Account::Deposit(a) => a.core(),
        }
    }

    fn core_mut(&mut self) -> &mut AccountCore {
        match self {
            Account::Current(a) => a.core_mut(),
            Account::Credit(a) => a.core_mut(),
            Account::Deposit(a) => a.core_mut(),
        }
    }

    fn account_type(&self) -> AccountType {
        match self {
            Account::Current(_) => AccountType::Current,
            Account::Credit(_) => AccountType::Credit,
            Account::Deposit(_) => AccountType::Deposit,
        }
    }
}

impl From<CurrentAccount> for Account {
    fn from(account: CurrentAccount) -> Self {
        Account::Current(account)
    }
}

impl From<CreditAccount> for Account {
    fn from(account: CreditAccount) -> Self {
        Account::Credit(account)
    }
}

impl From<DepositAccount> for Account {
    fn from(account: DepositAccount) -> Self {
        Account::Deposit(account)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} account at {} (balance: {})",
            self.account_type(),
            self.bank().short_name,
            self.balance()
        )
    }
}

/// Transfer between two entries of the same slice by index.
///
/// `from == to` follows the self-transfer rule. An index past the end is an
/// `InvalidArgument`.
pub fn transfer_between<A: BankAccount>(
    accounts: &mut [A],
    from: usize,
    to: usize,
    amount: Decimal,
) -> CoreResult<TransferReceipt> {
    let len = accounts.len();
    if from >= len || to >= len {
        return Err(CoreError::invalid(format!(
            "account index out of range: from {}, to {}, len {}",
            from, to, len
        )));
    }

    if from == to {
        return accounts[from].self_transfer(amount);
    }

    let (source, target) = if from < to {
        let (left, right) = accounts.split_at_mut(to);
        (&mut left[from], &mut right[0])
    } else {
        let (left, right) = accounts.split_at_mut(from);
        (&mut right[0], &mut left[to])
    };
    source.transfer(target, amount)
}
