//! # Credit Module
//!
//! A loan taken from a bank: flat-rate overpayment, an equal-installment
//! monthly schedule and partial/full repayment tracking.
//!
//! Two interest formulas coexist and are kept as they are:
//! - `overpayment()` scales interest with the term:
//!   `loan_amount * rate/100 * loan_term`
//! - `monthly_payment()` applies the rate once over the whole loan:
//!   `(loan_amount + loan_amount * rate/100) / loan_term`
//!
//! They disagree whenever `loan_term != 1`.

use crate::bank::Bank;
use crate::error::{CoreError, CoreResult};
use crate::money;
use crate::receipt::{RepaymentKind, RepaymentReceipt};
use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// One entry of a payment schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Installment {
    pub date: NaiveDate,
    pub amount: Decimal,
}

/// Installments of a credit, ordered by date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSchedule {
    pub installments: Vec<Installment>,
}

impl PaymentSchedule {
    pub fn len(&self) -> usize {
        self.installments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.installments.is_empty()
    }

    /// Sum of every installment
    pub fn total(&self) -> CoreResult<Decimal> {
        money::sum(self.installments.iter().map(|i| i.amount), "schedule total")
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Installment> {
        self.installments.iter()
    }
}

impl<'a> IntoIterator for &'a PaymentSchedule {
    type Item = &'a Installment;
    type IntoIter = std::slice::Iter<'a, Installment>;

    fn into_iter(self) -> Self::IntoIter {
        self.installments.iter()
    }
}

/// A loan with its repayment state.
///
/// Invariant: `0 <= paid_amount <= loan_amount` after every call.
/// Deserialization runs the same checks as [`Credit::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CreditRecord")]
pub struct Credit {
    pub bank: Arc<Bank>,
    loan_amount: Decimal,
    /// Flat rate in percent
    interest_rate: Decimal,
    /// Term in months
    loan_term: u32,
    start_date: NaiveDate,
    paid_amount: Decimal,
}

/// Unchecked wire form of a [`Credit`]
#[derive(Deserialize)]
struct CreditRecord {
    bank: Arc<Bank>,
    loan_amount: Decimal,
    interest_rate: Decimal,
    loan_term: u32,
    start_date: NaiveDate,
    paid_amount: Decimal,
}

impl TryFrom<CreditRecord> for Credit {
    type Error = CoreError;

    fn try_from(record: CreditRecord) -> CoreResult<Self> {
        let mut credit = Credit::new(
            record.bank,
            record.loan_amount,
            record.interest_rate,
            record.loan_term,
            record.start_date,
        )?;
        if record.paid_amount < Decimal::ZERO || record.paid_amount > credit.loan_amount {
            return Err(CoreError::invalid(format!(
                "paid amount {} outside 0..={}",
                record.paid_amount, credit.loan_amount
            )));
        }
        credit.paid_amount = record.paid_amount;
        Ok(credit)
    }
}

impl Credit {
    /// Open a credit with nothing paid yet.
    ///
    /// Rejects a non-positive loan amount, a zero term and a negative rate.
    pub fn new(
        bank: Arc<Bank>,
        loan_amount: Decimal,
        interest_rate: Decimal,
        loan_term: u32,
        start_date: NaiveDate,
    ) -> CoreResult<Self> {
        if loan_amount <= Decimal::ZERO {
            return Err(CoreError::invalid(format!(
                "loan amount must be positive: {}",
                loan_amount
            )));
        }
        if loan_term == 0 {
            return Err(CoreError::invalid("loan term must be at least one month"));
        }
        if interest_rate < Decimal::ZERO {
            return Err(CoreError::invalid(format!(
                "interest rate must not be negative: {}",
                interest_rate
            )));
        }

        Ok(Self {
            bank,
            loan_amount,
            interest_rate,
            loan_term,
            start_date,
            paid_amount: Decimal::ZERO,
        })
    }

    pub fn loan_amount(&self) -> Decimal {
        self.loan_amount
    }

    pub fn interest_rate(&self) -> Decimal {
        self.interest_rate
    }

    pub fn loan_term(&self) -> u32 {
        self.loan_term
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn paid_amount(&self) -> Decimal {
        self.paid_amount
    }

    /// Principal still to be repaid
    pub fn remaining(&self) -> Decimal {
        self.loan_amount - self.paid_amount
    }

    pub fn is_repaid(&self) -> bool {
        self.paid_amount >= self.loan_amount
    }

    /// Total owed over the term: `loan_amount * (1 + rate/100 * loan_term)`
    pub fn total_payment(&self) -> CoreResult<Decimal> {
        let factor = money::add(Decimal::ONE, self.term_rate()?, "total payment")?;
        money::mul(self.loan_amount, factor, "total payment")
    }

    /// Interest paid on top of the principal: `loan_amount * rate/100 * loan_term`
    pub fn overpayment(&self) -> CoreResult<Decimal> {
        let overpayment = money::sub(self.total_payment()?, self.loan_amount, "overpayment")?;
        debug!(
            loan = %self.loan_amount,
            rate = %self.interest_rate,
            term = self.loan_term,
            %overpayment,
            "Computed overpayment"
        );
        Ok(overpayment)
    }

    /// Equal installment: principal and single-period interest spread over the term
    pub fn monthly_payment(&self) -> CoreResult<Decimal> {
        let term = Decimal::from(self.loan_term);
        let interest = money::div(
            money::mul(self.loan_amount, self.interest_rate, "monthly payment")?,
            Decimal::ONE_HUNDRED,
            "monthly payment",
        )?;
        money::div(
            money::add(self.loan_amount, interest, "monthly payment")?,
            term,
            "monthly payment",
        )
    }

    /// `loan_term` installments of `monthly_payment()`, the first on
    /// `start_date` and each next one a calendar month after the previous.
    ///
    /// Day-of-month is clamped to the last day of shorter months, and the
    /// clamped day carries forward (in 2023: Jan 31 -> Feb 28 -> Mar 28).
    ///
    /// Fails with `DateOutOfRange` before building anything when the last
    /// installment would fall past chrono's date range.
    pub fn payment_schedule(&self) -> CoreResult<PaymentSchedule> {
        let amount = self.monthly_payment()?;
        let last = self.loan_term - 1;
        if self.start_date.checked_add_months(Months::new(last)).is_none() {
            return Err(CoreError::DateOutOfRange(format!(
                "{} months after {}",
                last, self.start_date
            )));
        }

        let mut installments = Vec::new();
        let mut date = self.start_date;

        for index in 0..self.loan_term {
            if index > 0 {
                date = date.checked_add_months(Months::new(1)).ok_or_else(|| {
                    CoreError::DateOutOfRange(format!("installment {} after {}", index + 1, date))
                })?;
            }
            installments.push(Installment { date, amount });
        }

        debug!(
            installments = installments.len(),
            monthly = %amount,
            "Built payment schedule"
        );
        Ok(PaymentSchedule { installments })
    }

    /// Credit `amount` towards the loan.
    ///
    /// Fails with `ExcessiveRepayment` when `amount` exceeds `remaining()`, and
    /// with `InvalidArgument` for a negative amount. Nothing changes on failure.
    pub fn repay_partial(&mut self, amount: Decimal) -> CoreResult<RepaymentReceipt> {
        let remaining = self.remaining();

        let check = if amount < Decimal::ZERO {
            Err(CoreError::invalid(format!(
                "repayment amount must not be negative: {}",
                amount
            )))
        } else if amount > remaining {
            Err(CoreError::ExcessiveRepayment {
                requested: amount,
                remaining,
            })
        } else {
            Ok(())
        };
        if let Err(err) = check {
            warn!(%amount, %remaining, error = %err, "Repayment rejected");
            return Err(err);
        }

        self.paid_amount += amount;

        let receipt = RepaymentReceipt {
            kind: RepaymentKind::Partial,
            amount,
            paid_amount: self.paid_amount,
            remaining: self.remaining(),
        };
        info!(
            %amount,
            paid = %receipt.paid_amount,
            remaining = %receipt.remaining,
            "{}",
            receipt
        );
        Ok(receipt)
    }

    /// Mark the loan as fully repaid. Idempotent.
    pub fn repay_full(&mut self) -> RepaymentReceipt {
        let amount = self.remaining().max(Decimal::ZERO);
        self.paid_amount = self.loan_amount;

        let receipt = RepaymentReceipt {
            kind: RepaymentKind::Full,
            amount,
            paid_amount: self.paid_amount,
            remaining: Decimal::ZERO,
        };
        info!(%amount, paid = %receipt.paid_amount, "{}", receipt);
        receipt
    }

    fn term_rate(&self) -> CoreResult<Decimal> {
        let rate = money::percent(self.interest_rate, "credit rate")?;
        money::mul(rate, Decimal::from(self.loan_term), "credit rate")
    }
}

impl fmt::Display for Credit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Credit {} at {} ({}% for {} months from {}, paid {})",
            self.loan_amount,
            self.bank.short_name,
            self.interest_rate,
            self.loan_term,
            self.start_date,
            self.paid_amount
        )
    }
}
