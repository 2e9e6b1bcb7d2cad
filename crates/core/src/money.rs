//! Checked Decimal arithmetic.
//!
//! `Decimal`'s operators panic on overflow. Ledger formulas go through these
//! helpers instead and surface overflow as `CoreError::Overflow`.

use crate::error::{CoreError, CoreResult};
use rust_decimal::Decimal;

pub fn add(a: Decimal, b: Decimal, what: &str) -> CoreResult<Decimal> {
    a.checked_add(b).ok_or_else(|| CoreError::overflow(what))
}

pub fn sub(a: Decimal, b: Decimal, what: &str) -> CoreResult<Decimal> {
    a.checked_sub(b).ok_or_else(|| CoreError::overflow(what))
}

pub fn mul(a: Decimal, b: Decimal, what: &str) -> CoreResult<Decimal> {
    a.checked_mul(b).ok_or_else(|| CoreError::overflow(what))
}

pub fn div(a: Decimal, b: Decimal, what: &str) -> CoreResult<Decimal> {
    a.checked_div(b).ok_or_else(|| CoreError::overflow(what))
}

/// Percent to fraction: `rate / 100`
pub fn percent(rate: Decimal, what: &str) -> CoreResult<Decimal> {
    div(rate, Decimal::ONE_HUNDRED, what)
}

pub fn sum<I>(values: I, what: &str) -> CoreResult<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, v| add(acc, v, what))
}
