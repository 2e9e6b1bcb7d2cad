//! Credit calculations: overpayment and payment schedule

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use pocketbank_core::{Bank, Credit, LedgerConfig, PaymentSchedule};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::CreditArgs;

/// Overpayment summary of a credit
#[derive(Debug, Clone, Serialize)]
pub struct OverpaymentReport {
    pub loan: Decimal,
    pub rate: Decimal,
    pub term: u32,
    pub total_payment: Decimal,
    pub overpayment: Decimal,
}

/// Build a credit from arguments, checking the lending bank's rate
fn build_credit(args: &CreditArgs, config: &LedgerConfig) -> Result<Credit> {
    let bank = Bank::validated(&args.bank, &args.bank, args.bank_rate, config)?;
    let start = args.start.unwrap_or_else(today);

    Credit::new(bank.shared(), args.loan, args.rate, args.term, start)
        .context("invalid credit parameters")
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn overpayment(args: &CreditArgs, config: &LedgerConfig) -> Result<OverpaymentReport> {
    let credit = build_credit(args, config)?;

    Ok(OverpaymentReport {
        loan: credit.loan_amount(),
        rate: credit.interest_rate(),
        term: credit.loan_term(),
        total_payment: credit.total_payment()?,
        overpayment: credit.overpayment()?,
    })
}

pub fn schedule(args: &CreditArgs, config: &LedgerConfig) -> Result<PaymentSchedule> {
    let credit = build_credit(args, config)?;
    Ok(credit.payment_schedule()?)
}

pub fn print_overpayment(
    report: &OverpaymentReport,
    config: &LedgerConfig,
    json: bool,
) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("📊 Credit overpayment");
    println!("   Loan:        {}", config.display(report.loan));
    println!("   Rate:        {}% x {} months", report.rate, report.term);
    println!("   Total:       {}", config.display(report.total_payment));
    println!("   Overpayment: {}", config.display(report.overpayment));
    Ok(())
}

pub fn print_schedule(schedule: &PaymentSchedule, config: &LedgerConfig, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(schedule)?);
        return Ok(());
    }

    println!("📅 Payment schedule ({} installments)", schedule.len());
    println!("───────────────────────────────────────");
    for (n, installment) in schedule.iter().enumerate() {
        println!(
            "  {:>3}. {}  {}",
            n + 1,
            installment.date,
            config.display(installment.amount)
        );
    }
    println!("───────────────────────────────────────");
    println!("  Total: {}", config.display(schedule.total()?));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn args(loan: Decimal, rate: Decimal, term: u32) -> CreditArgs {
        CreditArgs {
            loan,
            rate,
            term,
            start: NaiveDate::from_ymd_opt(2024, 1, 15),
            bank: "SBER".to_string(),
            bank_rate: dec!(1.5),
        }
    }

    #[test]
    fn test_overpayment_report() {
        let report = overpayment(&args(dec!(50000), dec!(15), 12), &LedgerConfig::default()).unwrap();

        assert_eq!(report.overpayment, dec!(90000));
        assert_eq!(report.total_payment, dec!(140000));
    }

    #[test]
    fn test_schedule_command() {
        let schedule = schedule(&args(dec!(12000), dec!(10), 12), &LedgerConfig::default()).unwrap();

        assert_eq!(schedule.len(), 12);
        assert_eq!(schedule.installments[0].amount, dec!(1100));
        assert_eq!(
            schedule.installments[1].date,
            NaiveDate::from_ymd_opt(2024, 2, 15).unwrap()
        );
    }

    #[test]
    fn test_bank_rate_out_of_range() {
        let mut bad = args(dec!(1000), dec!(5), 2);
        bad.bank_rate = dec!(5);

        assert!(overpayment(&bad, &LedgerConfig::default()).is_err());
    }

    #[test]
    fn test_zero_term_rejected() {
        let err = schedule(&args(dec!(1000), dec!(5), 0), &LedgerConfig::default()).unwrap_err();
        assert!(err.to_string().contains("invalid credit parameters"));
    }

    #[test]
    fn test_huge_loan_overpayment_is_an_error() {
        assert!(overpayment(&args(Decimal::MAX, dec!(50), 12), &LedgerConfig::default()).is_err());
    }
}
