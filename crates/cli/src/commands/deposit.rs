//! Deposit income projection

use anyhow::Result;
use pocketbank_core::{Bank, BankAccount, DepositAccount, LedgerConfig};
use rust_decimal::Decimal;
use serde::Serialize;

/// Projected income of a single deposit
#[derive(Debug, Clone, Serialize)]
pub struct IncomeReport {
    pub balance: Decimal,
    pub rate: Decimal,
    pub period: u32,
    pub income: Decimal,
}

/// Project income for a deposit described on the command line
pub fn income(balance: Decimal, rate: Decimal, period: u32) -> Result<IncomeReport> {
    // The bank plays no part in the income formula
    let bank = Bank::new("Unspecified", "N/A", Decimal::ZERO).shared();
    let deposit = DepositAccount::new(bank, balance, rate, period);

    Ok(IncomeReport {
        balance: deposit.balance(),
        rate,
        period,
        income: deposit.project_income()?,
    })
}

pub fn print_income(report: &IncomeReport, config: &LedgerConfig, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("💰 Deposit income projection");
    println!("   Balance: {}", config.display(report.balance));
    println!("   Rate:    {}% x {} months", report.rate, report.period);
    println!("   Income:  {}", config.display(report.income));
    Ok(())
}
