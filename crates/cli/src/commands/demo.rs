//! Scripted walkthrough on a sample person

use anyhow::Result;
use chrono::NaiveDate;
use pocketbank_core::{
    transfer_between, Bank, BankAccount, Credit, CreditAccount, CurrentAccount, DepositAccount,
    LedgerConfig, Person,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

/// Build a sample person, then run transfers and repayments on their holdings.
///
/// Rejected commands are logged and the walkthrough continues, mirroring how a
/// caller would branch on the returned `Result`.
pub fn run(config: &LedgerConfig) -> Result<Person> {
    let sber = Bank::validated("Sberbank of Russia", "SBER", Decimal::new(15, 1), config)?.shared();
    let tcs = Bank::validated("Tinkoff Bank", "TCS", Decimal::new(12, 1), config)?.shared();

    let mut person = Person::new("Ivan Petrov", "770123456789", "123456", "4510");
    person.add_account(CurrentAccount::new(sber.clone(), Decimal::new(25_000, 0)));
    person.add_account(CreditAccount::new(
        tcs.clone(),
        Decimal::ZERO,
        Decimal::new(150_000, 0),
    ));
    person.add_deposit(
        DepositAccount::new(sber.clone(), Decimal::new(10_000, 0), Decimal::new(18, 0), 12)
            .withdrawable(false)
            .renewable(true),
    );
    let start = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default();
    person.add_credit(Credit::new(
        tcs,
        Decimal::new(50_000, 0),
        Decimal::new(15, 0),
        12,
        start,
    )?);
    info!(%person, "Sample person ready");

    // Transfers
    if let Err(err) = transfer_between(&mut person.accounts, 0, 1, Decimal::new(5_000, 0)) {
        info!(error = %err, "Transfer not applied");
    }
    if let Err(err) = transfer_between(&mut person.accounts, 1, 0, Decimal::new(1_000_000, 0)) {
        info!(error = %err, "Transfer not applied");
    }

    info!(
        income = %person.deposits[0].project_income()?,
        "Deposit income projected"
    );

    // Repayments
    let credit = &mut person.credits[0];
    info!(overpayment = %credit.overpayment()?, "Credit overpayment");
    for amount in [Decimal::new(5_000, 0), Decimal::new(20_000, 0), Decimal::new(30_000, 0)] {
        if let Err(err) = credit.repay_partial(amount) {
            info!(error = %err, "Repayment not applied");
        }
    }
    credit.repay_full();

    Ok(person)
}

#[derive(Debug, Serialize)]
struct Summary<'a> {
    person: &'a Person,
    total_balance: Decimal,
    outstanding_debt: Decimal,
    projected_deposit_income: Decimal,
}

pub fn print_summary(person: &Person, config: &LedgerConfig, json: bool) -> Result<()> {
    let total_balance = person.total_balance()?;
    let outstanding_debt = person.outstanding_debt()?;
    let projected_deposit_income = person.projected_deposit_income()?;

    if json {
        let summary = Summary {
            person,
            total_balance,
            outstanding_debt,
            projected_deposit_income,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("═══════════════════════════════════════");
    println!("👤 {}", person.full_name);
    println!("═══════════════════════════════════════");
    for account in &person.accounts {
        println!("   {}", account);
    }
    for deposit in &person.deposits {
        println!(
            "   deposit at {}: {} ({}% x {} months)",
            deposit.bank().short_name,
            config.display(deposit.balance()),
            deposit.interest_rate,
            deposit.deposit_period
        );
    }
    for credit in &person.credits {
        println!("   {}", credit);
    }
    println!("───────────────────────────────────────");
    println!("   Total balance:    {}", config.display(total_balance));
    println!("   Outstanding debt: {}", config.display(outstanding_debt));
    println!("   Deposit income:   {}", config.display(projected_deposit_income));
    Ok(())
}
