//! Integration tests for Pocketbank core
//!
//! A person with accounts at two banks, a deposit and a credit, driven
//! through transfers and repayments.

use chrono::NaiveDate;
use pocketbank_core::{
    transfer_between, Account, Bank, BankAccount, CoreError, Credit, CreditAccount,
    CurrentAccount, DepositAccount, LedgerConfig, Person, RepaymentKind,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::io::Write;
use tempfile::NamedTempFile;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Test: open accounts → transfer → deposit income → credit lifecycle
#[test]
fn test_full_workflow() {
    let sber = Bank::new("Sberbank", "SBER", dec!(1.5)).shared();
    let tcs = Bank::new("Tinkoff Bank", "TCS", dec!(1.2)).shared();

    let mut person = Person::new("Anna Smirnova", "500100732259", "654321", "4012");
    person.add_account(CurrentAccount::new(sber.clone(), dec!(20000)));
    person.add_account(CreditAccount::new(tcs.clone(), dec!(0), dec!(150000)));
    person.add_deposit(DepositAccount::new(sber.clone(), dec!(10000), dec!(18), 12).renewable(true));
    person.add_credit(Credit::new(tcs, dec!(50000), dec!(15), 12, date(2024, 5, 31)).unwrap());

    // 1. Current → credit card account
    let receipt = transfer_between(&mut person.accounts, 0, 1, dec!(7500)).unwrap();
    assert_eq!(receipt.target_bank, "TCS");
    assert_eq!(person.accounts[0].balance(), dec!(12500));
    assert_eq!(person.accounts[1].balance(), dec!(7500));

    // 2. Current → deposit (different collections)
    let Account::Current(current) = &mut person.accounts[0] else {
        panic!("expected current account");
    };
    current.transfer(&mut person.deposits[0], dec!(2500)).unwrap();
    assert_eq!(person.deposits[0].balance(), dec!(12500));
    assert_eq!(person.deposits[0].project_income().unwrap(), dec!(27000));

    // 3. Overdraft attempt leaves state untouched
    let err = transfer_between(&mut person.accounts, 1, 0, dec!(7500.01)).unwrap_err();
    assert!(err.is_insufficient_funds());
    assert_eq!(person.total_balance().unwrap(), dec!(30000));

    // 4. Credit lifecycle
    let credit = &mut person.credits[0];
    assert_eq!(credit.overpayment().unwrap(), dec!(90000));

    credit.repay_partial(dec!(5000)).unwrap();
    credit.repay_partial(dec!(20000)).unwrap();
    assert_eq!(credit.paid_amount(), dec!(25000));

    let full = credit.repay_full();
    assert_eq!(full.kind, RepaymentKind::Full);
    assert_eq!(full.amount, dec!(25000));
    assert_eq!(person.outstanding_debt().unwrap(), dec!(0));
}

#[test]
fn test_transfer_sum_invariant_across_variants() {
    let bank = Bank::new("Alfa-Bank", "ALFA", dec!(0.9)).shared();
    let mut accounts: Vec<Account> = vec![
        CurrentAccount::new(bank.clone(), dec!(100.10)).into(),
        CreditAccount::new(bank.clone(), dec!(55.55), dec!(1000)).into(),
        DepositAccount::new(bank, dec!(0), dec!(7), 3).into(),
    ];
    let total: Decimal = accounts.iter().map(|a| a.balance()).sum();

    let moves = [(0, 1, dec!(50)), (1, 2, dec!(105.55)), (2, 0, dec!(0.05)), (2, 2, dec!(1))];
    for (from, to, amount) in moves {
        transfer_between(&mut accounts, from, to, amount).unwrap();
        let now: Decimal = accounts.iter().map(|a| a.balance()).sum();
        assert_eq!(now, total);
    }

    assert_eq!(accounts[0].balance(), dec!(50.15));
    assert_eq!(accounts[1].balance(), dec!(0));
    assert_eq!(accounts[2].balance(), dec!(105.50));
}

#[test]
fn test_schedule_follows_calendar_months() {
    let bank = Bank::new("VTB Bank", "VTB", dec!(0.5)).shared();
    let credit = Credit::new(bank, dec!(50000), dec!(15), 12, date(2024, 1, 31)).unwrap();

    let schedule = credit.payment_schedule().unwrap();
    assert_eq!(schedule.len(), credit.loan_term() as usize);

    let expected = (dec!(50000) + dec!(50000) * dec!(15) / dec!(100)) / dec!(12);
    assert!(schedule.iter().all(|i| i.amount == expected));

    let dates: Vec<NaiveDate> = schedule.iter().map(|i| i.date).collect();
    assert_eq!(dates[0], date(2024, 1, 31));
    assert_eq!(dates[1], date(2024, 2, 29));
    assert_eq!(dates[2], date(2024, 3, 29));
    assert_eq!(dates[11], date(2024, 12, 29));
}

#[test]
fn test_excessive_repayment_reports_remaining() {
    let bank = Bank::new("VTB Bank", "VTB", dec!(0.5)).shared();
    let mut credit = Credit::new(bank, dec!(1000), dec!(5), 2, date(2024, 1, 1)).unwrap();
    credit.repay_partial(dec!(400)).unwrap();

    assert_eq!(
        credit.repay_partial(dec!(700)),
        Err(CoreError::ExcessiveRepayment {
            requested: dec!(700),
            remaining: dec!(600),
        })
    );
    assert_eq!(credit.paid_amount(), dec!(400));
}

#[test]
fn test_config_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "min_bank_rate": "0.5", "display_scale": 4 }}"#).unwrap();

    let config = LedgerConfig::from_file(file.path()).unwrap();
    assert_eq!(config.min_bank_rate, dec!(0.5));
    assert_eq!(config.max_bank_rate, dec!(2.0));
    assert_eq!(config.display_scale, 4);

    assert!(Bank::validated("Sberbank", "SBER", dec!(0.3), &config).is_err());
    assert!(Bank::validated("Sberbank", "SBER", dec!(1.5), &config).is_ok());
}

#[test]
fn test_config_from_invalid_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();

    let err = LedgerConfig::from_file(file.path()).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}

#[test]
fn test_person_snapshot_roundtrip() {
    let bank = Bank::new("Sberbank", "SBER", dec!(1.5)).shared();
    let mut person = Person::new("Anna Smirnova", "500100732259", "654321", "4012");
    person.add_account(CurrentAccount::new(bank.clone(), dec!(10)));
    person.add_credit(Credit::new(bank, dec!(100), dec!(1), 1, date(2024, 2, 1)).unwrap());

    let json = serde_json::to_string(&person).unwrap();
    let parsed: Person = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, person);
}

#[test]
fn test_failed_transfer_at_target_changes_nothing() {
    let bank = Bank::new("Alfa-Bank", "ALFA", dec!(0.9)).shared();
    let mut accounts: Vec<Account> = vec![
        CurrentAccount::new(bank.clone(), dec!(500)).into(),
        DepositAccount::new(bank, Decimal::MAX, dec!(7), 3).into(),
    ];
    let before = accounts.clone();

    let err = transfer_between(&mut accounts, 0, 1, dec!(1)).unwrap_err();
    assert!(err.is_overflow());
    assert_eq!(accounts, before);

    // A zero move still goes through
    transfer_between(&mut accounts, 0, 1, dec!(0)).unwrap();
    assert_eq!(accounts, before);
}

#[test]
fn test_snapshot_with_broken_credit_rejected() {
    let bank = Bank::new("Sberbank", "SBER", dec!(1.5)).shared();
    let mut person = Person::new("Anna Smirnova", "500100732259", "654321", "4012");
    person.add_credit(Credit::new(bank, dec!(100), dec!(1), 2, date(2024, 2, 1)).unwrap());
    let json = serde_json::to_value(&person).unwrap();

    let mut zero_term = json.clone();
    zero_term["credits"][0]["loan_term"] = serde_json::json!(0);
    assert!(serde_json::from_value::<Person>(zero_term).is_err());

    let mut overpaid = json.clone();
    overpaid["credits"][0]["paid_amount"] = serde_json::json!("150");
    assert!(serde_json::from_value::<Person>(overpaid).is_err());

    let parsed: Person = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, person);
}

#[test]
fn test_extreme_values_are_errors_not_panics() {
    let bank = Bank::new("VTB Bank", "VTB", dec!(0.5)).shared();

    let huge_loan = Credit::new(bank.clone(), Decimal::MAX, dec!(50), 12, date(2024, 1, 1)).unwrap();
    assert!(huge_loan.overpayment().unwrap_err().is_overflow());

    let huge_deposit = DepositAccount::new(bank.clone(), Decimal::MAX, dec!(200), 12);
    assert!(huge_deposit.project_income().unwrap_err().is_overflow());

    let endless = Credit::new(bank, dec!(1000), dec!(5), u32::MAX, date(2024, 1, 1)).unwrap();
    assert!(matches!(
        endless.payment_schedule(),
        Err(CoreError::DateOutOfRange(_))
    ));
}
