//! Pocketbank CLI - deposit income, credit schedules and transfers
//!
//! Usage:
//! ```bash
//! pocketbank income --balance 10000 --rate 18 --period 12
//! pocketbank overpayment --loan 50000 --rate 15 --term 12
//! pocketbank schedule --loan 50000 --rate 15 --term 12 --start 2024-01-31
//! pocketbank --json schedule --loan 1000 --rate 5 --term 3 --start 2024-02-01
//! pocketbank demo
//! ```

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use pocketbank_core::LedgerConfig;
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{credit, demo, deposit};

/// Pocketbank - personal banking ledger calculator
#[derive(Parser)]
#[command(name = "pocketbank")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Ledger configuration file (JSON)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Project the income of a term deposit
    Income {
        /// Deposit balance
        #[arg(long)]
        balance: Decimal,
        /// Deposit rate in percent
        #[arg(long)]
        rate: Decimal,
        /// Term in months
        #[arg(long)]
        period: u32,
    },

    /// Compute the overpayment of a credit
    Overpayment {
        #[command(flatten)]
        credit: CreditArgs,
    },

    /// Print the monthly payment schedule of a credit
    Schedule {
        #[command(flatten)]
        credit: CreditArgs,
    },

    /// Walk through transfers and repayments on a sample person
    Demo,
}

#[derive(clap::Args, Clone)]
pub struct CreditArgs {
    /// Loan amount
    #[arg(long)]
    pub loan: Decimal,
    /// Flat interest rate in percent
    #[arg(long)]
    pub rate: Decimal,
    /// Term in months
    #[arg(long)]
    pub term: u32,
    /// First installment date (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<NaiveDate>,
    /// Lending bank short name
    #[arg(long, default_value = "BANK")]
    pub bank: String,
    /// Lending bank base rate in percent
    #[arg(long, default_value = "1.0")]
    pub bank_rate: Decimal,
}

fn load_config(path: Option<&PathBuf>) -> Result<LedgerConfig> {
    match path {
        Some(path) => LedgerConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(LedgerConfig::default()),
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Income {
            balance,
            rate,
            period,
        } => {
            let report = deposit::income(balance, rate, period)?;
            deposit::print_income(&report, &config, cli.json)?;
        }

        Commands::Overpayment { credit: args } => {
            let report = credit::overpayment(&args, &config)?;
            credit::print_overpayment(&report, &config, cli.json)?;
        }

        Commands::Schedule { credit: args } => {
            let schedule = credit::schedule(&args, &config)?;
            credit::print_schedule(&schedule, &config, cli.json)?;
        }

        Commands::Demo => {
            let person = demo::run(&config)?;
            demo::print_summary(&person, &config, cli.json)?;
        }
    }

    Ok(())
}
