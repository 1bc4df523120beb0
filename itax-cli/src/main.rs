use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use itax_core::{DeductionClaims, TaxEngine};

mod display;

/// Indian income tax estimator: computes old- and new-regime liability side
/// by side for a financial year.
#[derive(Parser, Debug)]
#[command(name = "itax")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute both regimes' tax for one taxpayer
    Calculate {
        /// Financial year (defaults to the latest supported year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Gross annual income in rupees
        #[arg(short, long)]
        income: Decimal,

        /// Deduction claim as ID=AMOUNT, repeatable
        /// (e.g. --deduct section80c=150000)
        #[arg(short, long = "deduct", value_name = "ID=AMOUNT", value_parser = parse_claim)]
        deduct: Vec<(String, String)>,
    },

    /// List the supported financial years
    Years,

    /// List a year's deduction catalogue
    Deductions {
        /// Financial year (defaults to the latest supported year)
        #[arg(short, long)]
        year: Option<i32>,
    },
}

fn parse_claim(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((id, amount)) if !id.is_empty() => Ok((id.to_string(), amount.to_string())),
        _ => Err(format!("expected ID=AMOUNT, got '{raw}'")),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let engine = TaxEngine::builtin().context("built-in tax schedules failed validation")?;

    match cli.command {
        Command::Calculate {
            year,
            income,
            deduct,
        } => {
            let year = year.unwrap_or_else(|| engine.registry().latest_year());
            let claims: DeductionClaims = deduct.into_iter().collect();
            let result = engine.calculate(year, income, &claims)?;
            print!("{}", display::render_result(&result));
        }

        Command::Years => {
            for year in engine.registry().years() {
                println!("{year}");
            }
        }

        Command::Deductions { year } => {
            let year = year.unwrap_or_else(|| engine.registry().latest_year());
            let deductions = engine.registry().deductions_for_year(year);
            if deductions.is_empty() {
                bail!("no tax schedule registered for financial year {year}");
            }
            print!("{}", display::render_deductions(year, deductions));
        }
    }

    Ok(())
}
