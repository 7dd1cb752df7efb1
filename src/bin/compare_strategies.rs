//! Compare avalanche and snowball against paying minimums only

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use debt_payoff::debt::{debts_from_accounts, load_accounts, load_debts};
use debt_payoff::projection::{compare_strategies, ProjectionResult};
use debt_payoff::{Debt, EngineSettings};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Compare debt payoff strategies side by side")]
struct Args {
    /// Debts CSV (id,balance,annual_interest_rate)
    #[arg(long, required_unless_present = "accounts", conflicts_with = "accounts")]
    debts: Option<PathBuf>,

    /// Account export CSV
    #[arg(long)]
    accounts: Option<PathBuf>,

    /// Extra paid each month on top of minimums
    #[arg(long, default_value_t = 0.0)]
    extra: f64,

    /// Engine settings JSON
    #[arg(long)]
    config: Option<PathBuf>,

    /// Projection start date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    start: Option<NaiveDate>,
}

fn load_input(args: &Args) -> Result<Vec<Debt>> {
    if let Some(path) = &args.accounts {
        let accounts = load_accounts(path)
            .with_context(|| format!("Failed to load accounts from {}", path.display()))?;
        return Ok(debts_from_accounts(&accounts));
    }
    let path = args.debts.as_ref().context("either --debts or --accounts is required")?;
    load_debts(path).with_context(|| format!("Failed to load debts from {}", path.display()))
}

fn print_row(label: &str, result: &ProjectionResult) {
    let months = if result.converged {
        result.months_to_payoff.to_string()
    } else {
        format!("{}+", result.months_to_payoff)
    };
    println!(
        "{:<16} {:>8} {:>12} {:>14.2} {:>14.2}",
        label, months, result.payoff_date.to_string(), result.total_interest_paid, result.total_paid
    );
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let debts = load_input(&args)?;
    let settings = match &args.config {
        Some(path) => EngineSettings::from_json_file(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => EngineSettings::default(),
    };
    let start_date = args.start.unwrap_or_else(|| Local::now().date_naive());

    let comparison = compare_strategies(&settings.engine(), &debts, args.extra, start_date)
        .context("Comparison failed")?;

    println!(
        "{} debts, ${:.2} extra per month, starting {}",
        debts.len(),
        comparison.extra_monthly_payment,
        start_date
    );
    println!("{:<16} {:>8} {:>12} {:>14} {:>14}", "Plan", "Months", "Payoff", "Interest", "Total paid");
    print_row("minimums only", &comparison.minimums_only);
    print_row("avalanche", &comparison.avalanche);
    print_row("snowball", &comparison.snowball);

    println!(
        "\nAvalanche saves ${:.2} and {} months; snowball saves ${:.2} and {} months",
        comparison.avalanche_savings.interest_saved,
        comparison.avalanche_savings.months_saved,
        comparison.snowball_savings.interest_saved,
        comparison.snowball_savings.months_saved,
    );
    println!("Recommended: {}", comparison.recommended);
    Ok(())
}
