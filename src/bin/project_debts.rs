//! Project a payoff plan for a set of debts
//!
//! Writes the month-by-month schedule to CSV and prints a summary

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use debt_payoff::debt::{debts_from_accounts, load_accounts, load_debts};
use debt_payoff::projection::write_schedule_csv;
use debt_payoff::{Debt, EngineSettings, PayoffPlan, PayoffStrategy};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(about = "Project months to payoff and total interest for a debt payoff plan")]
struct Args {
    /// Debts CSV (id,balance,annual_interest_rate)
    #[arg(long, required_unless_present = "accounts", conflicts_with = "accounts")]
    debts: Option<PathBuf>,

    /// Account export CSV; active debt accounts with negative balances are used
    #[arg(long)]
    accounts: Option<PathBuf>,

    /// avalanche or snowball
    #[arg(long, default_value = "avalanche")]
    strategy: PayoffStrategy,

    /// Extra paid each month on top of minimums
    #[arg(long, default_value_t = 0.0)]
    extra: f64,

    /// Engine settings JSON (payment rules, projection options)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Projection start date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Where to write the schedule
    #[arg(long, default_value = "payoff_schedule.csv")]
    output: PathBuf,
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

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let debts = load_input(&args)?;
    println!("Loaded {} debts, total owed ${:.2}", debts.len(), debts.iter().map(|d| d.balance).sum::<f64>());

    let mut settings = match &args.config {
        Some(path) => EngineSettings::from_json_file(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => EngineSettings::default(),
    };
    settings.projection.detailed_output = true;

    let plan = PayoffPlan::new(args.strategy, args.extra);
    let start_date = args.start.unwrap_or_else(|| Local::now().date_naive());

    let result = settings
        .engine()
        .project(&debts, &plan, start_date)
        .context("Projection failed")?;

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    write_schedule_csv(&result.schedule, BufWriter::new(file)).context("Failed to write schedule")?;
    println!("Schedule written to {}", args.output.display());

    println!("\nPlan: {} with ${:.2} extra per month", plan.strategy, plan.extra_monthly_payment);
    if result.converged {
        println!("  Paid off in {} months, on {}", result.months_to_payoff, result.payoff_date);
    } else {
        println!(
            "  NOT paid off after {} months; ${:.2} still owed",
            result.months_to_payoff, result.remaining_balance
        );
    }
    println!("  Total interest: ${:.2}", result.total_interest_paid);
    println!("  Total paid:     ${:.2}", result.total_paid);

    println!("\n{:<20} {:>12} {:>14} {:>14}", "Debt", "Paid off", "Interest", "Paid");
    for outcome in &result.debts {
        let month = outcome
            .payoff_month
            .map(|m| format!("month {m}"))
            .unwrap_or_else(|| "never".to_string());
        println!(
            "{:<20} {:>12} {:>14.2} {:>14.2}",
            outcome.id, month, outcome.interest_paid, outcome.amount_paid
        );
    }

    println!("\n{:<8} {:>14} {:>14} {:>16}", "Month", "Paid", "Interest", "Still owed");
    for row in result.schedule.iter().filter(|r| r.month % 12 == 0 || r.month == result.months_to_payoff) {
        println!(
            "{:<8} {:>14.2} {:>14.2} {:>16.2}",
            row.month,
            row.payment(),
            row.interest(),
            row.end_balance()
        );
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
