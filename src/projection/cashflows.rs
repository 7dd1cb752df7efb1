//! Projection output: schedule rows and the summary result

use crate::error::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// One debt's activity within a single month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtMonth {
    pub debt_id: String,
    pub start_balance: f64,
    pub interest: f64,
    pub minimum_payment: f64,
    /// Whether this debt was first in line for the extra payment
    pub targeted: bool,
    /// Portion of the extra payment that landed on this debt after clamping
    pub extra_applied: f64,
    /// Total payment after clamping to balance + interest
    pub payment: f64,
    pub end_balance: f64,
}

/// All debts for one projection month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Projection month (1-indexed)
    pub month: u32,
    /// Entries in input order; debts already at zero are left out
    pub debts: Vec<DebtMonth>,
}

impl ScheduleRow {
    pub fn interest(&self) -> f64 {
        self.debts.iter().map(|d| d.interest).sum()
    }

    pub fn payment(&self) -> f64 {
        self.debts.iter().map(|d| d.payment).sum()
    }

    pub fn end_balance(&self) -> f64 {
        self.debts.iter().map(|d| d.end_balance).sum()
    }

    pub fn entry(&self, debt_id: &str) -> Option<&DebtMonth> {
        self.debts.iter().find(|d| d.debt_id == debt_id)
    }
}

/// Per-debt summary over the whole projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtOutcome {
    pub id: String,
    /// Month the balance reached zero; `None` if it never did
    pub payoff_month: Option<u32>,
    pub interest_paid: f64,
    pub amount_paid: f64,
}

/// Result of projecting one plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Months simulated, at most the configured cap
    pub months_to_payoff: u32,

    /// Start date advanced by `months_to_payoff` calendar months
    pub payoff_date: NaiveDate,

    /// Sum of all monthly interest charges, rounded to cents
    pub total_interest_paid: f64,

    /// Sum of all payments, rounded to cents
    pub total_paid: f64,

    /// False when the cap was hit with balance still outstanding
    pub converged: bool,

    /// Balance left when the projection stopped
    pub remaining_balance: f64,

    /// Per-debt outcomes in input order
    pub debts: Vec<DebtOutcome>,

    /// Monthly detail (only with `detailed_output`)
    pub schedule: Vec<ScheduleRow>,
}

impl ProjectionResult {
    pub fn outcome(&self, debt_id: &str) -> Option<&DebtOutcome> {
        self.debts.iter().find(|d| d.id == debt_id)
    }
}

/// Write the month-by-month schedule as CSV, one line per debt per month
pub fn write_schedule_csv<W: Write>(schedule: &[ScheduleRow], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([
        "Month", "DebtId", "StartBalance", "Interest", "MinimumPayment",
        "Targeted", "ExtraApplied", "Payment", "EndBalance",
    ])?;

    for row in schedule {
        for d in &row.debts {
            wtr.write_record([
                row.month.to_string(),
                d.debt_id.clone(),
                format!("{:.2}", d.start_balance),
                format!("{:.2}", d.interest),
                format!("{:.2}", d.minimum_payment),
                d.targeted.to_string(),
                format!("{:.2}", d.extra_applied),
                format!("{:.2}", d.payment),
                format!("{:.2}", d.end_balance),
            ])?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Round a currency amount to cents
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(12.345_6), 12.35);
        assert_eq!(round_cents(0.004), 0.0);
        assert_eq!(round_cents(99.995_1), 100.0);
        assert_eq!(round_cents(0.0), 0.0);
    }

    #[test]
    fn test_row_totals() {
        let row = ScheduleRow {
            month: 1,
            debts: vec![
                DebtMonth {
                    debt_id: "a".into(),
                    start_balance: 1_000.0,
                    interest: 10.0,
                    minimum_payment: 25.0,
                    targeted: true,
                    extra_applied: 50.0,
                    payment: 75.0,
                    end_balance: 935.0,
                },
                DebtMonth {
                    debt_id: "b".into(),
                    start_balance: 200.0,
                    interest: 0.0,
                    minimum_payment: 25.0,
                    targeted: false,
                    extra_applied: 0.0,
                    payment: 25.0,
                    end_balance: 175.0,
                },
            ],
        };

        assert_eq!(row.interest(), 10.0);
        assert_eq!(row.payment(), 100.0);
        assert_eq!(row.end_balance(), 1_110.0);
        assert!(row.entry("b").is_some_and(|d| !d.targeted));
        assert!(row.entry("z").is_none());

        let mut out = Vec::new();
        write_schedule_csv(std::slice::from_ref(&row), &mut out).expect("Failed to write");
        let text = String::from_utf8(out).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Month,DebtId"));
        assert_eq!(lines[1], "1,a,1000.00,10.00,25.00,true,50.00,75.00,935.00");
        assert_eq!(lines[2], "1,b,200.00,0.00,25.00,false,0.00,25.00,175.00");
    }
}
