//! Payoff strategies and the order in which debts receive extra payments

use crate::debt::Debt;
use crate::error::{PayoffError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Which debt gets the extra payment first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoffStrategy {
    /// Highest interest rate first
    Avalanche,
    /// Smallest balance first
    Snowball,
}

impl PayoffStrategy {
    /// Target order as indices into the input, highest priority first
    ///
    /// Uses a stable sort so ties keep their input order.
    pub fn order(&self, balances: &[f64], rates: &[f64]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..balances.len()).collect();
        match self {
            PayoffStrategy::Avalanche => {
                order.sort_by(|&a, &b| rates[b].partial_cmp(&rates[a]).unwrap_or(Ordering::Equal));
            }
            PayoffStrategy::Snowball => {
                order.sort_by(|&a, &b| balances[a].partial_cmp(&balances[b]).unwrap_or(Ordering::Equal));
            }
        }
        order
    }

    /// Target order for a set of debts at their current balances
    pub fn payoff_order(&self, debts: &[Debt]) -> Vec<usize> {
        let balances: Vec<f64> = debts.iter().map(|d| d.balance).collect();
        let rates: Vec<f64> = debts.iter().map(|d| d.annual_interest_rate).collect();
        self.order(&balances, &rates)
    }

    pub fn name(&self) -> &'static str {
        match self {
            PayoffStrategy::Avalanche => "avalanche",
            PayoffStrategy::Snowball => "snowball",
        }
    }
}

impl fmt::Display for PayoffStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PayoffStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "avalanche" => Ok(PayoffStrategy::Avalanche),
            "snowball" => Ok(PayoffStrategy::Snowball),
            other => Err(format!("unknown payoff strategy '{other}' (expected avalanche or snowball)")),
        }
    }
}

/// Strategy plus the extra amount paid on top of minimums each month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffPlan {
    pub strategy: PayoffStrategy,

    /// Paid on top of minimums, all of it to a single targeted debt
    #[serde(default)]
    pub extra_monthly_payment: f64,
}

impl PayoffPlan {
    pub fn new(strategy: PayoffStrategy, extra_monthly_payment: f64) -> Self {
        Self {
            strategy,
            extra_monthly_payment,
        }
    }

    pub fn avalanche(extra_monthly_payment: f64) -> Self {
        Self::new(PayoffStrategy::Avalanche, extra_monthly_payment)
    }

    pub fn snowball(extra_monthly_payment: f64) -> Self {
        Self::new(PayoffStrategy::Snowball, extra_monthly_payment)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.extra_monthly_payment.is_finite() || self.extra_monthly_payment < 0.0 {
            return Err(PayoffError::InvalidInput(format!(
                "extra monthly payment must be a non-negative amount, got {}",
                self.extra_monthly_payment
            )));
        }
        Ok(())
    }
}
