//! Projection state tracking for a set of debts

use crate::assumptions::PayoffStrategy;
use crate::debt::Debt;

/// Working copy of the debts during a projection
///
/// Balances are cloned out of the caller's records so the input is never
/// touched.
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Months simulated so far
    pub projection_month: u32,

    /// Current balance per debt, in input order
    pub balances: Vec<f64>,

    /// Monthly interest rate per debt (decimal)
    pub monthly_rates: Vec<f64>,

    /// Annual rate per debt in percent, kept for re-ordering
    pub annual_rates: Vec<f64>,

    /// Indices in extra-payment priority order
    pub order: Vec<usize>,

    /// Cumulative interest charged, all debts
    pub total_interest: f64,

    /// Cumulative payments made, all debts
    pub total_paid: f64,

    /// Cumulative interest charged per debt
    pub interest_by_debt: Vec<f64>,

    /// Cumulative payments per debt
    pub paid_by_debt: Vec<f64>,

    /// Month in which each debt reached zero (0 = paid off at start)
    pub payoff_month: Vec<Option<u32>>,

    /// Set once a balance overflows to infinity; the run cannot continue
    pub diverged: bool,
}

impl ProjectionState {
    /// Initialize state from the debts at projection start
    pub fn from_debts(debts: &[Debt], strategy: PayoffStrategy) -> Self {
        let balances: Vec<f64> = debts.iter().map(|d| d.balance.max(0.0)).collect();
        let annual_rates: Vec<f64> = debts.iter().map(|d| d.annual_interest_rate).collect();
        let order = strategy.payoff_order(debts);

        Self {
            projection_month: 0,
            monthly_rates: debts.iter().map(|d| d.monthly_rate()).collect(),
            payoff_month: debts
                .iter()
                .map(|d| if d.is_paid_off() { Some(0) } else { None })
                .collect(),
            interest_by_debt: vec![0.0; debts.len()],
            paid_by_debt: vec![0.0; debts.len()],
            total_interest: 0.0,
            total_paid: 0.0,
            diverged: false,
            balances,
            annual_rates,
            order,
        }
    }

    /// First debt in priority order that still carries a balance
    pub fn target(&self) -> Option<usize> {
        self.order.iter().copied().find(|&i| self.balances[i] > 0.0)
    }

    /// Recompute the priority order from current balances
    pub fn reorder(&mut self, strategy: PayoffStrategy) {
        self.order = strategy.order(&self.balances, &self.annual_rates);
    }

    /// True once every balance has reached zero
    pub fn is_settled(&self) -> bool {
        self.balances.iter().all(|&b| b <= 0.0)
    }

    pub fn remaining_balance(&self) -> f64 {
        self.balances.iter().sum()
    }
}
