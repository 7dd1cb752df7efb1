//! Month-by-month amortization engine

use super::cashflows::{round_cents, DebtMonth, DebtOutcome, ProjectionResult, ScheduleRow};
use super::state::ProjectionState;
use super::MAX_PROJECTION_MONTHS;
use crate::assumptions::{PaymentAssumptions, PayoffPlan};
use crate::debt::Debt;
use crate::error::{PayoffError, Result};
use chrono::{Months, NaiveDate};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Options controlling a projection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Safety cap on simulated months (default 360 = 30 years)
    #[serde(default = "default_max_months")]
    pub max_months: u32,

    /// Record the month-by-month schedule
    #[serde(default)]
    pub detailed_output: bool,

    /// Re-sort the target order every month from current balances.
    /// Off by default: the order is fixed at simulation start.
    #[serde(default)]
    pub reorder_monthly: bool,

    /// Pass extra payment the target cannot absorb on to the next debt in
    /// line within the same month. Off by default: the surplus is dropped.
    #[serde(default)]
    pub cascade_surplus: bool,
}

fn default_max_months() -> u32 { MAX_PROJECTION_MONTHS }

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            max_months: MAX_PROJECTION_MONTHS,
            detailed_output: false,
            reorder_monthly: false,
            cascade_surplus: false,
        }
    }
}

impl ProjectionConfig {
    /// Default options with the schedule recorded
    pub fn detailed() -> Self {
        Self {
            detailed_output: true,
            ..Default::default()
        }
    }

    /// The cap must be between 1 and 360 months
    pub fn validate(&self) -> Result<()> {
        if self.max_months == 0 || self.max_months > MAX_PROJECTION_MONTHS {
            return Err(PayoffError::InvalidInput(format!(
                "max_months must be between 1 and {}, got {}",
                MAX_PROJECTION_MONTHS, self.max_months
            )));
        }
        Ok(())
    }
}

/// Projects payoff plans under a fixed set of payment assumptions
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    payment: PaymentAssumptions,
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(payment: PaymentAssumptions, config: ProjectionConfig) -> Self {
        Self { payment, config }
    }

    pub fn payment(&self) -> &PaymentAssumptions {
        &self.payment
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Simulate `plan` against `debts` starting at `start_date`
    ///
    /// Debts are borrowed; balances are copied into local state. Returns
    /// `InvalidInput` for negative or non-finite balances, rates or extra
    /// payment. Hitting the month cap is not an error: the result comes back
    /// with `converged == false`. A balance that grows past `f64::MAX` also
    /// ends the run early as non-converged, with an infinite remaining balance.
    pub fn project(&self, debts: &[Debt], plan: &PayoffPlan, start_date: NaiveDate) -> Result<ProjectionResult> {
        self.payment.validate()?;
        self.config.validate()?;
        plan.validate()?;
        for debt in debts {
            debt.validate()?;
        }

        debug!(
            "Projecting {} debts, strategy={}, extra={:.2}",
            debts.len(),
            plan.strategy,
            plan.extra_monthly_payment
        );

        let mut state = ProjectionState::from_debts(debts, plan.strategy);
        let mut schedule = Vec::new();

        while !state.is_settled() && !state.diverged && state.projection_month < self.config.max_months {
            if self.config.reorder_monthly {
                state.reorder(plan.strategy);
            }
            if let Some(row) = self.calculate_month(&mut state, debts, plan) {
                schedule.push(row);
            }
        }

        let months = state.projection_month;
        let converged = state.is_settled();
        let remaining_balance = state.remaining_balance();
        if state.diverged {
            warn!("Projection stopped at month {}: a balance overflowed", months);
        } else if !converged {
            warn!(
                "Projection hit the {}-month cap with {:.2} still owed",
                self.config.max_months, remaining_balance
            );
            let break_even = self.payment.break_even_apr();
            for debt in debts.iter().filter(|d| d.annual_interest_rate > break_even) {
                warn!(
                    "Debt '{}' at {:.2}% APR is above the {:.2}% the minimum payment covers",
                    debt.id, debt.annual_interest_rate, break_even
                );
            }
        }

        let payoff_date = start_date
            .checked_add_months(Months::new(months))
            .ok_or(PayoffError::DateOverflow { months })?;

        let outcomes = debts
            .iter()
            .enumerate()
            .map(|(i, debt)| DebtOutcome {
                id: debt.id.clone(),
                payoff_month: state.payoff_month[i],
                interest_paid: round_cents(state.interest_by_debt[i]),
                amount_paid: round_cents(state.paid_by_debt[i]),
            })
            .collect();

        debug!(
            "Projection finished after {} months, interest={:.2}, converged={}",
            months, state.total_interest, converged
        );

        Ok(ProjectionResult {
            months_to_payoff: months,
            payoff_date,
            total_interest_paid: round_cents(state.total_interest),
            total_paid: round_cents(state.total_paid),
            converged,
            remaining_balance,
            debts: outcomes,
            schedule,
        })
    }

    /// Advance the state by one month
    ///
    /// Each debt with a balance accrues interest and gets its minimum. The
    /// extra payment goes to the first debt in priority order that still has
    /// a balance. Every payment is capped at balance + interest.
    fn calculate_month(&self, state: &mut ProjectionState, debts: &[Debt], plan: &PayoffPlan) -> Option<ScheduleRow> {
        let n = state.balances.len();
        let month = state.projection_month + 1;

        let mut interest = vec![0.0; n];
        let mut minimum = vec![0.0; n];
        let mut payment = vec![0.0; n];
        let mut extra_applied = vec![0.0; n];

        for i in 0..n {
            let balance = state.balances[i];
            if balance <= 0.0 {
                continue;
            }
            interest[i] = balance * state.monthly_rates[i];
            minimum[i] = self.payment.minimum_payment(balance);
            payment[i] = minimum[i].min(balance + interest[i]);
        }

        let target = state.target();
        let mut remaining_extra = plan.extra_monthly_payment;
        for &i in &state.order {
            if remaining_extra <= 0.0 {
                break;
            }
            let balance = state.balances[i];
            if balance <= 0.0 {
                continue;
            }
            let capacity = balance + interest[i];
            let room = (capacity - payment[i]).max(0.0);
            // Set the payment to capacity outright so the balance lands on exactly zero
            let applied = if remaining_extra >= room {
                payment[i] = capacity;
                room
            } else {
                payment[i] += remaining_extra;
                remaining_extra
            };
            extra_applied[i] = applied;
            remaining_extra -= applied;
            if !self.config.cascade_surplus {
                break;
            }
        }

        let mut entries = Vec::new();
        let mut month_interest = 0.0;
        for i in 0..n {
            let start_balance = state.balances[i];
            if start_balance <= 0.0 {
                continue;
            }
            let mut end_balance = (start_balance + interest[i] - payment[i]).max(0.0);
            if !(start_balance + interest[i]).is_finite() || !end_balance.is_finite() {
                // NaN.max(0.0) is 0.0, so an overflowed balance would read as paid off
                end_balance = f64::INFINITY;
                state.diverged = true;
            }

            month_interest += interest[i];
            state.total_paid += payment[i];
            state.interest_by_debt[i] += interest[i];
            state.paid_by_debt[i] += payment[i];
            state.balances[i] = end_balance;
            if end_balance <= 0.0 {
                state.payoff_month[i] = Some(month);
            }

            if self.config.detailed_output {
                entries.push(DebtMonth {
                    debt_id: debts[i].id.clone(),
                    start_balance,
                    interest: interest[i],
                    minimum_payment: minimum[i],
                    targeted: target == Some(i),
                    extra_applied: extra_applied[i],
                    payment: payment[i],
                    end_balance,
                });
            }
        }

        state.total_interest += month_interest;
        state.projection_month = month;

        if self.config.detailed_output {
            Some(ScheduleRow { month, debts: entries })
        } else {
            None
        }
    }
}
