//! Projection engine for debt payoff plans

mod state;
mod engine;
mod cashflows;
pub mod batch;

pub use state::ProjectionState;
pub use engine::{ProjectionEngine, ProjectionConfig};
pub use cashflows::{round_cents, write_schedule_csv, DebtMonth, DebtOutcome, ProjectionResult, ScheduleRow};
pub use batch::{compare_strategies, project_plans, PlanSavings, StrategyComparison};

use crate::assumptions::PayoffPlan;
use crate::debt::Debt;
use crate::error::Result;
use chrono::{Local, NaiveDate};

/// Thirty-year safety cap on simulated months
pub const MAX_PROJECTION_MONTHS: u32 = 360;

/// Project a plan from today with default payment rules and options
pub fn project(debts: &[Debt], plan: &PayoffPlan) -> Result<ProjectionResult> {
    project_from(debts, plan, Local::now().date_naive())
}

/// Project a plan from an explicit start date with default payment rules and options
pub fn project_from(debts: &[Debt], plan: &PayoffPlan, start_date: NaiveDate) -> Result<ProjectionResult> {
    ProjectionEngine::default().project(debts, plan, start_date)
}
