//! Debt Payoff - month-by-month amortization projections for debt payoff plans
//!
//! This library provides:
//! - Debt records, CSV loading and account-to-debt normalization
//! - Payment assumptions (minimum payment rule) and payoff strategies
//! - Single-plan projections with payoff date and total interest
//! - Parallel plan comparison (avalanche vs snowball vs minimums only)
//! - JSON engine settings for payment rules and projection options

pub mod error;
pub mod debt;
pub mod assumptions;
pub mod projection;
pub mod settings;

// Re-export commonly used types
pub use error::{PayoffError, Result};
pub use debt::Debt;
pub use assumptions::{PaymentAssumptions, PayoffPlan, PayoffStrategy};
pub use projection::{
    project, project_from, ProjectionConfig, ProjectionEngine, ProjectionResult, ScheduleRow,
};
pub use settings::EngineSettings;
