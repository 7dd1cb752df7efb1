//! Payment rules and payoff strategy assumptions

mod payment;
mod strategy;

pub use payment::PaymentAssumptions;
pub use strategy::{PayoffPlan, PayoffStrategy};
