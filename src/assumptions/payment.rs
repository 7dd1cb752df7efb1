//! Minimum payment rule applied to every debt each month

use crate::error::{PayoffError, Result};
use serde::{Deserialize, Serialize};

/// Minimum payment terms
///
/// The minimum due each month is the larger of a fixed floor and a share of
/// the current balance: `max(floor, balance * rate)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentAssumptions {
    /// Fixed minimum payment in currency units (default 25)
    #[serde(default = "default_floor")]
    pub minimum_payment_floor: f64,

    /// Minimum payment as a fraction of balance (default 0.02 = 2%)
    #[serde(default = "default_rate")]
    pub minimum_payment_rate: f64,
}

fn default_floor() -> f64 { 25.0 }
fn default_rate() -> f64 { 0.02 }

impl Default for PaymentAssumptions {
    fn default() -> Self {
        Self {
            minimum_payment_floor: 25.0,
            minimum_payment_rate: 0.02,
        }
    }
}

impl PaymentAssumptions {
    pub fn validate(&self) -> Result<()> {
        if !self.minimum_payment_floor.is_finite() || self.minimum_payment_floor < 0.0 {
            return Err(PayoffError::InvalidInput(format!(
                "minimum payment floor must be non-negative, got {}",
                self.minimum_payment_floor
            )));
        }
        if !self.minimum_payment_rate.is_finite() || self.minimum_payment_rate < 0.0 {
            return Err(PayoffError::InvalidInput(format!(
                "minimum payment rate must be non-negative, got {}",
                self.minimum_payment_rate
            )));
        }
        Ok(())
    }

    /// Minimum payment owed on the current balance
    ///
    /// Not clamped to the balance; the engine caps the full payment at
    /// balance plus interest.
    pub fn minimum_payment(&self, balance: f64) -> f64 {
        self.minimum_payment_floor.max(balance * self.minimum_payment_rate)
    }

    /// Highest APR (percent) at which the minimum payment still covers interest
    ///
    /// Above this rate the percentage-based minimum falls short of the
    /// monthly interest charge on large balances and the debt grows.
    pub fn break_even_apr(&self) -> f64 {
        self.minimum_payment_rate * 12.0 * 100.0
    }
}
