//! Debt record consumed by the projection engine

use crate::error::{PayoffError, Result};
use serde::{Deserialize, Serialize};

/// A single debt as seen by the engine
///
/// Balances are positive amounts owed. Callers holding signed account
/// balances should go through [`super::debts_from_accounts`] first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    /// Caller identifier, carried through to the result untouched
    pub id: String,

    /// Amount currently owed
    pub balance: f64,

    /// Annual percentage rate (4.5 = 4.5% APR)
    #[serde(default)]
    pub annual_interest_rate: f64,
}

impl Debt {
    pub fn new(id: impl Into<String>, balance: f64, annual_interest_rate: f64) -> Self {
        Self {
            id: id.into(),
            balance,
            annual_interest_rate,
        }
    }

    /// Monthly interest rate as a decimal (APR / 100 / 12)
    pub fn monthly_rate(&self) -> f64 {
        self.annual_interest_rate / 100.0 / 12.0
    }

    /// Zero balances are treated as already paid off
    pub fn is_paid_off(&self) -> bool {
        self.balance <= 0.0
    }

    /// Reject balances and rates the engine cannot project
    pub fn validate(&self) -> Result<()> {
        if !self.balance.is_finite() || self.balance < 0.0 {
            return Err(PayoffError::InvalidInput(format!(
                "debt '{}' has invalid balance {}",
                self.id, self.balance
            )));
        }
        if !self.annual_interest_rate.is_finite() || self.annual_interest_rate < 0.0 {
            return Err(PayoffError::InvalidInput(format!(
                "debt '{}' has invalid annual interest rate {}",
                self.id, self.annual_interest_rate
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_rate() {
        let debt = Debt::new("card", 1_000.0, 18.0);
        assert!((debt.monthly_rate() - 0.015).abs() < 1e-12);

        let free = Debt::new("family", 500.0, 0.0);
        assert_eq!(free.monthly_rate(), 0.0);
    }

    #[test]
    fn test_validate() {
        assert!(Debt::new("ok", 0.0, 0.0).validate().is_ok());
        assert!(Debt::new("ok", 250.0, 29.99).validate().is_ok());

        assert!(matches!(
            Debt::new("neg", -1.0, 5.0).validate(),
            Err(PayoffError::InvalidInput(_))
        ));
        assert!(matches!(
            Debt::new("rate", 100.0, -2.0).validate(),
            Err(PayoffError::InvalidInput(_))
        ));
        assert!(Debt::new("nan", f64::NAN, 5.0).validate().is_err());
        assert!(Debt::new("inf", 100.0, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_missing_rate_defaults_to_zero() {
        let debt: Debt = serde_json::from_str(r#"{"id": "loan", "balance": 1200.0}"#)
            .expect("Failed to parse");
        assert_eq!(debt.annual_interest_rate, 0.0);
        assert!(!debt.is_paid_off());
    }
}
