//! Parallel projection of several plans over the same debts

use super::{ProjectionEngine, ProjectionResult};
use crate::assumptions::{PayoffPlan, PayoffStrategy};
use crate::debt::Debt;
use crate::error::Result;
use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Project every plan independently, results in plan order
///
/// Plans are checked in order before any projection runs, so an invalid
/// batch always reports its first invalid plan.
pub fn project_plans(
    engine: &ProjectionEngine,
    debts: &[Debt],
    plans: &[PayoffPlan],
    start_date: NaiveDate,
) -> Result<Vec<ProjectionResult>> {
    for plan in plans {
        plan.validate()?;
    }
    plans
        .par_iter()
        .map(|plan| engine.project(debts, plan, start_date))
        .collect()
}

/// What a strategy saves against paying minimums only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSavings {
    pub interest_saved: f64,
    pub months_saved: i64,
}

impl PlanSavings {
    fn between(baseline: &ProjectionResult, plan: &ProjectionResult) -> Self {
        Self {
            interest_saved: super::round_cents(baseline.total_interest_paid - plan.total_interest_paid),
            months_saved: i64::from(baseline.months_to_payoff) - i64::from(plan.months_to_payoff),
        }
    }
}

/// Avalanche and snowball side by side, with a minimums-only baseline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyComparison {
    pub extra_monthly_payment: f64,
    pub minimums_only: ProjectionResult,
    pub avalanche: ProjectionResult,
    pub snowball: ProjectionResult,
    pub avalanche_savings: PlanSavings,
    pub snowball_savings: PlanSavings,
    /// Cheaper strategy in total interest; avalanche on a tie
    pub recommended: PayoffStrategy,
}

impl StrategyComparison {
    pub fn result_for(&self, strategy: PayoffStrategy) -> &ProjectionResult {
        match strategy {
            PayoffStrategy::Avalanche => &self.avalanche,
            PayoffStrategy::Snowball => &self.snowball,
        }
    }
}

/// Run avalanche, snowball and minimums-only in parallel
pub fn compare_strategies(
    engine: &ProjectionEngine,
    debts: &[Debt],
    extra_monthly_payment: f64,
    start_date: NaiveDate,
) -> Result<StrategyComparison> {
    let ((minimums_only, avalanche), snowball) = rayon::join(
        || {
            rayon::join(
                || engine.project(debts, &PayoffPlan::avalanche(0.0), start_date),
                || engine.project(debts, &PayoffPlan::avalanche(extra_monthly_payment), start_date),
            )
        },
        || engine.project(debts, &PayoffPlan::snowball(extra_monthly_payment), start_date),
    );
    let (minimums_only, avalanche, snowball) = (minimums_only?, avalanche?, snowball?);

    let recommended = if snowball.total_interest_paid < avalanche.total_interest_paid {
        PayoffStrategy::Snowball
    } else {
        PayoffStrategy::Avalanche
    };

    Ok(StrategyComparison {
        extra_monthly_payment,
        avalanche_savings: PlanSavings::between(&minimums_only, &avalanche),
        snowball_savings: PlanSavings::between(&minimums_only, &snowball),
        minimums_only,
        avalanche,
        snowball,
        recommended,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PayoffError;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
    }

    fn debts() -> Vec<Debt> {
        vec![
            Debt::new("store-card", 600.0, 26.99),
            Debt::new("visa", 4_500.0, 21.5),
            Debt::new("car", 7_800.0, 6.9),
        ]
    }

    #[test]
    fn test_project_plans_keeps_order() {
        let engine = ProjectionEngine::default();
        let plans = vec![
            PayoffPlan::snowball(0.0),
            PayoffPlan::snowball(250.0),
            PayoffPlan::avalanche(500.0),
        ];
        let results = project_plans(&engine, &debts(), &plans, start()).expect("batch failed");

        assert_eq!(results.len(), 3);
        // Each plan matches its standalone projection
        for (plan, result) in plans.iter().zip(&results) {
            let single = engine.project(&debts(), plan, start()).expect("projection failed");
            assert_eq!(&single, result);
        }
        // More extra pays off sooner
        assert!(results[1].months_to_payoff < results[0].months_to_payoff);
        assert!(results[2].months_to_payoff < results[1].months_to_payoff);
    }

    #[test]
    fn test_project_plans_reports_invalid_plan() {
        let plans = vec![PayoffPlan::avalanche(100.0), PayoffPlan::snowball(-5.0)];
        let err = project_plans(&ProjectionEngine::default(), &debts(), &plans, start()).unwrap_err();
        assert!(matches!(err, PayoffError::InvalidInput(_)));
    }

    #[test]
    fn test_project_plans_reports_first_invalid_plan() {
        let mut plans: Vec<PayoffPlan> = (0..500).map(|i| PayoffPlan::avalanche(i as f64)).collect();
        plans[3] = PayoffPlan::snowball(-5.0);
        plans[400] = PayoffPlan::avalanche(-7.0);
        plans[499] = PayoffPlan::avalanche(f64::NAN);

        for _ in 0..20 {
            match project_plans(&ProjectionEngine::default(), &debts(), &plans, start()) {
                Err(PayoffError::InvalidInput(msg)) => assert!(msg.ends_with("got -5"), "{msg}"),
                other => panic!("expected InvalidInput, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_compare_strategies() {
        let comparison = compare_strategies(&ProjectionEngine::default(), &debts(), 300.0, start())
            .expect("comparison failed");

        // At 21.5% APR the 2% minimum barely outpaces interest on the visa
        assert!(!comparison.minimums_only.converged);
        assert_eq!(comparison.minimums_only.months_to_payoff, 360);
        assert!(comparison.avalanche.converged);
        assert!(comparison.snowball.converged);

        assert!(comparison.avalanche_savings.interest_saved > 0.0);
        assert!(comparison.snowball_savings.interest_saved > 0.0);
        assert!(comparison.avalanche_savings.months_saved > 0);

        assert!(
            comparison.avalanche.total_interest_paid <= comparison.snowball.total_interest_paid
                || comparison.recommended == PayoffStrategy::Snowball
        );
        assert_eq!(
            comparison.result_for(comparison.recommended).total_interest_paid,
            comparison
                .avalanche
                .total_interest_paid
                .min(comparison.snowball.total_interest_paid)
        );
    }

    #[test]
    fn test_compare_without_debts() {
        let comparison = compare_strategies(&ProjectionEngine::default(), &[], 100.0, start())
            .expect("comparison failed");
        assert_eq!(comparison.avalanche.months_to_payoff, 0);
        assert_eq!(comparison.avalanche_savings.months_saved, 0);
        assert_eq!(comparison.recommended, PayoffStrategy::Avalanche);
    }
}
