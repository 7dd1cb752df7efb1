//! Engine settings loaded from JSON
//!
//! Every field is optional; anything left out falls back to the defaults:
//!
//! ```json
//! {
//!   "payment": { "minimum_payment_floor": 25.0, "minimum_payment_rate": 0.02 },
//!   "projection": { "max_months": 360, "cascade_surplus": false }
//! }
//! ```

use crate::assumptions::PaymentAssumptions;
use crate::error::Result;
use crate::projection::{ProjectionConfig, ProjectionEngine};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineSettings {
    #[serde(default)]
    pub payment: PaymentAssumptions,

    #[serde(default)]
    pub projection: ProjectionConfig,
}

impl EngineSettings {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let settings: Self = serde_json::from_reader(BufReader::new(file))?;
        settings.payment.validate()?;
        settings.projection.validate()?;
        info!("Loaded engine settings from {}", path.as_ref().display());
        Ok(settings)
    }

    pub fn engine(&self) -> ProjectionEngine {
        ProjectionEngine::new(self.payment.clone(), self.projection.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PayoffError;
    use std::fs;

    #[test]
    fn test_empty_json_is_default() {
        let settings: EngineSettings = serde_json::from_str("{}").expect("Failed to parse");
        assert_eq!(settings, EngineSettings::default());
        assert_eq!(settings.engine().config().max_months, 360);
    }

    #[test]
    fn test_partial_sections() {
        let json = r#"{
            "payment": { "minimum_payment_rate": 0.03 },
            "projection": { "reorder_monthly": true, "max_months": 120 }
        }"#;
        let settings: EngineSettings = serde_json::from_str(json).expect("Failed to parse");

        assert_eq!(settings.payment.minimum_payment_floor, 25.0);
        assert_eq!(settings.payment.minimum_payment_rate, 0.03);
        assert!(settings.projection.reorder_monthly);
        assert_eq!(settings.projection.max_months, 120);

        let engine = settings.engine();
        assert!((engine.payment().minimum_payment(2_000.0) - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_file_with_cap_past_360_rejected() {
        let path = std::env::temp_dir().join(format!("debt_payoff_settings_{}.json", std::process::id()));
        fs::write(&path, r#"{"projection": {"max_months": 5000}}"#).expect("Failed to write settings");
        let loaded = EngineSettings::from_json_file(&path);

        fs::write(&path, r#"{"projection": {"max_months": 240}}"#).expect("Failed to write settings");
        let accepted = EngineSettings::from_json_file(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(loaded, Err(PayoffError::InvalidInput(_))));
        assert_eq!(accepted.expect("Failed to load settings").projection.max_months, 240);
    }
}
