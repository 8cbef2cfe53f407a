use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::StressTestError;
use crate::scenarios::{MacroObservation, MacroPath, ScenarioSet};
use crate::types::{DriverVector, MacroDriver, Rate};
use crate::StressResult;

/// Shock-and-decay parameters for the adverse scenario.
///
/// The deviation from baseline at projection quarter t (1-based) is
/// `peak × severity × persistence^(t-1)`, per driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShockConfig {
    /// Scales every peak shock. 1.0 = the configured severity.
    pub severity: Decimal,
    /// Quarterly geometric decay factor, in [0, 1].
    pub persistence: Rate,
    /// Peak deviation per driver, applied at quarter 1.
    pub peak: DriverVector,
}

/// Produces the baseline and adverse macro paths from an anchor observation.
///
/// Deterministic: no randomness, no I/O. The baseline is a flat continuation
/// of the anchor, not a forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioGenerator {
    pub horizon: usize,
    pub shocks: ShockConfig,
}

impl ScenarioGenerator {
    pub fn new(horizon: usize, shocks: ShockConfig) -> Self {
        ScenarioGenerator { horizon, shocks }
    }

    pub fn generate(&self, anchor: &MacroObservation) -> StressResult<ScenarioSet> {
        self.validate()?;

        let baseline = MacroPath {
            quarters: vec![*anchor; self.horizon],
        };

        let mut quarters = Vec::with_capacity(self.horizon);
        let mut scale = self.shocks.severity;
        for _ in 0..self.horizon {
            let mut obs = *anchor;
            for driver in MacroDriver::ALL {
                obs.set(driver, obs.get(driver) + self.shocks.peak.get(driver) * scale);
            }
            // Unemployment is a level and cannot go below zero, however
            // severe the configured shock.
            obs.unemployment_rate = obs.unemployment_rate.max(Decimal::ZERO);
            quarters.push(obs);
            scale *= self.shocks.persistence;
        }

        Ok(ScenarioSet {
            baseline,
            adverse: MacroPath { quarters },
        })
    }

    fn validate(&self) -> StressResult<()> {
        if self.horizon == 0 {
            return Err(StressTestError::InvalidInput {
                field: "horizon".into(),
                reason: "Horizon must be at least one quarter.".into(),
            });
        }
        if self.shocks.persistence < Decimal::ZERO || self.shocks.persistence > Decimal::ONE {
            return Err(StressTestError::InvalidInput {
                field: "shocks.persistence".into(),
                reason: format!(
                    "Persistence must be in [0, 1], got {}",
                    self.shocks.persistence
                ),
            });
        }
        if self.shocks.severity < Decimal::ZERO {
            return Err(StressTestError::InvalidInput {
                field: "shocks.severity".into(),
                reason: "Severity cannot be negative.".into(),
            });
        }
        Ok(())
    }
}
