use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::StressTestError;
use crate::types::{MacroDriver, Rate};
use crate::StressResult;

/// A single quarterly macro observation: one value per driver.
///
/// GDP and house-price growth are quarter-on-quarter decimals; unemployment,
/// policy rate, and the 10y gilt yield are levels in decimal form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroObservation {
    pub gdp_growth: Rate,
    pub unemployment_rate: Rate,
    pub house_price_growth: Rate,
    pub policy_rate: Rate,
    pub gilt_10y: Rate,
}

impl MacroObservation {
    /// Build an observation from the anchor mapping supplied by the macro
    /// series provider. Every driver must be present.
    pub fn from_anchor(anchor: &BTreeMap<String, Decimal>) -> StressResult<Self> {
        let mut obs = MacroObservation {
            gdp_growth: Decimal::ZERO,
            unemployment_rate: Decimal::ZERO,
            house_price_growth: Decimal::ZERO,
            policy_rate: Decimal::ZERO,
            gilt_10y: Decimal::ZERO,
        };
        for driver in MacroDriver::ALL {
            let value = anchor
                .get(driver.key())
                .copied()
                .ok_or_else(|| StressTestError::MissingDriver {
                    driver: driver.key().to_string(),
                })?;
            obs.set(driver, value);
        }
        Ok(obs)
    }

    pub fn get(&self, driver: MacroDriver) -> Rate {
        match driver {
            MacroDriver::GdpGrowth => self.gdp_growth,
            MacroDriver::UnemploymentRate => self.unemployment_rate,
            MacroDriver::HousePriceGrowth => self.house_price_growth,
            MacroDriver::PolicyRate => self.policy_rate,
            MacroDriver::Gilt10y => self.gilt_10y,
        }
    }

    pub fn set(&mut self, driver: MacroDriver, value: Rate) {
        match driver {
            MacroDriver::GdpGrowth => self.gdp_growth = value,
            MacroDriver::UnemploymentRate => self.unemployment_rate = value,
            MacroDriver::HousePriceGrowth => self.house_price_growth = value,
            MacroDriver::PolicyRate => self.policy_rate = value,
            MacroDriver::Gilt10y => self.gilt_10y = value,
        }
    }
}

/// An ordered quarterly macro path of fixed length = horizon.
///
/// Quarter indices are implicit by position: `quarters[0]` is projection
/// quarter 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroPath {
    pub quarters: Vec<MacroObservation>,
}

impl MacroPath {
    pub fn len(&self) -> usize {
        self.quarters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quarters.is_empty()
    }

    /// Observation for projection quarter `t` (1-based).
    pub fn observation(&self, t: usize) -> Option<&MacroObservation> {
        if t == 0 {
            return None;
        }
        self.quarters.get(t - 1)
    }
}

/// The two deterministic scenarios. A tagged variant is all the abstraction
/// the engine needs; there is no dynamic dispatch anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioKind {
    Baseline,
    Adverse,
}

impl ScenarioKind {
    pub const ALL: [ScenarioKind; 2] = [ScenarioKind::Baseline, ScenarioKind::Adverse];

    pub fn as_str(self) -> &'static str {
        match self {
            ScenarioKind::Baseline => "baseline",
            ScenarioKind::Adverse => "adverse",
        }
    }
}

/// Baseline and adverse macro paths generated from one anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSet {
    pub baseline: MacroPath,
    pub adverse: MacroPath,
}

impl ScenarioSet {
    pub fn path(&self, kind: ScenarioKind) -> &MacroPath {
        match kind {
            ScenarioKind::Baseline => &self.baseline,
            ScenarioKind::Adverse => &self.adverse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn full_anchor() -> BTreeMap<String, Decimal> {
        let mut m = BTreeMap::new();
        m.insert("gdp_growth".to_string(), dec!(0.004));
        m.insert("unemployment_rate".to_string(), dec!(0.045));
        m.insert("house_price_growth".to_string(), dec!(0.003));
        m.insert("policy_rate".to_string(), dec!(0.035));
        m.insert("gilt_10y".to_string(), dec!(0.040));
        m
    }

    #[test]
    fn test_from_anchor_reads_every_driver() {
        let obs = MacroObservation::from_anchor(&full_anchor()).unwrap();
        assert_eq!(obs.gdp_growth, dec!(0.004));
        assert_eq!(obs.unemployment_rate, dec!(0.045));
        assert_eq!(obs.house_price_growth, dec!(0.003));
        assert_eq!(obs.policy_rate, dec!(0.035));
        assert_eq!(obs.gilt_10y, dec!(0.040));
    }

    #[test]
    fn test_from_anchor_missing_driver_is_named() {
        let mut anchor = full_anchor();
        anchor.remove("gilt_10y");
        let err = MacroObservation::from_anchor(&anchor).unwrap_err();
        match err {
            StressTestError::MissingDriver { driver } => assert_eq!(driver, "gilt_10y"),
            other => panic!("Expected MissingDriver, got {other:?}"),
        }
    }

    #[test]
    fn test_observation_is_one_based() {
        let obs = MacroObservation::from_anchor(&full_anchor()).unwrap();
        let path = MacroPath {
            quarters: vec![obs; 3],
        };
        assert!(path.observation(0).is_none());
        assert!(path.observation(1).is_some());
        assert!(path.observation(3).is_some());
        assert!(path.observation(4).is_none());
    }

    #[test]
    fn test_scenario_kind_names() {
        assert_eq!(ScenarioKind::Baseline.as_str(), "baseline");
        assert_eq!(ScenarioKind::Adverse.as_str(), "adverse");
    }
}
