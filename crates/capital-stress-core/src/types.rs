use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values (£bn in the stylised data).
pub type Money = Decimal;

/// Rates expressed as decimals (0.05 = 5%). Never as percentages.
pub type Rate = Decimal;

/// The closed set of macro drivers every scenario path carries.
///
/// Satellite coefficients are keyed by this enum rather than by string, so a
/// coefficient for a driver the engine does not know cannot be configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MacroDriver {
    GdpGrowth,
    UnemploymentRate,
    HousePriceGrowth,
    PolicyRate,
    Gilt10y,
}

impl MacroDriver {
    pub const ALL: [MacroDriver; 5] = [
        MacroDriver::GdpGrowth,
        MacroDriver::UnemploymentRate,
        MacroDriver::HousePriceGrowth,
        MacroDriver::PolicyRate,
        MacroDriver::Gilt10y,
    ];

    /// Stable key used in external anchor mappings and serialized output.
    pub fn key(self) -> &'static str {
        match self {
            MacroDriver::GdpGrowth => "gdp_growth",
            MacroDriver::UnemploymentRate => "unemployment_rate",
            MacroDriver::HousePriceGrowth => "house_price_growth",
            MacroDriver::PolicyRate => "policy_rate",
            MacroDriver::Gilt10y => "gilt_10y",
        }
    }
}

/// One value per macro driver. Used for satellite slopes and shock peaks;
/// the fixed shape means a missing driver is unrepresentable once inputs
/// have crossed the boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DriverVector {
    pub gdp_growth: Rate,
    pub unemployment_rate: Rate,
    pub house_price_growth: Rate,
    pub policy_rate: Rate,
    pub gilt_10y: Rate,
}

impl DriverVector {
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

    /// Driver-by-driver dot product against a macro observation.
    pub fn dot(&self, obs: &crate::scenarios::MacroObservation) -> Rate {
        MacroDriver::ALL
            .into_iter()
            .map(|driver| self.get(driver) * obs.get(driver))
            .sum()
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
