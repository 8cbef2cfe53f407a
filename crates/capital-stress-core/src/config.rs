//! All run assumptions as constants and constructors. Importable with no
//! side effects, so a reviewer can audit every number in one place.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::scenarios::{MacroObservation, ShockConfig};
use crate::types::{DriverVector, Rate};

/// Projection horizon in quarters.
pub const HORIZON_QUARTERS: usize = 12;

/// CET1 ratio hurdle against which shortfalls are measured.
pub const HURDLE_RATIO: Rate = dec!(0.07);

/// Default adverse-scenario severity multiplier.
pub const DEFAULT_SEVERITY: Decimal = dec!(1.0);

/// Default quarterly decay factor for the adverse shock.
pub const DEFAULT_PERSISTENCE: Rate = dec!(0.85);

// Peak shocks applied at quarter 1 of the adverse scenario: recessions
// shrink GDP and house prices, raise unemployment, and pull policy and
// gilt rates down.
pub const GDP_GROWTH_SHOCK: Rate = dec!(-0.020);
pub const UNEMPLOYMENT_SHOCK: Rate = dec!(0.010);
pub const HOUSE_PRICE_SHOCK: Rate = dec!(-0.030);
pub const POLICY_RATE_SHOCK: Rate = dec!(-0.005);
pub const GILT_10Y_SHOCK: Rate = dec!(-0.003);

/// Structural overlay multiplier for the high-LTV tail of owner-occupied
/// mortgage books. Scales the floored loss rate, nothing more.
pub const HIGH_LTV_OVERLAY: Decimal = dec!(1.15);

/// Default shock configuration for the adverse scenario.
pub fn default_shock_config() -> ShockConfig {
    ShockConfig {
        severity: DEFAULT_SEVERITY,
        persistence: DEFAULT_PERSISTENCE,
        peak: DriverVector {
            gdp_growth: GDP_GROWTH_SHOCK,
            unemployment_rate: UNEMPLOYMENT_SHOCK,
            house_price_growth: HOUSE_PRICE_SHOCK,
            policy_rate: POLICY_RATE_SHOCK,
            gilt_10y: GILT_10Y_SHOCK,
        },
    }
}

/// Stylised anchor observation: the last cleaned quarterly data point the
/// scenario generator continues from. Levels and quarter-on-quarter growth
/// rates are decimals, never percentage points.
pub fn stylised_anchor() -> MacroObservation {
    MacroObservation {
        gdp_growth: dec!(0.004),
        unemployment_rate: dec!(0.045),
        house_price_growth: dec!(0.003),
        policy_rate: dec!(0.035),
        gilt_10y: dec!(0.040),
    }
}
