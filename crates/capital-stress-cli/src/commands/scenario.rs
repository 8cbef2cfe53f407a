use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use capital_stress_core::config;
use capital_stress_core::scenarios::{ScenarioGenerator, ScenarioKind};
use capital_stress_core::types::{MacroDriver, Rate};

/// Arguments for printing the generated macro paths
#[derive(Args)]
pub struct ScenarioArgs {
    /// Shock severity multiplier applied to every peak shock
    #[arg(long)]
    pub severity: Option<Decimal>,

    /// Quarterly shock persistence in [0, 1]
    #[arg(long)]
    pub persistence: Option<Decimal>,

    /// Forecast horizon in quarters
    #[arg(long)]
    pub horizon: Option<usize>,
}

#[derive(Serialize)]
struct MacroPathRow {
    scenario: ScenarioKind,
    quarter: usize,
    gdp_growth: Rate,
    unemployment_rate: Rate,
    house_price_growth: Rate,
    policy_rate: Rate,
    gilt_10y: Rate,
}

pub fn run_scenario(args: ScenarioArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mut shocks = config::default_shock_config();
    if let Some(severity) = args.severity {
        shocks.severity = severity;
    }
    if let Some(persistence) = args.persistence {
        shocks.persistence = persistence;
    }
    let horizon = args.horizon.unwrap_or(config::HORIZON_QUARTERS);

    let generator = ScenarioGenerator::new(horizon, shocks);
    let set = generator.generate(&config::stylised_anchor())?;

    let mut rows = Vec::new();
    for kind in ScenarioKind::ALL {
        let path = set.path(kind);
        for (t, obs) in path.quarters.iter().enumerate() {
            rows.push(MacroPathRow {
                scenario: kind,
                quarter: t + 1,
                gdp_growth: obs.get(MacroDriver::GdpGrowth),
                unemployment_rate: obs.get(MacroDriver::UnemploymentRate),
                house_price_growth: obs.get(MacroDriver::HousePriceGrowth),
                policy_rate: obs.get(MacroDriver::PolicyRate),
                gilt_10y: obs.get(MacroDriver::Gilt10y),
            });
        }
    }

    Ok(serde_json::to_value(rows)?)
}
