use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use capital_stress_core::balance_sheet::Bank;
use capital_stress_core::engine::{run_stress_test, StressTestInput};
use capital_stress_core::satellite::SatelliteModel;

use crate::input;

/// Arguments for the full stress-test run
#[derive(Args)]
pub struct RunArgs {
    /// Shock severity multiplier applied to every peak shock
    #[arg(long)]
    pub severity: Option<Decimal>,

    /// Quarterly shock persistence in [0, 1]
    #[arg(long)]
    pub persistence: Option<Decimal>,

    /// Forecast horizon in quarters
    #[arg(long)]
    pub horizon: Option<usize>,

    /// CET1 hurdle ratio the troughs are measured against
    #[arg(long)]
    pub hurdle: Option<Decimal>,

    /// Path to a JSON file with a bank array replacing the stylised system
    #[arg(long)]
    pub banks: Option<String>,

    /// Emit only the trough summary, dropping the quarterly capital panel
    #[arg(long)]
    pub summary_only: bool,
}

pub fn run_stress(args: RunArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mut input = StressTestInput::stylised()?;

    if let Some(severity) = args.severity {
        input.shocks.severity = severity;
    }
    if let Some(persistence) = args.persistence {
        input.shocks.persistence = persistence;
    }
    if let Some(horizon) = args.horizon {
        input.horizon = horizon;
    }
    if let Some(hurdle) = args.hurdle {
        input.hurdle = hurdle;
    }
    if let Some(path) = &args.banks {
        input.banks = input::file::read_json::<Vec<Bank>>(path)?;
    }

    let output = run_stress_test(&input, &SatelliteModel::stylised())?;
    let mut value = serde_json::to_value(output)?;

    if args.summary_only {
        if let Some(result) = value.get_mut("result") {
            let summary = result
                .get_mut("summary")
                .map(Value::take)
                .unwrap_or(Value::Null);
            *result = summary;
        }
    }

    Ok(value)
}
