use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use capital_stress_core::balance_sheet::{stylised_banks, Bank, PortfolioBucket};

use crate::input;

/// Arguments for printing bank starting positions
#[derive(Args)]
pub struct BanksArgs {
    /// Path to a JSON file with a bank array replacing the stylised system
    #[arg(long)]
    pub banks: Option<String>,
}

pub fn run_banks(args: BanksArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let banks = match &args.banks {
        Some(path) => {
            let banks: Vec<Bank> = input::file::read_json(path)?;
            for bank in &banks {
                bank.validate()?;
            }
            banks
        }
        None => stylised_banks()?,
    };

    let mut rows = Vec::new();
    for bank in &banks {
        let mut row = serde_json::Map::new();
        row.insert("bank".to_string(), json!(bank.name));
        for bucket in PortfolioBucket::ALL {
            let exposure = bank
                .exposures
                .get(&bucket)
                .copied()
                .unwrap_or(Decimal::ZERO);
            row.insert(bucket.key().to_string(), json!(exposure));
        }
        row.insert("total_ead".to_string(), json!(bank.total_exposure()));
        row.insert("rwa".to_string(), json!(bank.rwa));
        row.insert("cet1".to_string(), json!(bank.cet1_capital));
        row.insert("cet1_ratio".to_string(), json!(bank.starting_ratio()));
        rows.push(Value::Object(row));
    }

    Ok(Value::Array(rows))
}
