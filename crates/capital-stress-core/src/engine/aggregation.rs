use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::balance_sheet::{Bank, PortfolioBucket};
use crate::error::StressTestError;
use crate::satellite::LossRatePath;
use crate::types::Money;
use crate::StressResult;

/// Total loss amount per quarter for one (bank, scenario), length = horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LossAmountPath {
    pub amounts: Vec<Money>,
}

impl LossAmountPath {
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    pub fn total(&self) -> Money {
        self.amounts.iter().copied().sum()
    }
}

/// Combine per-bucket loss rates with a bank's exposures into a total loss
/// amount per quarter: `loss(t) = Σ exposure[bucket] × rate[bucket][t]`.
///
/// Every bucket the bank is exposed to must have a projection; a missing one
/// is a configuration defect upstream, never treated as zero.
pub fn aggregate_losses(
    bank: &Bank,
    loss_rates: &BTreeMap<PortfolioBucket, LossRatePath>,
    horizon: usize,
) -> StressResult<LossAmountPath> {
    let mut amounts = vec![Decimal::ZERO; horizon];

    for (bucket, exposure) in &bank.exposures {
        let path = loss_rates
            .get(bucket)
            .ok_or_else(|| StressTestError::MissingBucketLoss {
                bank: bank.name.clone(),
                bucket: bucket.key().to_string(),
            })?;
        if path.len() != horizon {
            return Err(StressTestError::HorizonMismatch {
                expected: horizon,
                actual: path.len(),
            });
        }
        for (t, rate) in path.rates.iter().enumerate() {
            amounts[t] += *exposure * *rate;
        }
    }

    Ok(LossAmountPath { amounts })
}
