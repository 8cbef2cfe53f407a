//! Satellite (credit loss) models.
//!
//! A satellite maps macro conditions to a per-quarter loss rate for one
//! portfolio bucket via a fixed affine function: intercept plus one slope per
//! macro driver. Loss rates are floored at zero; the model never produces
//! negative losses, while capital itself is allowed to go negative further
//! down the pipeline.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::balance_sheet::PortfolioBucket;
use crate::config::HIGH_LTV_OVERLAY;
use crate::error::StressTestError;
use crate::scenarios::MacroPath;
use crate::types::{DriverVector, Rate};
use crate::StressResult;

/// Regression coefficients for one portfolio bucket. Immutable once
/// configured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketCoefficients {
    pub intercept: Rate,
    /// One slope per macro driver; unused drivers carry a zero slope.
    pub slopes: DriverVector,
    /// Structural overlay multiplier (e.g. high-LTV amplification), applied
    /// to the floored loss rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay: Option<Decimal>,
}

/// Per-quarter loss rates for one (bucket, scenario), length = horizon.
/// Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LossRatePath {
    pub rates: Vec<Rate>,
}

impl LossRatePath {
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// The configured satellite coefficient set, one entry per bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatelliteModel {
    coefficients: BTreeMap<PortfolioBucket, BucketCoefficients>,
}

impl SatelliteModel {
    pub fn new(coefficients: BTreeMap<PortfolioBucket, BucketCoefficients>) -> Self {
        SatelliteModel { coefficients }
    }

    pub fn coefficients(&self, bucket: PortfolioBucket) -> Option<&BucketCoefficients> {
        self.coefficients.get(&bucket)
    }

    pub fn buckets(&self) -> impl Iterator<Item = PortfolioBucket> + '_ {
        self.coefficients.keys().copied()
    }

    /// Project the loss-rate path for one bucket under one macro path.
    ///
    /// `rate(t) = max(0, intercept + Σ slope_d × driver_d(t))`, then scaled
    /// by the overlay multiplier if the bucket carries one. Pure function of
    /// its inputs.
    pub fn project(
        &self,
        bucket: PortfolioBucket,
        macro_path: &MacroPath,
    ) -> StressResult<LossRatePath> {
        let coeffs =
            self.coefficients
                .get(&bucket)
                .ok_or_else(|| StressTestError::UnknownBucket {
                    bucket: bucket.key().to_string(),
                })?;

        let mut rates = Vec::with_capacity(macro_path.len());
        for obs in &macro_path.quarters {
            let mut rate = (coeffs.intercept + coeffs.slopes.dot(obs)).max(Decimal::ZERO);
            if let Some(overlay) = coeffs.overlay {
                rate *= overlay;
            }
            rates.push(rate);
        }
        Ok(LossRatePath { rates })
    }

    /// Project loss-rate paths for every configured bucket.
    pub fn project_all(
        &self,
        macro_path: &MacroPath,
    ) -> StressResult<BTreeMap<PortfolioBucket, LossRatePath>> {
        let mut paths = BTreeMap::new();
        for bucket in self.buckets() {
            paths.insert(bucket, self.project(bucket, macro_path)?);
        }
        Ok(paths)
    }

    /// Stylised coefficient set: quarterly loss-rate sensitivities, with the
    /// high-LTV overlay on owner-occupied mortgages. Policy-rate and gilt
    /// slopes are small or zero; unemployment and GDP carry the signal.
    pub fn stylised() -> Self {
        let mut coefficients = BTreeMap::new();
        coefficients.insert(
            PortfolioBucket::MortgagesOwnerOccupied,
            BucketCoefficients {
                intercept: dec!(-0.0020),
                slopes: DriverVector {
                    gdp_growth: dec!(-0.01),
                    unemployment_rate: dec!(0.05),
                    house_price_growth: dec!(-0.03),
                    policy_rate: Decimal::ZERO,
                    gilt_10y: Decimal::ZERO,
                },
                overlay: Some(HIGH_LTV_OVERLAY),
            },
        );
        coefficients.insert(
            PortfolioBucket::ConsumerUnsecured,
            BucketCoefficients {
                intercept: dec!(0.0015),
                slopes: DriverVector {
                    gdp_growth: dec!(-0.05),
                    unemployment_rate: dec!(0.10),
                    house_price_growth: Decimal::ZERO,
                    policy_rate: dec!(0.01),
                    gilt_10y: Decimal::ZERO,
                },
                overlay: None,
            },
        );
        coefficients.insert(
            PortfolioBucket::SmeLoans,
            BucketCoefficients {
                intercept: dec!(0.0020),
                slopes: DriverVector {
                    gdp_growth: dec!(-0.08),
                    unemployment_rate: dec!(0.06),
                    house_price_growth: Decimal::ZERO,
                    policy_rate: dec!(0.015),
                    gilt_10y: Decimal::ZERO,
                },
                overlay: None,
            },
        );
        coefficients.insert(
            PortfolioBucket::LargeCorporateLoans,
            BucketCoefficients {
                intercept: dec!(0.0010),
                slopes: DriverVector {
                    gdp_growth: dec!(-0.06),
                    unemployment_rate: dec!(0.03),
                    house_price_growth: Decimal::ZERO,
                    policy_rate: dec!(0.005),
                    gilt_10y: dec!(0.01),
                },
                overlay: None,
            },
        );
        SatelliteModel::new(coefficients)
    }
}
