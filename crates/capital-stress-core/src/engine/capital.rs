use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::balance_sheet::Bank;
use crate::engine::aggregation::LossAmountPath;
use crate::error::StressTestError;
use crate::types::{Money, Rate};
use crate::StressResult;

/// Capital position at one quarter. Quarter 0 is the starting position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapitalPoint {
    pub quarter: usize,
    pub cet1: Money,
    pub ratio: Rate,
}

/// CET1 amount and ratio per quarter for one (bank, scenario), length =
/// horizon + 1 (starting position plus each projected quarter).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapitalPath {
    pub points: Vec<CapitalPoint>,
}

/// Worst point of a capital path and the shortfall against the hurdle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TroughResult {
    pub trough_quarter: usize,
    pub trough_cet1: Money,
    pub trough_ratio: Rate,
    pub breach: bool,
    pub shortfall: Money,
}

/// Roll capital forward: `CET1(0)` is the starting capital and
/// `CET1(t) = CET1(t-1) - loss(t)` in strictly increasing quarter order.
///
/// CET1 is deliberately not floored at zero: a negative value represents
/// modeled insolvency under pure loss absorption and is intended output.
/// RWA is held constant, so `ratio(t) = CET1(t) / starting RWA`.
pub fn roll_forward(
    bank: &Bank,
    losses: &LossAmountPath,
    horizon: usize,
) -> StressResult<CapitalPath> {
    if losses.len() != horizon {
        return Err(StressTestError::HorizonMismatch {
            expected: horizon,
            actual: losses.len(),
        });
    }

    let mut points = Vec::with_capacity(horizon + 1);
    let mut cet1 = bank.cet1_capital;
    points.push(CapitalPoint {
        quarter: 0,
        cet1,
        ratio: cet1 / bank.rwa,
    });
    for (t, loss) in losses.amounts.iter().enumerate() {
        cet1 -= *loss;
        points.push(CapitalPoint {
            quarter: t + 1,
            cet1,
            ratio: cet1 / bank.rwa,
        });
    }

    Ok(CapitalPath { points })
}

/// Locate the minimum CET1 ratio across the path (earliest quarter on ties)
/// and measure the shortfall to the hurdle:
/// `shortfall = max(0, hurdle - trough_ratio) × starting RWA`.
pub fn trough(path: &CapitalPath, bank: &Bank, hurdle: Rate) -> TroughResult {
    let mut worst = &path.points[0];
    for point in &path.points[1..] {
        if point.ratio < worst.ratio {
            worst = point;
        }
    }

    let shortfall = (hurdle - worst.ratio).max(Decimal::ZERO) * bank.rwa;
    TroughResult {
        trough_quarter: worst.quarter,
        trough_cet1: worst.cet1,
        trough_ratio: worst.ratio,
        breach: worst.ratio < hurdle,
        shortfall,
    }
}
