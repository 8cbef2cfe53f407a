use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::StressTestError;
use crate::types::{Money, Rate};
use crate::StressResult;

// ---------------------------------------------------------------------------
// Portfolio buckets
// ---------------------------------------------------------------------------

/// The closed set of portfolio buckets banks hold exposure in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PortfolioBucket {
    #[serde(rename = "mortgages_oo")]
    MortgagesOwnerOccupied,
    #[serde(rename = "consumer_unsecured")]
    ConsumerUnsecured,
    #[serde(rename = "sme_loans")]
    SmeLoans,
    #[serde(rename = "large_corp_loans")]
    LargeCorporateLoans,
}

impl PortfolioBucket {
    pub const ALL: [PortfolioBucket; 4] = [
        PortfolioBucket::MortgagesOwnerOccupied,
        PortfolioBucket::ConsumerUnsecured,
        PortfolioBucket::SmeLoans,
        PortfolioBucket::LargeCorporateLoans,
    ];

    /// Stable key used in serialized exposures and error messages.
    pub fn key(self) -> &'static str {
        match self {
            PortfolioBucket::MortgagesOwnerOccupied => "mortgages_oo",
            PortfolioBucket::ConsumerUnsecured => "consumer_unsecured",
            PortfolioBucket::SmeLoans => "sme_loans",
            PortfolioBucket::LargeCorporateLoans => "large_corp_loans",
        }
    }

    /// Standardised risk weight used when building the stylised registry.
    pub fn risk_weight(self) -> Rate {
        match self {
            PortfolioBucket::MortgagesOwnerOccupied => dec!(0.25),
            PortfolioBucket::ConsumerUnsecured => dec!(0.50),
            PortfolioBucket::SmeLoans => dec!(0.75),
            PortfolioBucket::LargeCorporateLoans => dec!(1.00),
        }
    }
}

// ---------------------------------------------------------------------------
// Bank
// ---------------------------------------------------------------------------

/// A bank's static starting position. Read-only inside the engine; RWA is
/// held constant across the horizon (no balance-sheet growth).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    pub name: String,
    /// Starting CET1 capital amount.
    pub cet1_capital: Money,
    /// Starting risk-weighted assets. Fixed denominator of the capital ratio.
    pub rwa: Money,
    /// Exposure amount (EAD) per portfolio bucket.
    pub exposures: BTreeMap<PortfolioBucket, Money>,
}

impl Bank {
    pub fn new(
        name: impl Into<String>,
        cet1_capital: Money,
        rwa: Money,
        exposures: BTreeMap<PortfolioBucket, Money>,
    ) -> StressResult<Self> {
        let bank = Bank {
            name: name.into(),
            cet1_capital,
            rwa,
            exposures,
        };
        bank.validate()?;
        Ok(bank)
    }

    /// Registration-time validation. A bank that fails here never reaches
    /// the engine; the engine itself assumes these invariants hold.
    pub fn validate(&self) -> StressResult<()> {
        if self.rwa <= Decimal::ZERO {
            return Err(StressTestError::InvalidInput {
                field: format!("{}.rwa", self.name),
                reason: format!("Starting RWA must be positive, got {}", self.rwa),
            });
        }
        if self.cet1_capital < Decimal::ZERO {
            return Err(StressTestError::InvalidInput {
                field: format!("{}.cet1_capital", self.name),
                reason: "Starting CET1 capital cannot be negative.".into(),
            });
        }
        if self.exposures.is_empty() {
            return Err(StressTestError::InvalidInput {
                field: format!("{}.exposures", self.name),
                reason: "Exposure mapping must be non-empty.".into(),
            });
        }
        for (bucket, amount) in &self.exposures {
            if *amount < Decimal::ZERO {
                return Err(StressTestError::InvalidInput {
                    field: format!("{}.exposures.{}", self.name, bucket.key()),
                    reason: format!("Exposure cannot be negative, got {amount}"),
                });
            }
        }
        Ok(())
    }

    /// Starting CET1 ratio = starting capital / starting RWA.
    pub fn starting_ratio(&self) -> Rate {
        self.cet1_capital / self.rwa
    }

    pub fn total_exposure(&self) -> Money {
        self.exposures.values().copied().sum()
    }
}

// ---------------------------------------------------------------------------
// Stylised registry
// ---------------------------------------------------------------------------

/// Stylised UK bank registry: total EAD (£bn), target CET1 ratio, and base
/// portfolio shares per bucket (mortgages, consumer, SME, large corporate).
/// Shares must sum to one.
const STYLISED_BANKS: [(&str, Decimal, Decimal, [Decimal; 4]); 3] = [
    (
        "HSBC",
        dec!(800),
        dec!(0.14),
        [dec!(0.20), dec!(0.15), dec!(0.25), dec!(0.40)],
    ),
    (
        "Lloyds Banking Group",
        dec!(600),
        dec!(0.15),
        [dec!(0.55), dec!(0.25), dec!(0.15), dec!(0.05)],
    ),
    (
        "Standard Chartered",
        dec!(400),
        dec!(0.13),
        [dec!(0.05), dec!(0.05), dec!(0.30), dec!(0.60)],
    ),
];

/// Construct the stylised bank registry. EAD per bucket follows the share
/// table, RWA applies the standardised bucket risk weights, and starting
/// CET1 is the target ratio times RWA.
pub fn stylised_banks() -> StressResult<Vec<Bank>> {
    let mut banks = Vec::with_capacity(STYLISED_BANKS.len());
    for (name, total_ead, target_ratio, shares) in STYLISED_BANKS {
        let share_sum: Decimal = shares.iter().copied().sum();
        if share_sum != Decimal::ONE {
            return Err(StressTestError::InvalidInput {
                field: format!("{name}.shares"),
                reason: format!("Portfolio shares must sum to 1.0, got {share_sum}"),
            });
        }

        let mut exposures = BTreeMap::new();
        let mut rwa = Decimal::ZERO;
        for (bucket, share) in PortfolioBucket::ALL.into_iter().zip(shares) {
            let ead = total_ead * share;
            rwa += ead * bucket.risk_weight();
            exposures.insert(bucket, ead);
        }

        banks.push(Bank::new(name, target_ratio * rwa, rwa, exposures)?);
    }
    Ok(banks)
}
