use std::collections::BTreeMap;

use capital_stress_core::balance_sheet::{Bank, PortfolioBucket};
use capital_stress_core::config;
use capital_stress_core::engine::{
    aggregate_losses, roll_forward, run_stress_test, trough, StressTestInput,
};
use capital_stress_core::satellite::{BucketCoefficients, LossRatePath, SatelliteModel};
use capital_stress_core::scenarios::{MacroObservation, ScenarioGenerator, ScenarioKind};
use capital_stress_core::types::{DriverVector, MacroDriver};
use capital_stress_core::StressTestError;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// End-to-end: the documented single-bucket bank
// ===========================================================================

/// A bank with starting CET1 = 10, RWA = 100, and a single 100-unit SME
/// exposure, pushed through the full pipeline with a satellite configured to
/// reproduce the loss-rate path 1%, 2%, 1.5%, 1%, 0.5%, then zero.
#[test]
fn test_single_bucket_bank_full_pipeline() {
    let mut exposures = BTreeMap::new();
    exposures.insert(PortfolioBucket::SmeLoans, dec!(100));
    let bank = Bank::new("Single Bucket", dec!(10), dec!(100), exposures).unwrap();

    let loss_rates = LossRatePath {
        rates: vec![
            dec!(0.01),
            dec!(0.02),
            dec!(0.015),
            dec!(0.01),
            dec!(0.005),
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
        ],
    };
    let mut by_bucket = BTreeMap::new();
    by_bucket.insert(PortfolioBucket::SmeLoans, loss_rates);

    let losses = aggregate_losses(&bank, &by_bucket, 12).unwrap();
    assert_eq!(losses.amounts[0], dec!(1.00));
    assert_eq!(losses.amounts[1], dec!(2.00));
    assert_eq!(losses.total(), dec!(6.00));

    let path = roll_forward(&bank, &losses, 12).unwrap();
    let cet1: Vec<Decimal> = path.points.iter().map(|p| p.cet1).collect();
    assert_eq!(
        cet1,
        vec![
            dec!(10),
            dec!(9),
            dec!(7),
            dec!(5.5),
            dec!(4.5),
            dec!(4),
            dec!(4),
            dec!(4),
            dec!(4),
            dec!(4),
            dec!(4),
            dec!(4),
            dec!(4)
        ]
    );
    for point in &path.points {
        assert_eq!(point.ratio, point.cet1 / dec!(100));
    }

    let result = trough(&path, &bank, config::HURDLE_RATIO);
    assert_eq!(result.trough_quarter, 5);
    assert_eq!(result.trough_ratio, dec!(0.04));
    assert!(result.breach);
    assert_eq!(result.shortfall, dec!(3));
}

// ===========================================================================
// Scenario properties
// ===========================================================================

#[test]
fn test_baseline_flatness_property() {
    let anchor = config::stylised_anchor();
    let generator = ScenarioGenerator::new(config::HORIZON_QUARTERS, config::default_shock_config());
    let set = generator.generate(&anchor).unwrap();

    for driver in MacroDriver::ALL {
        for obs in &set.baseline.quarters {
            assert_eq!(obs.get(driver), anchor.get(driver));
        }
    }
}

#[test]
fn test_adverse_decay_property() {
    let anchor = config::stylised_anchor();
    let generator = ScenarioGenerator::new(config::HORIZON_QUARTERS, config::default_shock_config());
    let set = generator.generate(&anchor).unwrap();
    let shocks = config::default_shock_config();

    for driver in MacroDriver::ALL {
        if shocks.peak.get(driver) == Decimal::ZERO {
            continue;
        }
        let first = (set.adverse.observation(1).unwrap().get(driver) - anchor.get(driver)).abs();
        let last = (set
            .adverse
            .observation(config::HORIZON_QUARTERS)
            .unwrap()
            .get(driver)
            - anchor.get(driver))
        .abs();
        assert!(last < first);
    }
}

#[test]
fn test_anchor_mapping_must_cover_every_driver() {
    let mut anchor = BTreeMap::new();
    anchor.insert("gdp_growth".to_string(), dec!(0.004));
    anchor.insert("unemployment_rate".to_string(), dec!(0.045));
    // house_price_growth, policy_rate, gilt_10y deliberately absent.

    let err = MacroObservation::from_anchor(&anchor).unwrap_err();
    assert!(matches!(err, StressTestError::MissingDriver { .. }));
}

// ===========================================================================
// Full stylised system run
// ===========================================================================

#[test]
fn test_stylised_system_run_shape_and_invariants() {
    let input = StressTestInput::stylised().unwrap();
    let model = SatelliteModel::stylised();
    let output = run_stress_test(&input, &model).unwrap();

    let result = &output.result;
    assert_eq!(result.panel.len(), 2 * 3 * (config::HORIZON_QUARTERS + 1));
    assert_eq!(result.summary.len(), 6);

    // Losses are non-negative everywhere, so CET1 never rises.
    for row in &result.panel {
        assert!(row.loss >= Decimal::ZERO);
    }

    // Trough summary agrees with the panel.
    for summary in &result.summary {
        let min_ratio = result
            .panel
            .iter()
            .filter(|r| r.scenario == summary.scenario && r.bank == summary.bank)
            .map(|r| r.cet1_ratio)
            .min()
            .unwrap();
        assert_eq!(summary.trough_ratio, min_ratio);
    }

    // With strictly positive baseline loss rates the baseline trough sits at
    // the final quarter.
    for summary in result.summary.iter().filter(|r| r.scenario == ScenarioKind::Baseline) {
        assert_eq!(summary.trough_quarter, config::HORIZON_QUARTERS);
    }

    // Shortfall is zero exactly when the trough clears the hurdle.
    for summary in &result.summary {
        if summary.trough_ratio >= input.hurdle {
            assert_eq!(summary.shortfall, Decimal::ZERO);
            assert!(!summary.breach);
        } else {
            assert!(summary.shortfall > Decimal::ZERO);
            assert!(summary.breach);
        }
    }
}

#[test]
fn test_repeated_runs_are_bitwise_identical() {
    let input = StressTestInput::stylised().unwrap();
    let model = SatelliteModel::stylised();

    let a = run_stress_test(&input, &model).unwrap();
    let b = run_stress_test(&input, &model).unwrap();
    assert_eq!(
        serde_json::to_value(&a.result).unwrap(),
        serde_json::to_value(&b.result).unwrap()
    );
}

#[test]
fn test_changing_one_bank_leaves_others_untouched() {
    let model = SatelliteModel::stylised();
    let input = StressTestInput::stylised().unwrap();
    let before = run_stress_test(&input, &model).unwrap().result;

    // Double Standard Chartered's consumer book; HSBC and Lloyds rows must
    // not move.
    let mut perturbed = input.clone();
    for bank in &mut perturbed.banks {
        if bank.name == "Standard Chartered" {
            let exposure = bank
                .exposures
                .get_mut(&PortfolioBucket::ConsumerUnsecured)
                .unwrap();
            *exposure *= dec!(2);
        }
    }
    let after = run_stress_test(&perturbed, &model).unwrap().result;

    for bank in ["HSBC", "Lloyds Banking Group"] {
        let rows = |panel: &[capital_stress_core::engine::CapitalPanelRow]| -> Vec<String> {
            panel
                .iter()
                .filter(|r| r.bank == bank)
                .map(|r| serde_json::to_string(r).unwrap())
                .collect()
        };
        assert_eq!(rows(&before.panel), rows(&after.panel));
    }
}

#[test]
fn test_higher_severity_produces_weakly_worse_adverse_troughs() {
    let model = SatelliteModel::stylised();
    let base_input = StressTestInput::stylised().unwrap();

    let mut severe_input = base_input.clone();
    severe_input.shocks.severity = dec!(2.0);

    let base = run_stress_test(&base_input, &model).unwrap().result;
    let severe = run_stress_test(&severe_input, &model).unwrap().result;

    let adverse_trough = |result: &capital_stress_core::engine::StressTestOutput, bank: &str| {
        result
            .summary
            .iter()
            .find(|r| r.scenario == ScenarioKind::Adverse && r.bank == bank)
            .unwrap()
            .trough_ratio
    };

    for bank in ["HSBC", "Lloyds Banking Group", "Standard Chartered"] {
        assert!(adverse_trough(&severe, bank) <= adverse_trough(&base, bank));
    }
}

// ===========================================================================
// Insolvency is output, not an error
// ===========================================================================

#[test]
fn test_insolvent_bank_reports_negative_trough() {
    // A thin capital base against a heavy consumer book under a severe
    // shock: CET1 goes negative and the run still succeeds.
    let mut exposures = BTreeMap::new();
    exposures.insert(PortfolioBucket::ConsumerUnsecured, dec!(500));
    let bank = Bank::new("Thin Bank", dec!(5), dec!(250), exposures).unwrap();

    let mut input = StressTestInput::stylised().unwrap();
    input.banks = vec![bank];
    input.shocks.severity = dec!(3.0);

    let coefficients = BucketCoefficients {
        intercept: dec!(0.005),
        slopes: DriverVector {
            gdp_growth: dec!(-0.05),
            unemployment_rate: dec!(0.10),
            ..Default::default()
        },
        overlay: None,
    };
    let mut map = BTreeMap::new();
    map.insert(PortfolioBucket::ConsumerUnsecured, coefficients);
    let model = SatelliteModel::new(map);

    let output = run_stress_test(&input, &model).unwrap().result;
    let adverse = output
        .summary
        .iter()
        .find(|r| r.scenario == ScenarioKind::Adverse)
        .unwrap();

    assert!(adverse.trough_cet1 < Decimal::ZERO);
    assert!(adverse.trough_ratio < Decimal::ZERO);
    assert!(adverse.breach);
    assert_eq!(
        adverse.shortfall,
        (input.hurdle - adverse.trough_ratio) * dec!(250)
    );
}
