pub mod aggregation;
pub mod capital;
pub mod runner;

pub use aggregation::{aggregate_losses, LossAmountPath};
pub use capital::{roll_forward, trough, CapitalPath, CapitalPoint, TroughResult};
pub use runner::{
    run_stress_test, CapitalPanelRow, StressTestInput, StressTestOutput, TroughSummaryRow,
};
