pub mod generator;
pub mod macro_path;

pub use generator::{ScenarioGenerator, ShockConfig};
pub use macro_path::{MacroObservation, MacroPath, ScenarioKind, ScenarioSet};
