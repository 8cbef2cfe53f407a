pub mod balance_sheet;
pub mod config;
pub mod engine;
pub mod error;
pub mod satellite;
pub mod scenarios;
pub mod types;

pub use error::StressTestError;
pub use types::*;

/// Standard result type for all stress-test operations
pub type StressResult<T> = Result<T, StressTestError>;
