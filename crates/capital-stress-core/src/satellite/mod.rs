pub mod model;

pub use model::{BucketCoefficients, LossRatePath, SatelliteModel};
