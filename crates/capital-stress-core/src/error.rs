use thiserror::Error;

#[derive(Debug, Error)]
pub enum StressTestError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Anchor observation missing macro driver '{driver}'")]
    MissingDriver { driver: String },

    #[error("No satellite coefficients configured for bucket '{bucket}'")]
    UnknownBucket { bucket: String },

    #[error("Bank '{bank}' has exposure to bucket '{bucket}' but no loss-rate projection for it")]
    MissingBucketLoss { bank: String, bucket: String },

    #[error("Path length {actual} does not match the configured horizon of {expected} quarters")]
    HorizonMismatch { expected: usize, actual: usize },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for StressTestError {
    fn from(e: serde_json::Error) -> Self {
        StressTestError::SerializationError(e.to_string())
    }
}
