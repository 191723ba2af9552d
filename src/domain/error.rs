// Domain error types
use thiserror::Error;

pub type GeneratorResult<T> = Result<T, GeneratorError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneratorError {
    /// Rejected before any generation work is done.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unknown industry: {0}")]
    UnknownIndustry(String),

    #[error("unknown leak type '{leak_type}' for industry '{industry}'")]
    UnknownLeakType { industry: String, leak_type: String },

    #[error("sensor index {index} out of range for leak type '{leak_type}' ({count} sensors)")]
    SensorIndexOutOfRange {
        leak_type: String,
        index: usize,
        count: usize,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
