use thiserror::Error;

/// Errors that can occur while buffering or exporting a recording.
///
/// All failures are synchronous results of the offending operation; nothing
/// is retried internally and an export either fully succeeds or fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecorderError {
    #[error("recorder is not initialized")]
    NotInitialized,

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("channel chunk shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("unsupported channel count: {0}")]
    UnsupportedChannelCount(usize),

    #[error("allocation failure: {0}")]
    AllocationFailure(String),
}
