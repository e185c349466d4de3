//! Error types for configuration and the detection boundary.

use thiserror::Error;

/// Errors raised at the edges of the tracker.
///
/// Association itself never fails; these only cover invalid configuration
/// and malformed input from the image pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackerError {
    #[error("invalid config value for `{field}`: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: String,
    },

    #[error("candidate ({x}, {y}) lies outside the {width}x{height} frame")]
    CandidateOutOfFrame {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
}
