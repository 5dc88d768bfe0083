use std::path::PathBuf;

use num_bigint::BigInt;
use shamir_math::error::{InterpolationError, RadixError};
use thiserror::Error;

/// Result type specialized for secret recovery.
pub type Result<T> = std::result::Result<T, RecoveryError>;

/// Errors that can arise while decoding shares or reconstructing the secret.
///
/// Every variant is terminal: the computation is deterministic over a fixed
/// input, so nothing is retried.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RecoveryError {
    #[error("failed to read {}: {source}", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed share document: {0}")]
    MalformedDocument(String),
    #[error("malformed control record 'keys': {0}")]
    MalformedControlRecord(String),
    #[error("malformed share record '{key}': {reason}")]
    MalformedShareRecord { key: String, reason: String },
    #[error("invalid x value (key): {key:?}")]
    InvalidCoordinate {
        key: String,
        #[source]
        source: RadixError,
    },
    #[error("invalid base for x={x}: {base:?}")]
    InvalidBase {
        x: BigInt,
        base: String,
        #[source]
        source: RadixError,
    },
    #[error("failed to decode y value {value:?} for x={x}: {source}")]
    InvalidEncodedValue {
        x: BigInt,
        value: String,
        #[source]
        source: RadixError,
    },
    #[error("not enough points: found {found}, need {required}")]
    InsufficientPoints { found: usize, required: usize },
    #[error("cannot interpolate with zero points")]
    EmptyInput,
    #[error(
        "interpolation failed: duplicate x-value {x} leads to division by zero"
    )]
    DuplicateCoordinate { x: BigInt },
    #[error(
        "interpolated value {value} is not an integer; the shares do not lie on an integer polynomial"
    )]
    NonIntegralSecret { value: String },
    #[error("internal interpolation error: {0}")]
    Interpolation(InterpolationError),
}

impl From<InterpolationError> for RecoveryError {
    fn from(value: InterpolationError) -> Self {
        match value {
            InterpolationError::EmptyInput => RecoveryError::EmptyInput,
            InterpolationError::DuplicateCoordinate { x } => {
                RecoveryError::DuplicateCoordinate { x }
            }
            other => RecoveryError::Interpolation(other),
        }
    }
}
