//! Combination errors

use thiserror::Error;

/// Combination result type
pub type Result<T> = std::result::Result<T, CombinationError>;

/// Errors raised while building, parsing or indexing combinations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CombinationError {
    #[error("expected {expected} values for the axis list, got {actual}")]
    ValueCountMismatch { expected: usize, actual: usize },

    #[error("cannot parse {input}")]
    Parse { input: String },

    #[error("no value for axis {axis}")]
    MissingAxisValue { axis: String },

    #[error("value {value:?} is not defined on axis {axis}")]
    UnknownAxisValue { axis: String, value: String },

    #[error("index {index} is outside the {count} combinations of the axis list")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("combination index does not fit in usize")]
    IndexOverflow,

    #[error("invalid format config: {0}")]
    InvalidConfig(String),
}

impl CombinationError {
    pub(crate) fn parse(input: &str) -> Self {
        Self::Parse {
            input: input.to_string(),
        }
    }

    pub(crate) fn missing(axis: &str) -> Self {
        Self::MissingAxisValue {
            axis: axis.to_string(),
        }
    }
}
