//! Error taxonomy for statistics and regression operations.

use super::options::OptionsError;
use std::fmt;
use thiserror::Error;

/// Which column of a paired sample an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Series {
    X,
    Y,
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Series::X => f.write_str("x"),
            Series::Y => f.write_str("y"),
        }
    }
}

/// Errors that can occur while validating data or computing statistics.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("empty input: {field} must not be empty")]
    EmptyInput { field: &'static str },

    #[error("length mismatch: x has {x_len} elements but y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("not a number: {series}[{index}] is NaN")]
    NotANumber { series: Series, index: usize },

    #[error("degenerate input: {reason}")]
    DegenerateInput { reason: &'static str },

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] OptionsError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Fieldless discriminant of [`StatsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyInput,
    LengthMismatch,
    NotANumber,
    DegenerateInput,
    InvalidOptions,
    Io,
}

impl StatsError {
    /// The kind of failure, without its payload.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StatsError::EmptyInput { .. } => ErrorKind::EmptyInput,
            StatsError::LengthMismatch { .. } => ErrorKind::LengthMismatch,
            StatsError::NotANumber { .. } => ErrorKind::NotANumber,
            StatsError::DegenerateInput { .. } => ErrorKind::DegenerateInput,
            StatsError::InvalidOptions(_) => ErrorKind::InvalidOptions,
            StatsError::Io(_) => ErrorKind::Io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = StatsError::LengthMismatch { x_len: 3, y_len: 2 };
        assert_eq!(
            err.to_string(),
            "length mismatch: x has 3 elements but y has 2"
        );

        let err = StatsError::NotANumber {
            series: Series::Y,
            index: 4,
        };
        assert_eq!(err.to_string(), "not a number: y[4] is NaN");

        let err = StatsError::EmptyInput { field: "x" };
        assert_eq!(err.to_string(), "empty input: x must not be empty");
    }

    #[test]
    fn test_kind() {
        let err = StatsError::DegenerateInput {
            reason: "all x values are identical",
        };
        assert_eq!(err.kind(), ErrorKind::DegenerateInput);

        let err: StatsError = OptionsError::InvalidDecimals(40).into();
        assert_eq!(err.kind(), ErrorKind::InvalidOptions);

        let err: StatsError = std::io::Error::other("disk full").into();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
