//! Data quality checks run before any statistic is computed.
//!
//! Checks are applied in a fixed order and the first failure wins:
//! - `EmptyInput`: either sequence has no elements
//! - `LengthMismatch`: the sequences differ in length
//! - `NotANumber`: an element of `x`, then of `y`, is NaN
//!
//! # Example
//!
//! ```
//! use anscombe::core::{check_quality, ErrorKind};
//!
//! let report = check_quality(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
//! assert_eq!(report.n_observations, 3);
//!
//! let err = check_quality(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::LengthMismatch);
//! ```

use super::error::{Series, StatsError};
use super::result::QualityReport;

/// Validate a paired sample.
///
/// # Errors
///
/// - `StatsError::EmptyInput` if `x` or `y` is empty
/// - `StatsError::LengthMismatch` if `x.len() != y.len()`
/// - `StatsError::NotANumber` for the first NaN found, scanning `x` before `y`
pub fn check_quality(x: &[f64], y: &[f64]) -> Result<QualityReport, StatsError> {
    let n_observations = check_shape(x, y)?;

    for (series, values) in [(Series::X, x), (Series::Y, y)] {
        if let Some(index) = values.iter().position(|v| v.is_nan()) {
            return Err(StatsError::NotANumber { series, index });
        }
    }

    Ok(QualityReport { n_observations })
}

/// Emptiness and length checks shared by every paired operation.
pub(crate) fn check_shape(x: &[f64], y: &[f64]) -> Result<usize, StatsError> {
    if x.is_empty() {
        return Err(StatsError::EmptyInput { field: "x" });
    }
    if y.is_empty() {
        return Err(StatsError::EmptyInput { field: "y" });
    }
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    Ok(x.len())
}
