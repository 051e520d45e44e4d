//! Covariance and Pearson correlation of paired data.

use crate::core::{check_shape, StatsError};
use crate::utils::{center_vector, cross_product, is_constant, sum_of_squares, to_column};

/// Population covariance of `x` and `y`.
pub fn covariance(x: &[f64], y: &[f64]) -> Result<f64, StatsError> {
    let n = check_shape(x, y)?;
    let (x_c, _) = center_vector(&to_column(x));
    let (y_c, _) = center_vector(&to_column(y));

    Ok(cross_product(&x_c, &y_c) / n as f64)
}

/// Pearson correlation coefficient, in `[-1, 1]`.
///
/// # Errors
/// - `StatsError::EmptyInput` / `StatsError::LengthMismatch` for bad shapes
/// - `StatsError::DegenerateInput` when either column has no spread
pub fn correlation(x: &[f64], y: &[f64]) -> Result<f64, StatsError> {
    check_shape(x, y)?;
    if is_constant(x) {
        return Err(StatsError::DegenerateInput {
            reason: "all x values are identical",
        });
    }
    if is_constant(y) {
        return Err(StatsError::DegenerateInput {
            reason: "all y values are identical",
        });
    }

    let (x_c, _) = center_vector(&to_column(x));
    let (y_c, _) = center_vector(&to_column(y));
    let sxy = cross_product(&x_c, &y_c);
    let sxx = sum_of_squares(&x_c);
    let syy = sum_of_squares(&y_c);

    Ok((sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0))
}
