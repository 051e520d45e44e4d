//! Coefficient of determination.

use crate::core::{check_shape, RegressionResult, StatsError};
use crate::utils::{center_vector, is_constant, sum_of_squares, to_column};
use faer::Col;

/// R² of the line `intercept + slope * x` against observed `y`.
///
/// R² = 1 − Σ(y_i − ŷ_i)² / Σ(y_i − ȳ)²
///
/// The coefficients are taken as given and never refit, so lines from any
/// source can be scored. The value is not clamped: a line worse than the
/// mean of `y` scores below zero.
///
/// # Errors
/// - `StatsError::EmptyInput` if either input is empty
/// - `StatsError::LengthMismatch` if the inputs differ in length
/// - `StatsError::DegenerateInput` if every y is identical
pub fn r_squared(x: &[f64], y: &[f64], intercept: f64, slope: f64) -> Result<f64, StatsError> {
    check_shape(x, y)?;

    let y_col = to_column(y);
    let (y_centered, _) = center_vector(&y_col);
    let tss = sum_of_squares(&y_centered);
    if tss == 0.0 || is_constant(y) {
        return Err(StatsError::DegenerateInput {
            reason: "all y values are identical, R² is undefined",
        });
    }

    let line = RegressionResult::new(slope, intercept);
    let residuals = Col::from_fn(y.len(), |i| y_col[i] - line.predict(x[i]));
    let rss = sum_of_squares(&residuals);

    Ok(1.0 - rss / tss)
}
