//! Closed-form ordinary least squares for one predictor.

use crate::core::{check_shape, RegressionResult, StatsError};
use crate::descriptive::mean;
use crate::utils::{center_about, cross_product, is_constant, sum_of_squares, to_column};

/// Fit `y = slope * x + intercept` by ordinary least squares.
///
/// slope = Σ(x_i − x̄)(y_i − ȳ) / Σ(x_i − x̄)², intercept = ȳ − slope·x̄
///
/// # Example
///
/// ```rust,ignore
/// use anscombe::regression::fit;
///
/// let line = fit(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.0, 6.0, 8.0, 10.0])?;
/// println!("y = {}x + {}", line.slope, line.intercept);
/// ```
///
/// # Errors
/// - `StatsError::EmptyInput` if either input is empty
/// - `StatsError::LengthMismatch` if the inputs differ in length
/// - `StatsError::DegenerateInput` if every x is identical
pub fn fit(x: &[f64], y: &[f64]) -> Result<RegressionResult, StatsError> {
    check_shape(x, y)?;

    let x_mean = mean(x)?;
    let y_mean = mean(y)?;
    let x_centered = center_about(&to_column(x), x_mean);
    let y_centered = center_about(&to_column(y), y_mean);

    // Identical x values can leave sxx as rounding noise rather than exactly zero
    let sxx = sum_of_squares(&x_centered);
    if sxx == 0.0 || is_constant(x) {
        return Err(StatsError::DegenerateInput {
            reason: "all x values are identical, slope is undefined",
        });
    }
    let sxy = cross_product(&x_centered, &y_centered);

    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;

    Ok(RegressionResult { slope, intercept })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    #[test]
    fn test_simple_fit() {
        let x: Vec<f64> = (0..5).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|&xi| 2.0 + 3.0 * xi).collect();

        let line = fit(&x, &y).expect("line should fit");

        assert!((line.slope - 3.0).abs() < 1e-10);
        assert!((line.intercept - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_two_points() {
        let line = fit(&[1.0, 3.0], &[1.0, 5.0]).unwrap();
        assert!((line.slope - 2.0).abs() < 1e-12);
        assert!((line.intercept + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_x() {
        let err = fit(&[1.0, 1.0, 1.0], &[2.0, 3.0, 4.0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DegenerateInput);

        let err = fit(&[5.0], &[2.0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DegenerateInput);

        let err = fit(&[0.1, 0.1, 0.1], &[2.0, 3.0, 4.0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DegenerateInput);
    }

    #[test]
    fn test_tiny_spread_is_not_degenerate() {
        let line = fit(&[0.0, 1e-13, 2e-13], &[0.0, 1.0, 2.0]).unwrap();
        assert!((line.slope / 1e13 - 1.0).abs() < 1e-9);
        assert!(line.intercept.abs() < 1e-9);
    }

    #[test]
    fn test_shape_errors() {
        assert_eq!(fit(&[], &[]).unwrap_err().kind(), ErrorKind::EmptyInput);
        assert_eq!(
            fit(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err().kind(),
            ErrorKind::LengthMismatch
        );
    }
}
