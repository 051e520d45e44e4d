//! Mean, variance and standard deviation.

use crate::core::{StatsError, StatsSummary, VarianceConvention};

/// Arithmetic mean.
///
/// # Errors
/// `StatsError::EmptyInput` if `xs` is empty.
pub fn mean(xs: &[f64]) -> Result<f64, StatsError> {
    if xs.is_empty() {
        return Err(StatsError::EmptyInput { field: "values" });
    }
    Ok(xs.iter().sum::<f64>() / xs.len() as f64)
}

/// Population variance (divides by `n`).
pub fn variance(xs: &[f64]) -> Result<f64, StatsError> {
    variance_with(xs, VarianceConvention::Population)
}

/// Population standard deviation, the square root of [`variance`].
pub fn std_dev(xs: &[f64]) -> Result<f64, StatsError> {
    std_dev_with(xs, VarianceConvention::Population)
}

/// Variance under an explicit convention.
///
/// A single value has no spread and yields `0.0` under either convention.
pub fn variance_with(xs: &[f64], convention: VarianceConvention) -> Result<f64, StatsError> {
    let m = mean(xs)?;
    let Some(divisor) = convention.divisor(xs.len()) else {
        return Ok(0.0);
    };

    let ss: f64 = xs.iter().map(|&v| (v - m).powi(2)).sum();
    Ok(ss / divisor)
}

/// Standard deviation under an explicit convention.
pub fn std_dev_with(xs: &[f64], convention: VarianceConvention) -> Result<f64, StatsError> {
    variance_with(xs, convention).map(f64::sqrt)
}

/// Population mean, variance and standard deviation of `xs`.
pub fn summarize(xs: &[f64]) -> Result<StatsSummary, StatsError> {
    summarize_with(xs, VarianceConvention::Population)
}

/// Mean, variance and standard deviation sharing one convention.
pub fn summarize_with(
    xs: &[f64],
    convention: VarianceConvention,
) -> Result<StatsSummary, StatsError> {
    let mean = mean(xs)?;
    let variance = variance_with(xs, convention)?;
    Ok(StatsSummary {
        mean,
        variance,
        std_dev: variance.sqrt(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    const XS: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];

    #[test]
    fn test_mean() {
        assert_eq!(mean(&XS).unwrap(), 3.0);
        assert_eq!(mean(&[-4.5]).unwrap(), -4.5);
    }

    #[test]
    fn test_population_variance() {
        assert!((variance(&XS).unwrap() - 2.0).abs() < 1e-12);
        assert!((std_dev(&XS).unwrap() - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_sample_variance() {
        let v = variance_with(&XS, VarianceConvention::Sample).unwrap();
        assert!((v - 2.5).abs() < 1e-12);
        let s = std_dev_with(&XS, VarianceConvention::Sample).unwrap();
        assert!((s - 2.5_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_single_value_has_zero_spread() {
        assert_eq!(variance(&[7.0]).unwrap(), 0.0);
        assert_eq!(
            variance_with(&[7.0], VarianceConvention::Sample).unwrap(),
            0.0
        );
        assert_eq!(std_dev(&[7.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_empty() {
        assert_eq!(mean(&[]).unwrap_err().kind(), ErrorKind::EmptyInput);
        assert_eq!(variance(&[]).unwrap_err().kind(), ErrorKind::EmptyInput);
        assert_eq!(std_dev(&[]).unwrap_err().kind(), ErrorKind::EmptyInput);
        assert_eq!(summarize(&[]).unwrap_err().kind(), ErrorKind::EmptyInput);
    }

    #[test]
    fn test_summary_is_consistent() {
        let summary = summarize_with(&XS, VarianceConvention::Sample).unwrap();
        assert_eq!(summary.mean, 3.0);
        assert!((summary.variance - 2.5).abs() < 1e-12);
        assert_eq!(summary.std_dev, summary.variance.sqrt());
    }
}
