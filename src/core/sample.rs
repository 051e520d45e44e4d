//! Validated paired sample.

use super::error::StatsError;
use super::options::VarianceConvention;
use super::quality::check_quality;
use super::result::{RegressionResult, StatsSummary};
use crate::descriptive::{correlation, summarize_with};
use crate::regression::{fit, r_squared};

/// Paired observations `(x_i, y_i)` that passed [`check_quality`].
///
/// The sample owns a copy of its data, so two samples never share state.
/// Every constructed sample is non-empty, has equal-length columns and
/// contains no NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Sample {
    /// Validate and copy two columns into a sample.
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self, StatsError> {
        check_quality(x, y)?;
        Ok(Self {
            x: x.to_vec(),
            y: y.to_vec(),
        })
    }

    /// Build a sample from `(x, y)` pairs.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self, StatsError> {
        let (x, y): (Vec<f64>, Vec<f64>) = pairs.iter().copied().unzip();
        Self::new(&x, &y)
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Pairs with [`len`](Self::len); never true for a constructed sample.
    pub fn is_empty(&self) -> bool {
        debug_assert!(!self.x.is_empty(), "sample constructed without observations");
        false
    }

    /// The x column.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// The y column.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Summary statistics of the x column.
    pub fn summarize_x(&self, convention: VarianceConvention) -> Result<StatsSummary, StatsError> {
        summarize_with(&self.x, convention)
    }

    /// Summary statistics of the y column.
    pub fn summarize_y(&self, convention: VarianceConvention) -> Result<StatsSummary, StatsError> {
        summarize_with(&self.y, convention)
    }

    /// Least-squares line through the sample.
    pub fn fit(&self) -> Result<RegressionResult, StatsError> {
        fit(&self.x, &self.y)
    }

    /// R² of the given line over this sample.
    pub fn r_squared(&self, line: &RegressionResult) -> Result<f64, StatsError> {
        r_squared(&self.x, &self.y, line.intercept, line.slope)
    }

    /// Pearson correlation between the columns.
    pub fn correlation(&self) -> Result<f64, StatsError> {
        correlation(&self.x, &self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    #[test]
    fn test_new_validates() {
        assert_eq!(
            Sample::new(&[1.0, 2.0], &[1.0]).unwrap_err().kind(),
            ErrorKind::LengthMismatch
        );
        assert_eq!(
            Sample::new(&[], &[]).unwrap_err().kind(),
            ErrorKind::EmptyInput
        );
        assert_eq!(
            Sample::new(&[1.0], &[f64::NAN]).unwrap_err().kind(),
            ErrorKind::NotANumber
        );
    }

    #[test]
    fn test_from_pairs() {
        let sample = Sample::from_pairs(&[(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)]).unwrap();
        assert_eq!(sample.len(), 3);
        assert!(!sample.is_empty());
        assert_eq!(sample.x(), &[1.0, 2.0, 3.0]);
        assert_eq!(sample.y(), &[2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_sample_owns_copy() {
        let mut x = vec![1.0, 2.0, 3.0];
        let sample = Sample::new(&x, &[1.0, 2.0, 3.0]).unwrap();
        x.clear();
        assert!(!sample.is_empty());
        x.push(100.0);
        assert_eq!(sample.x()[0], 1.0);
    }

    #[test]
    fn test_fit_and_score() {
        let sample = Sample::new(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.0, 6.0, 8.0, 10.0]).unwrap();
        let line = sample.fit().unwrap();
        assert!((line.slope - 2.0).abs() < 1e-12);
        assert!(line.intercept.abs() < 1e-12);
        assert!((sample.r_squared(&line).unwrap() - 1.0).abs() < 1e-12);
        assert!((sample.correlation().unwrap() - 1.0).abs() < 1e-12);
    }
}
