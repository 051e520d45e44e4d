//! Result structures for regression and descriptive statistics.

use super::error::StatsError;
use super::quality::check_shape;

/// Best-fit line `y = slope * x + intercept` from a simple linear regression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionResult {
    /// Change in y per unit change in x.
    pub slope: f64,
    /// Value of the line at x = 0.
    pub intercept: f64,
}

impl RegressionResult {
    /// Create a result from explicit coefficients.
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Evaluate the fitted line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Residuals `y_i - predict(x_i)` over a paired sample.
    pub fn residuals(&self, x: &[f64], y: &[f64]) -> Result<Vec<f64>, StatsError> {
        check_shape(x, y)?;
        Ok(x.iter()
            .zip(y)
            .map(|(&xi, &yi)| yi - self.predict(xi))
            .collect())
    }
}

/// Mean, variance and standard deviation of one sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsSummary {
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
}

/// Successful outcome of a data quality check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityReport {
    /// Number of validated `(x, y)` pairs.
    pub n_observations: usize,
}
