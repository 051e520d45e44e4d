//! Analysis options and configuration.

use thiserror::Error;

/// Divisor convention for variance and standard deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VarianceConvention {
    /// Divide the sum of squared deviations by `n` (default).
    #[default]
    Population,
    /// Divide by `n - 1` (Bessel's correction).
    Sample,
}

impl VarianceConvention {
    /// Divisor applied to the sum of squared deviations of `n` values.
    ///
    /// Returns `None` when the divisor would be zero (`n == 0`, or `n == 1`
    /// under `Sample`).
    pub fn divisor(self, n: usize) -> Option<f64> {
        let d = match self {
            VarianceConvention::Population => n,
            VarianceConvention::Sample => n.checked_sub(1)?,
        };
        (d > 0).then_some(d as f64)
    }
}

/// Largest number of decimal places accepted for report output.
pub const MAX_DECIMALS: usize = 15;

/// Configuration options for dataset analysis and reporting.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Variance convention used for every summary (default: Population).
    pub variance_convention: VarianceConvention,
    /// Decimal places printed in the text report (default: 2).
    pub decimals: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            variance_convention: VarianceConvention::Population,
            decimals: 2,
        }
    }
}

/// Errors that can occur when validating analysis options.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("decimals must be at most 15, got {0}")]
    InvalidDecimals(usize),
}

impl AnalysisOptions {
    /// Create a new builder for analysis options.
    pub fn builder() -> AnalysisOptionsBuilder {
        AnalysisOptionsBuilder::default()
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.decimals > MAX_DECIMALS {
            return Err(OptionsError::InvalidDecimals(self.decimals));
        }
        Ok(())
    }
}

/// Builder for `AnalysisOptions`.
#[derive(Debug, Clone, Default)]
pub struct AnalysisOptionsBuilder {
    options: AnalysisOptions,
}

impl AnalysisOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the variance convention.
    pub fn variance_convention(mut self, convention: VarianceConvention) -> Self {
        self.options.variance_convention = convention;
        self
    }

    /// Set the number of decimal places in the report.
    pub fn decimals(mut self, decimals: usize) -> Self {
        self.options.decimals = decimals;
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<AnalysisOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build the options without validation.
    pub fn build_unchecked(self) -> AnalysisOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = AnalysisOptions::default();
        assert_eq!(opts.variance_convention, VarianceConvention::Population);
        assert_eq!(opts.decimals, 2);
    }

    #[test]
    fn test_builder() {
        let opts = AnalysisOptions::builder()
            .variance_convention(VarianceConvention::Sample)
            .decimals(4)
            .build()
            .unwrap();

        assert_eq!(opts.variance_convention, VarianceConvention::Sample);
        assert_eq!(opts.decimals, 4);
    }

    #[test]
    fn test_validation_invalid_decimals() {
        let result = AnalysisOptions::builder().decimals(MAX_DECIMALS + 1).build();
        assert!(matches!(result, Err(OptionsError::InvalidDecimals(16))));
    }

    #[test]
    fn test_builder_unchecked_skips_validation() {
        let opts = AnalysisOptionsBuilder::new().decimals(99).build_unchecked();
        assert_eq!(opts.decimals, 99);
        assert!(opts.validate().is_err());
    }

    #[test]
    fn test_divisor() {
        assert_eq!(VarianceConvention::Population.divisor(5), Some(5.0));
        assert_eq!(VarianceConvention::Sample.divisor(5), Some(4.0));
    }

    #[test]
    fn test_divisor_without_spread() {
        assert_eq!(VarianceConvention::Population.divisor(0), None);
        assert_eq!(VarianceConvention::Sample.divisor(0), None);
        assert_eq!(VarianceConvention::Sample.divisor(1), None);
        assert_eq!(VarianceConvention::Population.divisor(1), Some(1.0));
    }
}
