//! Per-dataset analysis with failure isolation.

use super::dataset::Dataset;
use crate::core::{AnalysisOptions, RegressionResult, Sample, StatsError, StatsSummary};
use tracing::{debug, warn};

/// Everything computed for one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetAnalysis {
    pub name: String,
    pub n_observations: usize,
    pub regression: RegressionResult,
    pub r_squared: f64,
    /// Pearson correlation between x and y.
    pub correlation: f64,
    pub x_summary: StatsSummary,
    pub y_summary: StatsSummary,
}

/// Result of analysing one dataset in a batch.
#[derive(Debug)]
pub struct DatasetOutcome {
    pub name: String,
    pub result: Result<DatasetAnalysis, StatsError>,
}

impl DatasetOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Analyse a single dataset.
///
/// The quality check runs first; nothing else is computed for a dataset
/// that fails it. R² is evaluated with the fitted coefficients.
pub fn analyze(dataset: &Dataset, options: &AnalysisOptions) -> Result<DatasetAnalysis, StatsError> {
    let sample = Sample::new(&dataset.x, &dataset.y)?;
    let convention = options.variance_convention;

    let x_summary = sample.summarize_x(convention)?;
    let y_summary = sample.summarize_y(convention)?;
    let regression = sample.fit()?;
    let r_squared = sample.r_squared(&regression)?;
    let correlation = sample.correlation()?;

    Ok(DatasetAnalysis {
        name: dataset.name.clone(),
        n_observations: sample.len(),
        regression,
        r_squared,
        correlation,
        x_summary,
        y_summary,
    })
}

/// Analyse every dataset, in order, without letting one failure stop the rest.
///
/// Failed datasets are logged and reported in their outcome.
pub fn analyze_all(datasets: &[Dataset], options: &AnalysisOptions) -> Vec<DatasetOutcome> {
    datasets
        .iter()
        .map(|dataset| {
            let result = analyze(dataset, options);
            match &result {
                Ok(analysis) => debug!(
                    dataset = %dataset.name,
                    slope = analysis.regression.slope,
                    intercept = analysis.regression.intercept,
                    r_squared = analysis.r_squared,
                    "dataset analysed"
                ),
                Err(err) => warn!(
                    dataset = %dataset.name,
                    kind = ?err.kind(),
                    "skipping dataset: {err}"
                ),
            }
            DatasetOutcome {
                name: dataset.name.clone(),
                result,
            }
        })
        .collect()
}
