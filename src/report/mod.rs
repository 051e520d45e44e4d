//! Plain-text report of batch analysis outcomes.
//!
//! One block per dataset, separated by a blank line:
//!
//! ```text
//! Dataset I
//! Observations: 11
//! Slope: 0.50
//! Intercept: 3.00
//! R^2: 0.67
//! Correlation: 0.82
//! Mean X: 9.00
//! Variance X: 10.00
//! Standard Deviation X: 3.16
//! Mean Y: 7.50
//! Variance Y: 3.75
//! Standard Deviation Y: 1.94
//! ```
//!
//! A dataset that failed gets `Error: <message>` in place of its statistics.

use crate::analysis::{DatasetAnalysis, DatasetOutcome};
use crate::core::{AnalysisOptions, StatsError, StatsSummary};
use std::io::Write;

/// Writes outcomes to a single sink, one block at a time.
#[derive(Debug)]
pub struct ReportWriter<W: Write> {
    writer: W,
    decimals: usize,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W, options: &AnalysisOptions) -> Self {
        Self {
            writer,
            decimals: options.decimals,
        }
    }

    /// Write the block for one outcome.
    pub fn write_outcome(&mut self, outcome: &DatasetOutcome) -> Result<(), StatsError> {
        writeln!(self.writer, "Dataset {}", outcome.name)?;
        match &outcome.result {
            Ok(analysis) => self.write_analysis(analysis)?,
            Err(err) => writeln!(self.writer, "Error: {err}")?,
        }
        writeln!(self.writer)?;
        Ok(())
    }

    /// Write every outcome in order.
    pub fn write_all(&mut self, outcomes: &[DatasetOutcome]) -> Result<(), StatsError> {
        for outcome in outcomes {
            self.write_outcome(outcome)?;
        }
        Ok(())
    }

    /// Flush and hand back the sink.
    pub fn finish(mut self) -> Result<W, StatsError> {
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write_analysis(&mut self, analysis: &DatasetAnalysis) -> Result<(), StatsError> {
        let d = self.decimals;
        writeln!(self.writer, "Observations: {}", analysis.n_observations)?;
        writeln!(self.writer, "Slope: {:.*}", d, analysis.regression.slope)?;
        writeln!(self.writer, "Intercept: {:.*}", d, analysis.regression.intercept)?;
        writeln!(self.writer, "R^2: {:.*}", d, analysis.r_squared)?;
        writeln!(self.writer, "Correlation: {:.*}", d, analysis.correlation)?;
        self.write_summary("X", &analysis.x_summary)?;
        self.write_summary("Y", &analysis.y_summary)
    }

    fn write_summary(&mut self, label: &str, summary: &StatsSummary) -> Result<(), StatsError> {
        let d = self.decimals;
        writeln!(self.writer, "Mean {}: {:.*}", label, d, summary.mean)?;
        writeln!(self.writer, "Variance {}: {:.*}", label, d, summary.variance)?;
        writeln!(
            self.writer,
            "Standard Deviation {}: {:.*}",
            label, d, summary.std_dev
        )?;
        Ok(())
    }
}
