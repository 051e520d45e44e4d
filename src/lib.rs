//! Descriptive statistics and simple linear regression for paired samples.
//!
//! The engine is a set of pure functions: [`mean`](descriptive::mean),
//! [`variance`](descriptive::variance), [`std_dev`](descriptive::std_dev),
//! [`check_quality`](crate::core::check_quality), [`fit`](regression::fit) and
//! [`r_squared`](regression::r_squared). Every failure is an explicit
//! [`StatsError`](crate::core::StatsError); undefined results such as the mean of an
//! empty slice or the slope of a vertical line are never coerced to a number.
//!
//! Around the engine, [`analysis`] runs a batch of named datasets with
//! per-dataset failure isolation and [`report`] writes the text report.
//!
//! # Example
//!
//! ```rust,ignore
//! use anscombe::prelude::*;
//!
//! let x = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = [2.0, 4.0, 6.0, 8.0, 10.0];
//!
//! check_quality(&x, &y)?;
//! let line = fit(&x, &y)?;
//! let r2 = r_squared(&x, &y, line.intercept, line.slope)?;
//! println!("y = {:.2}x + {:.2}, R² = {:.2}", line.slope, line.intercept, r2);
//! ```

pub mod analysis;
pub mod core;
pub mod descriptive;
pub mod regression;
pub mod report;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::analysis::{
        analyze, analyze_all, anscombe_quartet, Dataset, DatasetAnalysis, DatasetOutcome,
    };
    pub use crate::core::{
        check_quality, AnalysisOptions, AnalysisOptionsBuilder, ErrorKind, QualityReport,
        RegressionResult, Sample, Series, StatsError, StatsSummary, VarianceConvention,
    };
    pub use crate::descriptive::{
        correlation, covariance, mean, std_dev, std_dev_with, summarize, summarize_with,
        variance, variance_with,
    };
    pub use crate::regression::{fit, r_squared};
    pub use crate::report::ReportWriter;
}

pub use crate::core::{
    check_quality, AnalysisOptions, ErrorKind, QualityReport, RegressionResult, Sample,
    StatsError, StatsSummary, VarianceConvention,
};
pub use crate::descriptive::{mean, std_dev, variance};
pub use crate::regression::{fit, r_squared};
