//! Core types for statistics and regression.

mod error;
mod options;
mod quality;
mod result;
mod sample;

pub use error::{ErrorKind, Series, StatsError};
pub use options::{
    AnalysisOptions, AnalysisOptionsBuilder, OptionsError, VarianceConvention, MAX_DECIMALS,
};
pub use quality::check_quality;
pub(crate) use quality::check_shape;
pub use result::{QualityReport, RegressionResult, StatsSummary};
pub use sample::Sample;
