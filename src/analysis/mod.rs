//! Batch analysis of named datasets.
//!
//! Each dataset is validated and analysed on its own copy of the data. A
//! failure is recorded in that dataset's [`DatasetOutcome`] and logged, and
//! the remaining datasets are still analysed.

mod batch;
mod dataset;

pub use batch::{analyze, analyze_all, DatasetAnalysis, DatasetOutcome};
pub use dataset::{anscombe_quartet, Dataset};
