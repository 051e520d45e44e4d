//! Descriptive statistics over a single sequence or a pair of sequences.
//!
//! All functions are pure and return `StatsError::EmptyInput` rather than a
//! default value when the input is empty. Variance defaults to the
//! population convention (divide by `n`); the `*_with` variants take an
//! explicit [`VarianceConvention`](crate::core::VarianceConvention) that is
//! applied to variance and standard deviation alike.

mod correlation;
mod moments;

pub use correlation::{correlation, covariance};
pub use moments::{
    mean, std_dev, std_dev_with, summarize, summarize_with, variance, variance_with,
};
