//! Simple linear regression and goodness of fit.
//!
//! [`fit`] computes the least-squares line for one predictor in closed form.
//! [`r_squared`] scores any line against a sample; it takes the coefficients
//! as parameters, so it can check lines that did not come from [`fit`].

mod goodness;
mod simple;

pub use goodness::r_squared;
pub use simple::fit;
