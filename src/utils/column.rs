//! Column vector helpers.

use faer::Col;

/// Copy a slice into a column vector.
pub fn to_column(values: &[f64]) -> Col<f64> {
    Col::from_fn(values.len(), |i| values[i])
}

/// Subtract a known mean from every element.
pub fn center_about(v: &Col<f64>, mean: f64) -> Col<f64> {
    Col::from_fn(v.nrows(), |i| v[i] - mean)
}

/// Center a vector by subtracting its mean.
///
/// The caller guarantees `v` is non-empty.
pub fn center_vector(v: &Col<f64>) -> (Col<f64>, f64) {
    let n = v.nrows();
    let mean: f64 = v.iter().sum::<f64>() / n as f64;

    (center_about(v, mean), mean)
}

/// Sum of squared elements.
pub fn sum_of_squares(v: &Col<f64>) -> f64 {
    v.iter().map(|&vi| vi * vi).sum()
}

/// Sum of elementwise products of two equal-length vectors.
pub fn cross_product(a: &Col<f64>, b: &Col<f64>) -> f64 {
    a.iter().zip(b.iter()).map(|(&ai, &bi)| ai * bi).sum()
}

/// Whether every value is exactly equal to the first.
///
/// Identical values can still leave a centered sum of squares as rounding
/// noise (e.g. `[0.1; 3]`), so callers check this next to `ss == 0.0`.
pub fn is_constant(values: &[f64]) -> bool {
    let Some(&first) = values.first() else {
        return true;
    };
    values.iter().all(|&v| v == first)
}
