//! Numeric helpers shared by the statistics and regression modules.

mod column;

pub use column::{
    center_about, center_vector, cross_product, is_constant, sum_of_squares, to_column,
};
