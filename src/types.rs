//! Types and traits for real numbers
use num_traits::Float;
use std::fmt::Debug;

/// Real type, used by the blending scheme for arithmetic operations
///
/// `From<f64>` is required to lift the scheme constants.
pub trait Real: Float + From<f64> + Debug + Send + Sync {}

impl<T> Real for T where T: Float + From<f64> + Debug + Send + Sync {}
