use core::fmt::Debug;
use num_traits::Float;

/// Trait for real floating-point types accepted by the evaluators.
///
/// Blanket-implemented for all types satisfying the bounds, which in
/// practice means `f32` and `f64`. Complex arguments are not supported.
pub trait FloatScalar: Copy + PartialEq + Debug + Float {}

impl<T: Copy + PartialEq + Debug + Float> FloatScalar for T {}
