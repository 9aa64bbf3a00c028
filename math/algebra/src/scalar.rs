use std::fmt::Debug;

use num_traits::{One, Zero};

/// The element types a matrix can hold. Blanket-implemented, so any numeric
/// type with a zero and a one qualifies.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One {}

impl<T> Scalar for T where T: Copy + PartialEq + Debug + Zero + One {}
