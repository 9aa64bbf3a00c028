mod error;
mod mat;
mod scalar;

pub use error::*;
pub use mat::*;
pub use num_traits::{One, Zero};
pub use scalar::*;
