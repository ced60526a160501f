mod angle;
mod compare;
mod interpolation;
mod quadratic;
mod random;
mod range;
mod rounding;

pub use angle::*;
pub use compare::*;
pub use interpolation::*;
pub use quadratic::*;
pub use random::*;
pub use range::*;
pub use rounding::*;
