mod inverse;
mod matrix;
mod projection;
mod transform;
mod vector;

pub use inverse::*;
pub use matrix::*;
pub use projection::*;
pub use transform::*;
pub use vector::*;
