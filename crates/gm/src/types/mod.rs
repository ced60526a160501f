mod array;
mod elementwise;
mod matrix;
mod range;
mod tolerance;
mod vector;

pub use elementwise::*;
pub use matrix::*;
pub use range::*;
pub use tolerance::*;
pub use vector::*;

/// Name of a value type, as displayed in its string representation.
pub trait ClassName {
    /// The class name, `Vec3f` for a three element `f32` vector.
    fn class_name() -> String;
}

impl ClassName for bool {
    fn class_name() -> String {
        "Bool".to_string()
    }
}
