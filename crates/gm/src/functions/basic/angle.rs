use crate::FloatElement;

/// Converts an angle from radians to degrees.
pub fn degrees<E: FloatElement>(angle: E) -> E {
    angle.to_degrees()
}

/// Converts an angle from degrees to radians.
pub fn radians<E: FloatElement>(angle: E) -> E {
    angle.to_radians()
}
