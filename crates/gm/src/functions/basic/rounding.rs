use num_traits::Float;

use crate::{Elementwise, FloatElement};

/// Floors the input, rounding every element down to the largest integral value not greater
/// than it.
pub fn floor<T>(value: T) -> T
where
    T: Elementwise,
    T::Elem: FloatElement,
{
    value.map(|elem| elem.floor())
}

/// Ceils the input, rounding every element up to the smallest integral value not less than it.
pub fn ceil<T>(value: T) -> T
where
    T: Elementwise,
    T::Elem: FloatElement,
{
    value.map(|elem| elem.ceil())
}

/// The absolute value of every element.
pub fn abs<T>(value: T) -> T
where
    T: Elementwise,
    T::Elem: FloatElement,
{
    value.map(|elem| elem.abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mat3f, Vec2f, Vec3d, Vec4f};

    #[test]
    fn should_floor_scalars_and_vectors() {
        assert_eq!(floor(1.7f32), 1.0);
        assert_eq!(floor(-1.2f64), -2.0);
        assert_eq!(
            floor(Vec4f::new(0.5, -0.5, 2.0, 3.99)),
            Vec4f::new(0.0, -1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn should_ceil_scalars_and_vectors() {
        assert_eq!(ceil(1.2f32), 2.0);
        assert_eq!(ceil(Vec3d::new(-0.5, 0.1, 4.0)), Vec3d::new(0.0, 1.0, 4.0));
    }

    #[test]
    fn should_abs_matrices() {
        let matrix = Mat3f::new(-1.0, 2.0, -3.0, 4.0, -5.0, 6.0, -7.0, 8.0, -9.0);
        assert_eq!(
            abs(matrix),
            Mat3f::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0)
        );
        assert_eq!(abs(Vec2f::new(-0.0, -2.5)), Vec2f::new(0.0, 2.5));
    }
}
