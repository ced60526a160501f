use num_traits::{One, Zero};

use crate::{Elementwise, FloatElement, Range, Vector};

/// Linearly interpolates between `source` and `target`.
///
/// # Arguments
///
/// * `source` - Value at weight 0.
/// * `target` - Value at weight 1.
/// * `weight` - Interpolation weight, in `[0, 1]`.
pub fn linear_interpolation<T>(source: T, target: T, weight: T::Elem) -> T
where
    T: Elementwise,
    T::Elem: FloatElement,
{
    debug_assert!(
        weight >= <T::Elem as Zero>::zero() && weight <= <T::Elem as One>::one(),
        "Interpolation weight {weight:?} outside of [0, 1]"
    );

    let complement = <T::Elem as One>::one() - weight;
    source.zip_map(target, |source, target| source * complement + target * weight)
}

/// Interpolates between the four corners of a square.
///
/// Corners are named by their coordinates: `corner10` sits at weight `(1, 0)`.
pub fn bilinear_interpolation<T>(
    corner00: T,
    corner10: T,
    corner01: T,
    corner11: T,
    weight: Vector<T::Elem, 2>,
) -> T
where
    T: Elementwise,
    T::Elem: FloatElement,
{
    linear_interpolation(
        linear_interpolation(corner00, corner10, weight.x()),
        linear_interpolation(corner01, corner11, weight.x()),
        weight.y(),
    )
}

/// Interpolates between the eight corners of a cube.
///
/// Corners are named by their coordinates: `corner101` sits at weight `(1, 0, 1)`.
#[allow(clippy::too_many_arguments)]
pub fn trilinear_interpolation<T>(
    corner000: T,
    corner100: T,
    corner010: T,
    corner110: T,
    corner001: T,
    corner101: T,
    corner011: T,
    corner111: T,
    weight: Vector<T::Elem, 3>,
) -> T
where
    T: Elementwise,
    T::Elem: FloatElement,
{
    let face_weight = Vector::<T::Elem, 2>::new(weight.x(), weight.y());
    linear_interpolation(
        bilinear_interpolation(corner000, corner100, corner010, corner110, face_weight),
        bilinear_interpolation(corner001, corner101, corner011, corner111, face_weight),
        weight.z(),
    )
}

/// Maps `value` linearly from `source_range` onto `target_range`.
///
/// Values outside of the source range map outside of the target range.
pub fn linear_map<T>(value: T, source_range: &Range<T::Elem>, target_range: &Range<T::Elem>) -> T
where
    T: Elementwise,
    T::Elem: FloatElement,
{
    let source_extent = source_range.max() - source_range.min();
    let target_extent = target_range.max() - target_range.min();
    debug_assert!(
        source_extent != <T::Elem as Zero>::zero(),
        "Cannot map from the degenerate range {source_range:?}"
    );

    value.map(|elem| (elem - source_range.min()) / source_extent * target_extent + target_range.min())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ApproxEq, FloatRange, Tolerance, Vec2f, Vec3f};

    #[test]
    fn should_interpolate_scalars() {
        assert_eq!(linear_interpolation(2.0f32, 4.0, 0.0), 2.0);
        assert_eq!(linear_interpolation(2.0f32, 4.0, 1.0), 4.0);
        assert_eq!(linear_interpolation(2.0f64, 4.0, 0.25), 2.5);
    }

    #[test]
    fn should_interpolate_vectors_and_ranges() {
        let vector = linear_interpolation(Vec3f::splat(0.0), Vec3f::new(2.0, 4.0, -8.0), 0.5);
        assert_eq!(vector, Vec3f::new(1.0, 2.0, -4.0));

        let range = linear_interpolation(
            FloatRange::new(0.0, 1.0),
            FloatRange::new(1.0, 3.0),
            0.5,
        );
        assert_eq!(range, FloatRange::new(0.5, 2.0));
    }

    #[test]
    fn should_interpolate_square_corners() {
        let value = bilinear_interpolation(0.0f32, 1.0, 2.0, 3.0, Vec2f::new(0.5, 0.5));
        value.assert_approx_eq(&1.5, Tolerance::default());

        let corner = bilinear_interpolation(0.0f32, 1.0, 2.0, 3.0, Vec2f::new(1.0, 0.0));
        assert_eq!(corner, 1.0);
    }

    #[test]
    fn should_interpolate_cube_corners() {
        let value = trilinear_interpolation(
            0.0f32,
            1.0,
            2.0,
            3.0,
            4.0,
            5.0,
            6.0,
            7.0,
            Vec3f::new(1.0, 1.0, 1.0),
        );
        assert_eq!(value, 7.0);

        let center = trilinear_interpolation(
            0.0f32,
            1.0,
            2.0,
            3.0,
            4.0,
            5.0,
            6.0,
            7.0,
            Vec3f::splat(0.5),
        );
        center.assert_approx_eq(&3.5, Tolerance::default());
    }

    #[test]
    fn should_map_between_ranges() {
        let source = FloatRange::new(-1.0, 1.0);
        let target = FloatRange::new(0.0, 100.0);

        assert_eq!(linear_map(0.0f32, &source, &target), 50.0);
        assert_eq!(
            linear_map(Vec2f::new(-1.0, 1.0), &source, &target),
            Vec2f::new(0.0, 100.0)
        );
        assert_eq!(linear_map(2.0f32, &source, &target), 150.0);
    }
}
