use crate::{Element, Elementwise, FloatElement, Vector};

/// The dot product of two vectors.
pub fn dot_product<E: Element, const N: usize>(lhs: Vector<E, N>, rhs: Vector<E, N>) -> E {
    lhs.zip_map(rhs, |lhs, rhs| lhs * rhs)
        .fold(E::zero(), |sum, elem| sum + elem)
}

/// The squared length of a vector, which avoids the square root of [length].
pub fn length_squared<E: Element, const N: usize>(vector: Vector<E, N>) -> E {
    dot_product(vector, vector)
}

/// The euclidean length of a vector.
pub fn length<E: FloatElement, const N: usize>(vector: Vector<E, N>) -> E {
    length_squared(vector).sqrt()
}

/// Scales `vector` to unit length.
pub fn normalize<E: FloatElement, const N: usize>(vector: Vector<E, N>) -> Vector<E, N> {
    let length = length(vector);
    debug_assert!(length != E::zero(), "Cannot normalize the zero vector");
    vector / length
}

/// The euclidean distance between two points.
pub fn distance<E: FloatElement, const N: usize>(
    point_a: Vector<E, N>,
    point_b: Vector<E, N>,
) -> E {
    length(point_b - point_a)
}

/// The cross product of two three dimensional vectors.
///
/// The result is orthogonal to both inputs, following the right hand rule.
pub fn cross_product<E: Element>(lhs: Vector<E, 3>, rhs: Vector<E, 3>) -> Vector<E, 3> {
    Vector::<E, 3>::new(
        lhs.y() * rhs.z() - lhs.z() * rhs.y(),
        lhs.z() * rhs.x() - lhs.x() * rhs.z(),
        lhs.x() * rhs.y() - lhs.y() * rhs.x(),
    )
}

/// Builds an orthonormal basis around a unit vector.
///
/// # Arguments
///
/// * `vector` - The normalized first axis of the basis.
///
/// # Returns
///
/// The second and third axes. Together with `vector` they form a right handed basis.
pub fn coordinate_system<E: FloatElement>(vector: Vector<E, 3>) -> (Vector<E, 3>, Vector<E, 3>) {
    debug_assert!(
        (length(vector) - E::one()).abs() < E::from_elem(1e-4),
        "{vector} is not normalized"
    );

    let (x, y, z) = (vector.x(), vector.y(), vector.z());
    let second = if x.abs() > y.abs() {
        Vector::<E, 3>::new(-z, E::zero(), x) / (x * x + z * z).sqrt()
    } else {
        Vector::<E, 3>::new(E::zero(), z, -y) / (y * y + z * z).sqrt()
    };
    let third = cross_product(vector, second);

    (second, third)
}

/// Flips `normal` when it points away from `guide`.
pub fn face_forward<E: Element>(normal: Vector<E, 3>, guide: Vector<E, 3>) -> Vector<E, 3> {
    if dot_product(normal, guide) < E::zero() {
        -normal
    } else {
        normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ApproxEq, Tolerance, Vec2f, Vec3d, Vec3f, Vec3i, Vec4f};

    #[test]
    fn should_compute_dot_product() {
        assert_eq!(
            dot_product(Vec3f::new(1.0, 2.0, 3.0), Vec3f::new(4.0, -5.0, 6.0)),
            12.0
        );
        assert_eq!(dot_product(Vec3i::new(1, 0, 0), Vec3i::new(0, 1, 0)), 0);
    }

    #[test]
    fn should_compute_lengths() {
        let vector = Vec2f::new(3.0, 4.0);
        assert_eq!(length_squared(vector), 25.0);
        assert_eq!(length(vector), 5.0);
        assert_eq!(length_squared(Vec3i::new(1, 2, 2)), 9);
    }

    #[test]
    fn should_normalize() {
        let vector = normalize(Vec4f::new(2.0, 0.0, 0.0, 2.0));
        vector.assert_approx_eq(
            &Vec4f::new(core::f32::consts::FRAC_1_SQRT_2, 0.0, 0.0, core::f32::consts::FRAC_1_SQRT_2),
            Tolerance::default(),
        );
        length(vector).assert_approx_eq(&1.0, Tolerance::default());
    }

    #[test]
    fn should_compute_distance() {
        let distance = distance(Vec3d::new(1.0, 1.0, 1.0), Vec3d::new(1.0, 4.0, 5.0));
        assert_eq!(distance, 5.0);
    }

    #[test]
    fn should_compute_right_handed_cross_product() {
        let x = Vec3f::new(1.0, 0.0, 0.0);
        let y = Vec3f::new(0.0, 1.0, 0.0);

        assert_eq!(cross_product(x, y), Vec3f::new(0.0, 0.0, 1.0));
        assert_eq!(cross_product(y, x), Vec3f::new(0.0, 0.0, -1.0));
        assert_eq!(
            cross_product(Vec3i::new(2, 3, 4), Vec3i::new(5, 6, 7)),
            Vec3i::new(-3, 6, -3)
        );
    }

    #[test]
    fn should_build_orthonormal_basis() {
        for vector in [
            Vec3f::new(1.0, 0.0, 0.0),
            Vec3f::new(0.0, 1.0, 0.0),
            normalize(Vec3f::new(1.0, 2.0, -3.0)),
        ] {
            let (second, third) = coordinate_system(vector);

            dot_product(vector, second).assert_approx_eq(&0.0, Tolerance::absolute(1e-6));
            dot_product(vector, third).assert_approx_eq(&0.0, Tolerance::absolute(1e-6));
            dot_product(second, third).assert_approx_eq(&0.0, Tolerance::absolute(1e-6));
            length(second).assert_approx_eq(&1.0, Tolerance::default());
            length(third).assert_approx_eq(&1.0, Tolerance::default());
        }
    }

    #[test]
    fn should_face_forward() {
        let normal = Vec3f::new(0.0, 0.0, 1.0);

        assert_eq!(face_forward(normal, Vec3f::new(0.0, 1.0, 1.0)), normal);
        assert_eq!(face_forward(normal, Vec3f::new(0.0, 1.0, -1.0)), -normal);
    }
}
