use crate::{expand, normalize, Element, FloatElement, Matrix, Range, Vector};

/// Matrix acting on vectors of one dimension less, through homogeneous coordinates.
///
/// Implemented by 3x3 matrices, which transform two dimensional vectors, and 4x4 matrices,
/// which transform three dimensional vectors.
pub trait Homogeneous {
    /// The vector type transformed by this matrix.
    type Vector;

    /// Writes `vector` into the translation column.
    fn set_translate(&mut self, vector: Self::Vector);

    /// Writes `vector` onto the scaling diagonal.
    fn set_scale(&mut self, vector: Self::Vector);

    /// Transforms a direction, ignoring translation.
    fn transform_vector(&self, vector: Self::Vector) -> Self::Vector;
}

macro_rules! homogeneous_matrix {
    ($size:expr, $dim:expr) => {
        impl<E: Element> Homogeneous for Matrix<E, $size> {
            type Vector = Vector<E, $dim>;

            fn set_translate(&mut self, vector: Self::Vector) {
                for row in 0..$dim {
                    self[(row, $dim)] = vector[row];
                }
            }

            fn set_scale(&mut self, vector: Self::Vector) {
                for index in 0..$dim {
                    self[(index, index)] = vector[index];
                }
            }

            fn transform_vector(&self, vector: Self::Vector) -> Self::Vector {
                let mut transformed = Vector::default();
                for row in 0..$dim {
                    let mut sum = E::zero();
                    for col in 0..$dim {
                        sum = sum + self[(row, col)] * vector[col];
                    }
                    transformed[row] = sum;
                }
                transformed
            }
        }
    };
}

homogeneous_matrix!(3, 2);
homogeneous_matrix!(4, 3);

/// Sets the translation component of `matrix`, leaving the other elements untouched.
pub fn set_translate<M: Homogeneous>(vector: M::Vector, matrix: &mut M) {
    matrix.set_translate(vector);
}

/// Sets the scale component of `matrix`, leaving the other elements untouched.
pub fn set_scale<M: Homogeneous>(vector: M::Vector, matrix: &mut M) {
    matrix.set_scale(vector);
}

/// Transforms the direction `vector` by `matrix`, ignoring translation.
pub fn transform_vector<M: Homogeneous>(matrix: &M, vector: M::Vector) -> M::Vector {
    matrix.transform_vector(vector)
}

/// Writes a rotation of `angle` radians around the X axis into `matrix`.
pub fn set_rotate_x<E: FloatElement>(angle: E, matrix: &mut Matrix<E, 4>) {
    let (sin, cos) = angle.sin_cos();
    matrix[(1, 1)] = cos;
    matrix[(1, 2)] = -sin;
    matrix[(2, 1)] = sin;
    matrix[(2, 2)] = cos;
}

/// Writes a rotation of `angle` radians around the Y axis into `matrix`.
pub fn set_rotate_y<E: FloatElement>(angle: E, matrix: &mut Matrix<E, 4>) {
    let (sin, cos) = angle.sin_cos();
    matrix[(0, 0)] = cos;
    matrix[(0, 2)] = sin;
    matrix[(2, 0)] = -sin;
    matrix[(2, 2)] = cos;
}

/// Writes a rotation of `angle` radians around the Z axis into `matrix`.
pub fn set_rotate_z<E: FloatElement>(angle: E, matrix: &mut Matrix<E, 4>) {
    let (sin, cos) = angle.sin_cos();
    matrix[(0, 0)] = cos;
    matrix[(0, 1)] = -sin;
    matrix[(1, 0)] = sin;
    matrix[(1, 1)] = cos;
}

/// Writes a rotation of `angle` radians around an arbitrary `axis` into `matrix`.
///
/// The axis does not need to be normalized. Only the upper 3x3 block is written.
pub fn set_rotate<E: FloatElement>(angle: E, axis: Vector<E, 3>, matrix: &mut Matrix<E, 4>) {
    let axis = normalize(axis);
    let (x, y, z) = (axis.x(), axis.y(), axis.z());
    let (sin, cos) = angle.sin_cos();
    let t = E::one() - cos;

    matrix[(0, 0)] = t * x * x + cos;
    matrix[(0, 1)] = t * x * y - sin * z;
    matrix[(0, 2)] = t * x * z + sin * y;

    matrix[(1, 0)] = t * x * y + sin * z;
    matrix[(1, 1)] = t * y * y + cos;
    matrix[(1, 2)] = t * y * z - sin * x;

    matrix[(2, 0)] = t * x * z - sin * y;
    matrix[(2, 1)] = t * y * z + sin * x;
    matrix[(2, 2)] = t * z * z + cos;
}

/// Transforms `point` by `matrix`, including translation and the perspective divide.
pub fn transform_point<E: FloatElement>(matrix: &Matrix<E, 4>, point: Vector<E, 3>) -> Vector<E, 3> {
    let homogeneous = *matrix * Vector::<E, 4>::new(point.x(), point.y(), point.z(), E::one());
    let transformed = Vector::<E, 3>::new(homogeneous.x(), homogeneous.y(), homogeneous.z());

    let w = homogeneous.w();
    if w == E::one() {
        transformed
    } else {
        debug_assert!(w != E::zero(), "Point {point} transformed onto the plane at infinity");
        transformed / w
    }
}

/// Transforms an axis-aligned box by `matrix`.
///
/// # Returns
///
/// The axis-aligned box enclosing all eight transformed corners.
pub fn transform_aabb<E: FloatElement>(
    matrix: &Matrix<E, 4>,
    aabb: &Range<Vector<E, 3>>,
) -> Range<Vector<E, 3>> {
    let (min, max) = (aabb.min(), aabb.max());

    let mut transformed = Range::default();
    for corner in 0..8 {
        let point = Vector::<E, 3>::new(
            if corner & 1 == 0 { min.x() } else { max.x() },
            if corner & 2 == 0 { min.y() } else { max.y() },
            if corner & 4 == 0 { min.z() } else { max.z() },
        );
        transformed = expand(&transformed, &transform_point(matrix, point));
    }
    transformed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ApproxEq, Elementwise, Mat3f, Mat4f, Tolerance, Vec2f, Vec3f, Vec3fRange};
    use core::f32::consts::FRAC_PI_2;

    #[test]
    fn should_set_translation_column() {
        let mut matrix = Mat4f::identity();
        set_translate(Vec3f::new(2.0, 3.0, 4.0), &mut matrix);

        assert_eq!(
            matrix,
            Mat4f::new(
                1.0, 0.0, 0.0, 2.0, 0.0, 1.0, 0.0, 3.0, 0.0, 0.0, 1.0, 4.0, 0.0, 0.0, 0.0, 1.0
            )
        );

        let mut matrix = Mat3f::identity();
        set_translate(Vec2f::new(-1.0, 5.0), &mut matrix);
        assert_eq!(matrix.column(2), Vec3f::new(-1.0, 5.0, 1.0));
    }

    #[test]
    fn should_set_scale_diagonal() {
        let mut matrix = Mat4f::identity();
        set_scale(Vec3f::new(2.0, 3.0, 4.0), &mut matrix);

        assert_eq!(matrix[(0, 0)], 2.0);
        assert_eq!(matrix[(1, 1)], 3.0);
        assert_eq!(matrix[(2, 2)], 4.0);
        assert_eq!(matrix[(3, 3)], 1.0);
    }

    #[test]
    fn should_transform_vector_without_translation() {
        let mut matrix = Mat4f::identity();
        set_translate(Vec3f::new(10.0, 10.0, 10.0), &mut matrix);
        set_scale(Vec3f::new(2.0, 2.0, 2.0), &mut matrix);

        assert_eq!(
            transform_vector(&matrix, Vec3f::new(1.0, 0.0, -1.0)),
            Vec3f::new(2.0, 0.0, -2.0)
        );
    }

    #[test]
    fn should_transform_point_with_translation() {
        let mut matrix = Mat4f::identity();
        set_translate(Vec3f::new(10.0, 0.0, -5.0), &mut matrix);

        assert_eq!(
            transform_point(&matrix, Vec3f::new(1.0, 2.0, 3.0)),
            Vec3f::new(11.0, 2.0, -2.0)
        );
    }

    #[test]
    fn should_divide_by_homogeneous_coordinate() {
        let mut matrix = Mat4f::identity();
        matrix[(3, 3)] = 2.0;

        assert_eq!(
            transform_point(&matrix, Vec3f::new(2.0, 4.0, 6.0)),
            Vec3f::new(1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn should_rotate_around_principal_axes() {
        let mut matrix = Mat4f::identity();
        set_rotate_z(FRAC_PI_2, &mut matrix);
        transform_point(&matrix, Vec3f::new(1.0, 0.0, 0.0))
            .assert_approx_eq(&Vec3f::new(0.0, 1.0, 0.0), Tolerance::absolute(1e-6));

        let mut matrix = Mat4f::identity();
        set_rotate_x(FRAC_PI_2, &mut matrix);
        transform_point(&matrix, Vec3f::new(0.0, 1.0, 0.0))
            .assert_approx_eq(&Vec3f::new(0.0, 0.0, 1.0), Tolerance::absolute(1e-6));

        let mut matrix = Mat4f::identity();
        set_rotate_y(FRAC_PI_2, &mut matrix);
        transform_point(&matrix, Vec3f::new(0.0, 0.0, 1.0))
            .assert_approx_eq(&Vec3f::new(1.0, 0.0, 0.0), Tolerance::absolute(1e-6));
    }

    #[test]
    fn should_match_principal_rotation_with_arbitrary_axis() {
        let mut expected = Mat4f::identity();
        set_rotate_y(0.7, &mut expected);

        let mut matrix = Mat4f::identity();
        set_rotate(0.7, Vec3f::new(0.0, 3.0, 0.0), &mut matrix);

        matrix.assert_approx_eq(&expected, Tolerance::absolute(1e-6));
    }

    #[test]
    fn should_transform_aabb() {
        let mut matrix = Mat4f::identity();
        set_rotate_z(FRAC_PI_2, &mut matrix);
        set_translate(Vec3f::new(1.0, 0.0, 0.0), &mut matrix);

        let aabb = Vec3fRange::new(Vec3f::splat(0.0), Vec3f::new(2.0, 1.0, 1.0));
        let transformed = transform_aabb(&matrix, &aabb);

        transformed.assert_approx_eq(
            &Vec3fRange::new(Vec3f::new(0.0, 0.0, 0.0), Vec3f::new(1.0, 2.0, 1.0)),
            Tolerance::absolute(1e-6),
        );
    }
}
