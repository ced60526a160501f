use crate::{Element, Matrix};

/// Resets `matrix` to the identity.
pub fn set_identity<E: Element, const N: usize>(matrix: &mut Matrix<E, N>) {
    *matrix = Matrix::identity();
}

/// Whether `matrix` is exactly the identity.
pub fn is_identity<E: Element, const N: usize>(matrix: &Matrix<E, N>) -> bool {
    *matrix == Matrix::identity()
}

/// Whether the transform held in `matrix` scales any axis.
///
/// Inspects the diagonal, excluding the homogeneous element.
pub fn has_scale<E: Element, const N: usize>(matrix: &Matrix<E, N>) -> bool {
    (0..N - 1).any(|index| matrix[(index, index)] != E::one())
}

/// Swaps rows and columns.
pub fn transpose<E: Element, const N: usize>(matrix: &Matrix<E, N>) -> Matrix<E, N> {
    Matrix::from_rows(core::array::from_fn(|row| *matrix.column(row).as_array()))
}

/// The product `lhs * rhs`, applying `rhs` first when both are transforms.
pub fn matrix_product<E: Element, const N: usize>(
    lhs: &Matrix<E, N>,
    rhs: &Matrix<E, N>,
) -> Matrix<E, N> {
    *lhs * *rhs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Elementwise, Mat3f, Mat4d, Mat4f};

    #[test]
    fn should_set_identity() {
        let mut matrix = Mat4f::splat(3.0);
        assert!(!is_identity(&matrix));

        set_identity(&mut matrix);
        assert!(is_identity(&matrix));
        assert_eq!(matrix, Mat4f::identity());
    }

    #[test]
    fn should_detect_scale() {
        let mut matrix = Mat4f::identity();
        assert!(!has_scale(&matrix));

        matrix[(3, 3)] = 2.0;
        assert!(!has_scale(&matrix));

        matrix[(1, 1)] = 2.0;
        assert!(has_scale(&matrix));
    }

    #[test]
    fn should_transpose() {
        let matrix = Mat3f::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        let expected = Mat3f::new(1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0);

        assert_eq!(transpose(&matrix), expected);
        assert_eq!(transpose(&transpose(&matrix)), matrix);
    }

    #[test]
    fn should_multiply_matrices() {
        let lhs = Mat3f::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        let rhs = Mat3f::new(9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0);

        assert_eq!(
            matrix_product(&lhs, &rhs),
            Mat3f::new(30.0, 24.0, 18.0, 84.0, 69.0, 54.0, 138.0, 114.0, 90.0)
        );
        assert_eq!(matrix_product(&Mat4d::identity(), &Mat4d::splat(2.0)), Mat4d::splat(2.0));
    }
}
