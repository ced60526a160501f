use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::array::{deserialize_array, TupleArray, TupleRef};
use crate::{ClassName, Element, Elementwise, Vector};

/// Square matrix of `N` rows and `N` columns, stored in row-major order.
///
/// Matrices transform column vectors: `matrix * vector`. Translation lives in the last column.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Matrix<E, const N: usize> {
    rows: [[E; N]; N],
}

/// 3x3 matrix of `f32` elements.
pub type Mat3f = Matrix<f32, 3>;
/// 4x4 matrix of `f32` elements.
pub type Mat4f = Matrix<f32, 4>;
/// 3x3 matrix of `f64` elements.
pub type Mat3d = Matrix<f64, 3>;
/// 4x4 matrix of `f64` elements.
pub type Mat4d = Matrix<f64, 4>;

impl<E: Element, const N: usize> Matrix<E, N> {
    /// Creates a matrix from its rows.
    pub fn from_rows(rows: [[E; N]; N]) -> Self {
        let matrix = Self { rows };
        debug_assert!(!matrix.has_nans(), "{matrix} has NaN elements");
        matrix
    }

    /// The identity matrix.
    pub fn identity() -> Self {
        let mut rows = [[E::zero(); N]; N];
        for index in 0..N {
            rows[index][index] = E::one();
        }
        Self { rows }
    }

    /// The number of elements in this matrix.
    pub const fn element_size() -> usize {
        N * N
    }

    /// The row at `index`.
    pub fn row(&self, index: usize) -> Vector<E, N> {
        Vector::from_array(self.rows[index])
    }

    /// The column at `index`.
    pub fn column(&self, index: usize) -> Vector<E, N> {
        Vector::from_array(core::array::from_fn(|row| self.rows[row][index]))
    }

    /// The rows, in order.
    pub fn as_rows(&self) -> &[[E; N]; N] {
        &self.rows
    }

    /// The string representation with `prefix` prepended to the class token.
    pub fn to_string_with_prefix(&self, prefix: &str) -> String {
        format!("{prefix}{self}")
    }
}

impl<E: Element> Matrix<E, 3> {
    /// Element-wise constructor, in row-major order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        element0: E,
        element1: E,
        element2: E,
        element3: E,
        element4: E,
        element5: E,
        element6: E,
        element7: E,
        element8: E,
    ) -> Self {
        Self::from_rows([
            [element0, element1, element2],
            [element3, element4, element5],
            [element6, element7, element8],
        ])
    }
}

impl<E: Element> Matrix<E, 4> {
    /// Element-wise constructor, in row-major order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        element0: E,
        element1: E,
        element2: E,
        element3: E,
        element4: E,
        element5: E,
        element6: E,
        element7: E,
        element8: E,
        element9: E,
        element10: E,
        element11: E,
        element12: E,
        element13: E,
        element14: E,
        element15: E,
    ) -> Self {
        Self::from_rows([
            [element0, element1, element2, element3],
            [element4, element5, element6, element7],
            [element8, element9, element10, element11],
            [element12, element13, element14, element15],
        ])
    }
}

impl<E: Element, const N: usize> Default for Matrix<E, N> {
    fn default() -> Self {
        Self {
            rows: [[E::zero(); N]; N],
        }
    }
}

impl<E: Element, const N: usize> ClassName for Matrix<E, N> {
    fn class_name() -> String {
        format!("Mat{N}{}", E::SUFFIX)
    }
}

impl<E: Element, const N: usize> Elementwise for Matrix<E, N> {
    type Elem = E;

    fn splat(elem: Self::Elem) -> Self {
        Self {
            rows: [[elem; N]; N],
        }
    }

    fn map<F: FnMut(Self::Elem) -> Self::Elem>(self, mut func: F) -> Self {
        Self {
            rows: self.rows.map(|row| row.map(&mut func)),
        }
    }

    fn zip_map<F: FnMut(Self::Elem, Self::Elem) -> Self::Elem>(
        self,
        other: Self,
        mut func: F,
    ) -> Self {
        Self {
            rows: core::array::from_fn(|row| {
                core::array::from_fn(|col| func(self.rows[row][col], other.rows[row][col]))
            }),
        }
    }

    fn fold<A, F: FnMut(A, Self::Elem) -> A>(self, init: A, func: F) -> A {
        self.rows.into_iter().flatten().fold(init, func)
    }

    fn all<F: FnMut(Self::Elem, Self::Elem) -> bool>(self, other: Self, mut func: F) -> bool {
        self.rows
            .iter()
            .flatten()
            .zip(other.rows.iter().flatten())
            .all(|(lhs, rhs)| func(*lhs, *rhs))
    }
}

impl<E: Element, const N: usize> Index<(usize, usize)> for Matrix<E, N> {
    type Output = E;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.rows[row][col]
    }
}

impl<E: Element, const N: usize> IndexMut<(usize, usize)> for Matrix<E, N> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.rows[row][col]
    }
}

impl<E: Element, const N: usize> Add for Matrix<E, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.zip_map(rhs, |lhs, rhs| lhs + rhs)
    }
}

impl<E: Element, const N: usize> AddAssign for Matrix<E, N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<E: Element, const N: usize> Sub for Matrix<E, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_map(rhs, |lhs, rhs| lhs - rhs)
    }
}

impl<E: Element, const N: usize> SubAssign for Matrix<E, N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<E: Element, const N: usize> Mul<E> for Matrix<E, N> {
    type Output = Self;

    fn mul(self, rhs: E) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

impl<E: Element, const N: usize> MulAssign<E> for Matrix<E, N> {
    fn mul_assign(&mut self, rhs: E) {
        *self = *self * rhs;
    }
}

impl<E: Element, const N: usize> Div<E> for Matrix<E, N> {
    type Output = Self;

    fn div(self, rhs: E) -> Self::Output {
        debug_assert!(rhs != E::zero(), "Division of {self} by zero");
        self.map(|elem| elem / rhs)
    }
}

impl<E: Element, const N: usize> DivAssign<E> for Matrix<E, N> {
    fn div_assign(&mut self, rhs: E) {
        *self = *self / rhs;
    }
}

impl<E: Element, const N: usize> Neg for Matrix<E, N> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(|elem| -elem)
    }
}

impl<E: Element, const N: usize> Mul for Matrix<E, N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut product = Self::default();
        for row in 0..N {
            for col in 0..N {
                let mut sum = E::zero();
                for index in 0..N {
                    sum = sum + self.rows[row][index] * rhs.rows[index][col];
                }
                product.rows[row][col] = sum;
            }
        }
        product
    }
}

impl<E: Element, const N: usize> Mul<Vector<E, N>> for Matrix<E, N> {
    type Output = Vector<E, N>;

    fn mul(self, rhs: Vector<E, N>) -> Self::Output {
        let mut product = Vector::default();
        for row in 0..N {
            let mut sum = E::zero();
            for col in 0..N {
                sum = sum + self.rows[row][col] * rhs[col];
            }
            product[row] = sum;
        }
        product
    }
}

macro_rules! scalar_matrix_mul {
    ($($elem:ty),*) => {
        $(
            impl<const N: usize> Mul<Matrix<$elem, N>> for $elem {
                type Output = Matrix<$elem, N>;

                fn mul(self, rhs: Matrix<$elem, N>) -> Self::Output {
                    rhs * self
                }
            }
        )*
    };
}

scalar_matrix_mul!(f32, f64, i32, i64);

impl<E: Element, const N: usize> fmt::Display for Matrix<E, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}( ", Self::class_name())?;
        for (index, elem) in self.rows.iter().flatten().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{elem}")?;
        }
        f.write_str(" )")
    }
}

impl<E: Serialize, const N: usize> Serialize for Matrix<E, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(N)?;
        for row in self.rows.iter() {
            tuple.serialize_element(&TupleRef(row))?;
        }
        tuple.end()
    }
}

impl<'de, E: Deserialize<'de>, const N: usize> Deserialize<'de> for Matrix<E, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows: [TupleArray<E, N>; N] = deserialize_array(deserializer)?;
        Ok(Self {
            rows: rows.map(|TupleArray(row)| row),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec3f;

    #[test]
    fn should_default_to_zeros() {
        assert_eq!(Mat3f::default(), Mat3f::splat(0.0));
    }

    #[test]
    fn should_construct_row_major() {
        let matrix = Mat3f::new(0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0);

        assert_eq!(matrix[(0, 2)], 2.0);
        assert_eq!(matrix[(1, 0)], 3.0);
        assert_eq!(matrix.row(2), Vec3f::new(6.0, 7.0, 8.0));
        assert_eq!(matrix.column(1), Vec3f::new(1.0, 4.0, 7.0));
    }

    #[test]
    fn should_write_elements() {
        let mut matrix = Mat4f::identity();
        matrix[(0, 3)] = 5.0;
        assert_eq!(matrix.column(3), crate::Vec4f::new(5.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn should_support_arithmetic() {
        let matrix_a = Mat3f::identity();
        let matrix_b = Mat3f::splat(2.0);

        assert_eq!(matrix_a + matrix_b - matrix_b, matrix_a);
        assert_eq!(2.0 * matrix_a, matrix_a * 2.0);
        assert_eq!(-(matrix_b / 2.0), Mat3f::splat(-1.0));

        let mut matrix_c = matrix_b;
        matrix_c *= 3.0;
        matrix_c /= 6.0;
        matrix_c += matrix_a;
        matrix_c -= Mat3f::splat(1.0);
        assert_eq!(matrix_c, matrix_a);
    }

    #[test]
    fn should_multiply_matrices() {
        let lhs = Mat3f::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        let rhs = Mat3f::new(9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0);
        let expected = Mat3f::new(30.0, 24.0, 18.0, 84.0, 69.0, 54.0, 138.0, 114.0, 90.0);

        assert_eq!(lhs * rhs, expected);
        assert_eq!(lhs * Mat3f::identity(), lhs);
    }

    #[test]
    fn should_transform_column_vectors() {
        let matrix = Mat3f::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        assert_eq!(
            matrix * Vec3f::new(1.0, 0.0, -1.0),
            Vec3f::new(-2.0, -2.0, -2.0)
        );
    }

    #[test]
    fn should_display_row_major_elements() {
        assert_eq!(
            Mat3f::identity().to_string(),
            "Mat3f( 1, 0, 0, 0, 1, 0, 0, 0, 1 )"
        );
        assert_eq!(Mat4d::element_size(), 16);
    }

    #[test]
    fn should_serialize_rows() {
        let matrix = Mat3f::identity();
        let json = serde_json::to_string(&matrix).unwrap();
        assert_eq!(json, "[[1.0,0.0,0.0],[0.0,1.0,0.0],[0.0,0.0,1.0]]");

        let loaded: Mat3f = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, matrix);
        assert!(serde_json::from_str::<Mat3f>("[[1.0,0.0,0.0],[0.0,1.0]]").is_err());
        assert!(serde_json::from_str::<Mat3f>("[[1.0,0.0,0.0],[0.0,1.0,0.0]]").is_err());
    }

    #[test]
    fn should_encode_rows_without_length_prefix() {
        let config = bincode::config::standard().with_fixed_int_encoding();
        let mut matrix = Mat3f::identity();
        matrix[(0, 2)] = 4.5;
        matrix[(2, 0)] = -1.25;

        let bytes = bincode::serde::encode_to_vec(matrix, config).unwrap();
        assert_eq!(bytes.len(), 9 * core::mem::size_of::<f32>());

        let (loaded, read): (Mat3f, usize) =
            bincode::serde::decode_from_slice(&bytes, config).unwrap();
        assert_eq!(loaded, matrix);
        assert_eq!(read, bytes.len());
    }
}
