use crate::{FloatElement, Matrix};

/// Errors raised by linear algebra operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LinalgError {
    /// The matrix has no inverse.
    #[error("Matrix is singular or near-singular: no usable pivot in column {column}")]
    Singular {
        /// Column in which elimination found no usable pivot.
        column: usize,
    },
}

/// Inverts `matrix` through Gauss-Jordan elimination with partial pivoting.
///
/// A pivot is unusable when it is negligible against the largest magnitude of its column in
/// `matrix`, so uniformly small matrices still invert.
///
/// # Returns
///
/// The inverse, or [LinalgError::Singular] when a column has no usable pivot.
pub fn inverse<E: FloatElement, const N: usize>(
    matrix: &Matrix<E, N>,
) -> Result<Matrix<E, N>, LinalgError> {
    let mut lhs = *matrix.as_rows();
    let mut inverse = *Matrix::<E, N>::identity().as_rows();
    let column_scales: [E; N] = core::array::from_fn(|column| {
        lhs.iter()
            .fold(E::zero(), |scale, row| scale.max(row[column].abs()))
    });

    for column in 0..N {
        let mut pivot = column;
        for row in column + 1..N {
            if lhs[row][column].abs() > lhs[pivot][column].abs() {
                pivot = row;
            }
        }

        if lhs[pivot][column].abs() <= E::epsilon() * column_scales[column] {
            log::debug!("Cannot invert matrix, column {column} has no usable pivot");
            return Err(LinalgError::Singular { column });
        }

        lhs.swap(column, pivot);
        inverse.swap(column, pivot);

        let scale = E::one() / lhs[column][column];
        for col in 0..N {
            lhs[column][col] = lhs[column][col] * scale;
            inverse[column][col] = inverse[column][col] * scale;
        }

        for row in 0..N {
            if row == column {
                continue;
            }
            let factor = lhs[row][column];
            if factor == E::zero() {
                continue;
            }
            for col in 0..N {
                lhs[row][col] = lhs[row][col] - factor * lhs[column][col];
                inverse[row][col] = inverse[row][col] - factor * inverse[column][col];
            }
        }
    }

    Ok(Matrix::from_rows(inverse))
}
