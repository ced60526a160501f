use num_traits::ToPrimitive;

use crate::Elementwise;

/// Tolerance used when comparing floating point values.
///
/// Two values are approximately equal when their difference is within the absolute
/// tolerance, or within the relative tolerance scaled by the larger magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    absolute: f64,
    relative: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::rel_abs(1e-5, 1e-5)
    }
}

impl Tolerance {
    /// Only accept differences up to `tolerance`.
    pub fn absolute(tolerance: f64) -> Self {
        Self {
            absolute: tolerance,
            relative: 0.0,
        }
    }

    /// Only accept differences up to `tolerance` times the larger magnitude.
    pub fn relative(tolerance: f64) -> Self {
        Self {
            absolute: 0.0,
            relative: tolerance,
        }
    }

    /// Accept differences within either tolerance.
    pub fn rel_abs(relative: f64, absolute: f64) -> Self {
        Self { absolute, relative }
    }

    /// A loose tolerance, for results of long computation chains in single precision.
    pub fn permissive() -> Self {
        Self::rel_abs(1e-2, 1e-3)
    }

    /// Whether `lhs` and `rhs` are within tolerance of each other.
    ///
    /// NaNs only compare equal to NaNs, infinities only to infinities of the same sign.
    pub fn approx_eq<E: ToPrimitive>(&self, lhs: E, rhs: E) -> bool {
        let lhs = lhs.to_f64().unwrap_or(f64::NAN);
        let rhs = rhs.to_f64().unwrap_or(f64::NAN);

        if lhs == rhs {
            return true;
        }
        if lhs.is_nan() || rhs.is_nan() {
            return lhs.is_nan() && rhs.is_nan();
        }
        if lhs.is_infinite() || rhs.is_infinite() {
            return false;
        }

        let diff = (lhs - rhs).abs();
        diff <= self.absolute || diff <= self.relative * lhs.abs().max(rhs.abs())
    }
}

/// Approximate equality of values with floating point elements.
pub trait ApproxEq {
    /// Whether every element of `self` is within `tolerance` of the element of `other`.
    fn approx_eq(&self, other: &Self, tolerance: Tolerance) -> bool;

    /// Asserts that `self` is approximately equal to `expected`.
    ///
    /// # Panics
    ///
    /// When any element differs by more than `tolerance`, naming the first position.
    fn assert_approx_eq(&self, expected: &Self, tolerance: Tolerance);
}

impl<T> ApproxEq for T
where
    T: Elementwise,
    T::Elem: ToPrimitive,
{
    fn approx_eq(&self, other: &Self, tolerance: Tolerance) -> bool {
        self.all(*other, |lhs, rhs| tolerance.approx_eq(lhs, rhs))
    }

    fn assert_approx_eq(&self, expected: &Self, tolerance: Tolerance) {
        let mut position = 0;
        let mut mismatch = None;

        self.all(*expected, |actual, expected| {
            if tolerance.approx_eq(actual, expected) {
                position += 1;
                true
            } else {
                mismatch = Some((actual, expected));
                false
            }
        });

        if let Some((actual, elem_expected)) = mismatch {
            panic!(
                "{self:?} is not approximately equal to {expected:?}\n  => Position {position}: \
                 {actual:?} != {elem_expected:?} with {tolerance:?}"
            );
        }
    }
}
