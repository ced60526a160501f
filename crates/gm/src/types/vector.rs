use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::array::{deserialize_array, serialize_array};
use crate::{ClassName, Element, Elementwise};

/// Vector with `N` elements.
///
/// Default constructed vectors have every element set to zero.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Vector<E, const N: usize> {
    elements: [E; N],
}

/// Vector with 2 `f32` elements.
pub type Vec2f = Vector<f32, 2>;
/// Vector with 3 `f32` elements.
pub type Vec3f = Vector<f32, 3>;
/// Vector with 4 `f32` elements.
pub type Vec4f = Vector<f32, 4>;
/// Vector with 2 `f64` elements.
pub type Vec2d = Vector<f64, 2>;
/// Vector with 3 `f64` elements.
pub type Vec3d = Vector<f64, 3>;
/// Vector with 4 `f64` elements.
pub type Vec4d = Vector<f64, 4>;
/// Vector with 2 `i32` elements.
pub type Vec2i = Vector<i32, 2>;
/// Vector with 3 `i32` elements.
pub type Vec3i = Vector<i32, 3>;
/// Vector with 4 `i32` elements.
pub type Vec4i = Vector<i32, 4>;

impl<E: Element, const N: usize> Vector<E, N> {
    /// Creates a vector from its elements.
    pub fn from_array(elements: [E; N]) -> Self {
        let vector = Self { elements };
        debug_assert!(!vector.has_nans(), "{vector} has NaN elements");
        vector
    }

    /// The number of elements in this vector.
    pub const fn element_size() -> usize {
        N
    }

    /// The elements, in order.
    pub fn as_array(&self) -> &[E; N] {
        &self.elements
    }

    /// Consumes the vector, returning its elements.
    pub fn into_array(self) -> [E; N] {
        self.elements
    }

    /// Iterates over the elements.
    pub fn iter(&self) -> core::slice::Iter<'_, E> {
        self.elements.iter()
    }

    /// The string representation with `prefix` prepended to the class token.
    ///
    /// ```
    /// let vector = gm::Vec2i::new(1, 2);
    /// assert_eq!(vector.to_string_with_prefix("gm."), "gm.Vec2i( 1, 2 )");
    /// ```
    pub fn to_string_with_prefix(&self, prefix: &str) -> String {
        format!("{prefix}{self}")
    }
}

macro_rules! named_vector {
    ($size:expr, $(($name:ident, $name_mut:ident, $index:expr)),+) => {
        impl<E: Element> Vector<E, $size> {
            /// Element-wise constructor.
            pub fn new($($name: E),+) -> Self {
                Self::from_array([$($name),+])
            }

            $(
                #[doc = concat!("The `", stringify!($name), "` element, at index ", stringify!($index), ".")]
                pub fn $name(&self) -> E {
                    self.elements[$index]
                }

                #[doc = concat!("Mutable access to the `", stringify!($name), "` element.")]
                pub fn $name_mut(&mut self) -> &mut E {
                    &mut self.elements[$index]
                }
            )+
        }
    };
}

named_vector!(2, (x, x_mut, 0), (y, y_mut, 1));
named_vector!(3, (x, x_mut, 0), (y, y_mut, 1), (z, z_mut, 2));
named_vector!(4, (x, x_mut, 0), (y, y_mut, 1), (z, z_mut, 2), (w, w_mut, 3));

impl<E: Element, const N: usize> Default for Vector<E, N> {
    fn default() -> Self {
        Self {
            elements: [E::zero(); N],
        }
    }
}

impl<E: Element, const N: usize> From<[E; N]> for Vector<E, N> {
    fn from(elements: [E; N]) -> Self {
        Self::from_array(elements)
    }
}

impl<E: Element, const N: usize> From<Vector<E, N>> for [E; N] {
    fn from(vector: Vector<E, N>) -> Self {
        vector.elements
    }
}

impl<E: Element, const N: usize> ClassName for Vector<E, N> {
    fn class_name() -> String {
        format!("Vec{N}{}", E::SUFFIX)
    }
}

impl<E: Element, const N: usize> Elementwise for Vector<E, N> {
    type Elem = E;

    fn splat(elem: Self::Elem) -> Self {
        Self { elements: [elem; N] }
    }

    fn map<F: FnMut(Self::Elem) -> Self::Elem>(self, func: F) -> Self {
        Self {
            elements: self.elements.map(func),
        }
    }

    fn zip_map<F: FnMut(Self::Elem, Self::Elem) -> Self::Elem>(
        self,
        other: Self,
        mut func: F,
    ) -> Self {
        Self {
            elements: core::array::from_fn(|index| func(self.elements[index], other.elements[index])),
        }
    }

    fn fold<A, F: FnMut(A, Self::Elem) -> A>(self, init: A, func: F) -> A {
        self.elements.into_iter().fold(init, func)
    }

    fn all<F: FnMut(Self::Elem, Self::Elem) -> bool>(self, other: Self, mut func: F) -> bool {
        self.elements
            .iter()
            .zip(other.elements.iter())
            .all(|(lhs, rhs)| func(*lhs, *rhs))
    }
}

impl<E: Element, const N: usize> Index<usize> for Vector<E, N> {
    type Output = E;

    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

impl<E: Element, const N: usize> IndexMut<usize> for Vector<E, N> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.elements[index]
    }
}

impl<E: Element, const N: usize> Add for Vector<E, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.zip_map(rhs, |lhs, rhs| lhs + rhs)
    }
}

impl<E: Element, const N: usize> AddAssign for Vector<E, N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<E: Element, const N: usize> Sub for Vector<E, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_map(rhs, |lhs, rhs| lhs - rhs)
    }
}

impl<E: Element, const N: usize> SubAssign for Vector<E, N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<E: Element, const N: usize> Mul<E> for Vector<E, N> {
    type Output = Self;

    fn mul(self, rhs: E) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

impl<E: Element, const N: usize> MulAssign<E> for Vector<E, N> {
    fn mul_assign(&mut self, rhs: E) {
        *self = *self * rhs;
    }
}

impl<E: Element, const N: usize> Div<E> for Vector<E, N> {
    type Output = Self;

    fn div(self, rhs: E) -> Self::Output {
        debug_assert!(rhs != E::zero(), "Division of {self} by zero");
        self.map(|elem| elem / rhs)
    }
}

impl<E: Element, const N: usize> DivAssign<E> for Vector<E, N> {
    fn div_assign(&mut self, rhs: E) {
        *self = *self / rhs;
    }
}

impl<E: Element, const N: usize> Neg for Vector<E, N> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(|elem| -elem)
    }
}

macro_rules! scalar_vector_mul {
    ($($elem:ty),*) => {
        $(
            impl<const N: usize> Mul<Vector<$elem, N>> for $elem {
                type Output = Vector<$elem, N>;

                fn mul(self, rhs: Vector<$elem, N>) -> Self::Output {
                    rhs * self
                }
            }
        )*
    };
}

scalar_vector_mul!(f32, f64, i32, i64);

impl<E: Element, const N: usize> fmt::Display for Vector<E, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}( ", Self::class_name())?;
        for (index, elem) in self.elements.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{elem}")?;
        }
        f.write_str(" )")
    }
}

impl<E: Serialize, const N: usize> Serialize for Vector<E, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_array(&self.elements, serializer)
    }
}

impl<'de, E: Deserialize<'de>, const N: usize> Deserialize<'de> for Vector<E, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_array(deserializer).map(|elements| Self { elements })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_zeros() {
        let vector = Vec3i::default();
        assert_eq!(vector, Vec3i::new(0, 0, 0));
    }

    #[test]
    fn should_copy() {
        let vector_a = Vec3i::new(0, 2, 4);
        let vector_b = vector_a;
        assert_eq!(vector_a, vector_b);
    }

    #[test]
    fn should_read_and_write_elements() {
        let mut vector = Vec3i::default();
        vector[0] = 0;
        vector[1] = 5;
        vector[2] = 10;

        assert_eq!(vector[0], 0);
        assert_eq!(vector[1], 5);
        assert_eq!(vector[2], 10);
    }

    #[test]
    #[should_panic]
    fn should_panic_on_out_of_range_index() {
        let vector = Vec2f::new(1.0, 2.0);
        let _ = vector[2];
    }

    #[test]
    fn should_access_named_elements() {
        let mut vector = Vec4f::new(0.0, 1.0, 2.0, 3.0);
        assert_eq!(vector.x(), 0.0);
        assert_eq!(vector.y(), 1.0);
        assert_eq!(vector.z(), 2.0);
        assert_eq!(vector.w(), 3.0);

        *vector.w_mut() = 7.0;
        assert_eq!(vector[3], 7.0);
    }

    #[test]
    fn should_support_add_and_sub() {
        let vector_a = Vec3i::new(0, 2, 4);
        let mut vector_b = Vec3i::new(0, 5, 10);
        assert_eq!(vector_a + vector_b, Vec3i::new(0, 7, 14));

        vector_b += vector_a;
        assert_eq!(vector_b, Vec3i::new(0, 7, 14));

        vector_b -= vector_a;
        assert_eq!(vector_b - vector_a, Vec3i::new(0, 3, 6));
    }

    #[test]
    fn should_support_scalar_mul_and_div() {
        let vector = Vec3i::new(0, 2, 4);
        assert_eq!(5 * vector, Vec3i::new(0, 10, 20));
        assert_eq!(vector * 5, Vec3i::new(0, 10, 20));

        let mut vector = Vec3f::new(0.0, 10.0, 20.0);
        vector /= 5.0;
        assert_eq!(vector, Vec3f::new(0.0, 2.0, 4.0));

        vector *= 2.0;
        assert_eq!(vector / 4.0, Vec3f::new(0.0, 1.0, 2.0));
    }

    #[test]
    fn should_negate() {
        let vector = Vec3i::new(0, 2, 4);
        assert_eq!(-vector, Vec3i::new(0, -2, -4));
    }

    #[test]
    fn should_report_element_size() {
        assert_eq!(Vec2f::element_size(), 2);
        assert_eq!(Vec4i::element_size(), 4);
    }

    #[test]
    fn should_detect_nans() {
        let vector = Vec2f::splat(1.0).map(|_| f32::NAN);
        assert!(vector.has_nans());
        assert!(!Vec2f::new(1.0, 2.0).has_nans());
    }

    #[test]
    fn should_display_class_and_elements() {
        assert_eq!(Vec3f::new(1.0, 2.5, -3.0).to_string(), "Vec3f( 1, 2.5, -3 )");
        assert_eq!(Vec2d::new(0.0, 1.0).to_string(), "Vec2d( 0, 1 )");
        assert_eq!(
            Vec4i::new(1, 2, 3, 4).to_string_with_prefix("gm."),
            "gm.Vec4i( 1, 2, 3, 4 )"
        );
    }

    #[test]
    fn should_serialize_as_sequence() {
        let vector = Vec3f::new(1.0, 2.0, 3.0);
        let json = serde_json::to_string(&vector).unwrap();
        assert_eq!(json, "[1.0,2.0,3.0]");

        let loaded: Vec3f = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, vector);
    }

    #[test]
    fn should_encode_without_length_prefix() {
        let config = bincode::config::standard().with_fixed_int_encoding();
        let vector = Vec4i::new(1, -2, 3, -4);

        let bytes = bincode::serde::encode_to_vec(vector, config).unwrap();
        assert_eq!(bytes.len(), 4 * core::mem::size_of::<i32>());

        let (loaded, read): (Vec4i, usize) =
            bincode::serde::decode_from_slice(&bytes, config).unwrap();
        assert_eq!(loaded, vector);
        assert_eq!(read, bytes.len());
    }

    #[test]
    fn should_reject_wrong_length() {
        assert!(serde_json::from_str::<Vec3f>("[1.0,2.0]").is_err());
        assert!(serde_json::from_str::<Vec3f>("[1.0,2.0,3.0,4.0]").is_err());
    }
}
