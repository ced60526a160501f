use core::fmt;

use serde::{Deserialize, Serialize};

use crate::{ClassName, Element, Elementwise, Vector};

/// Closed range between a minimum and a maximum value.
///
/// The bounds may be scalars or vectors, in which case the range is an axis-aligned box.
/// A default range is *empty*: its minimum is the highest representable value and its
/// maximum the lowest, so expanding it by any value yields a range holding only that value.
#[derive(new, Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Range<T> {
    min: T,
    max: T,
}

/// Range of `f32` values.
pub type FloatRange = Range<f32>;
/// Range of `f64` values.
pub type DoubleRange = Range<f64>;
/// Range of `i32` values.
pub type IntRange = Range<i32>;
/// Axis-aligned rectangle.
pub type Vec2fRange = Range<Vector<f32, 2>>;
/// Axis-aligned box.
pub type Vec3fRange = Range<Vector<f32, 3>>;
/// Range of four dimensional `f32` vectors.
pub type Vec4fRange = Range<Vector<f32, 4>>;
/// Integer rectangle, such as a pixel region.
pub type Vec2iRange = Range<Vector<i32, 2>>;
/// Integer box, such as a voxel region.
pub type Vec3iRange = Range<Vector<i32, 3>>;
/// Range of four dimensional `i32` vectors.
pub type Vec4iRange = Range<Vector<i32, 4>>;

impl<T: Copy> Range<T> {
    /// The minimum bound.
    pub fn min(&self) -> T {
        self.min
    }

    /// The maximum bound.
    pub fn max(&self) -> T {
        self.max
    }

    /// Mutable access to the minimum bound.
    pub fn min_mut(&mut self) -> &mut T {
        &mut self.min
    }

    /// Mutable access to the maximum bound.
    pub fn max_mut(&mut self) -> &mut T {
        &mut self.max
    }
}

impl<T: Elementwise> Range<T> {
    /// Whether any element of the minimum exceeds the corresponding element of the maximum.
    pub fn is_empty(&self) -> bool {
        !self.min.all(self.max, |min, max| min <= max)
    }
}

impl<T> Default for Range<T>
where
    T: Elementwise,
    T::Elem: Element,
{
    fn default() -> Self {
        Self {
            min: T::splat(<T::Elem as Element>::highest()),
            max: T::splat(<T::Elem as Element>::lowest()),
        }
    }
}

impl<T: ClassName> ClassName for Range<T> {
    fn class_name() -> String {
        format!("{}Range", T::class_name())
    }
}

impl<T: Elementwise> Elementwise for Range<T> {
    type Elem = T::Elem;

    fn splat(elem: Self::Elem) -> Self {
        Self {
            min: T::splat(elem),
            max: T::splat(elem),
        }
    }

    fn map<F: FnMut(Self::Elem) -> Self::Elem>(self, mut func: F) -> Self {
        Self {
            min: self.min.map(&mut func),
            max: self.max.map(&mut func),
        }
    }

    fn zip_map<F: FnMut(Self::Elem, Self::Elem) -> Self::Elem>(
        self,
        other: Self,
        mut func: F,
    ) -> Self {
        Self {
            min: self.min.zip_map(other.min, &mut func),
            max: self.max.zip_map(other.max, &mut func),
        }
    }

    fn fold<A, F: FnMut(A, Self::Elem) -> A>(self, init: A, mut func: F) -> A {
        let acc = self.min.fold(init, &mut func);
        self.max.fold(acc, &mut func)
    }

    fn all<F: FnMut(Self::Elem, Self::Elem) -> bool>(self, other: Self, mut func: F) -> bool {
        self.min.all(other.min, &mut func) && self.max.all(other.max, &mut func)
    }
}

impl<T: ClassName + fmt::Display> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}( {}, {} )", Self::class_name(), self.min, self.max)
    }
}
