use num_traits::One;

use super::{max, min};
use crate::{Element, Elementwise, Range, Vector};

/// The content of a range: its length, area or volume depending on the dimension.
///
/// # Returns
///
/// The product of the extents along every axis. Integer contents saturate at the highest
/// representable value.
pub fn content<T>(range: &Range<T>) -> T::Elem
where
    T: Elementwise,
    T::Elem: Element,
{
    debug_assert!(!range.is_empty(), "Content of the empty range {range:?}");

    range
        .max()
        .zip_map(range.min(), |max, min| max.saturating_sub(min))
        .fold(<T::Elem as One>::one(), |acc, extent| acc.saturating_mul(extent))
}

/// The region shared by both ranges.
///
/// The result is empty when the ranges do not overlap.
pub fn intersection<T: Elementwise>(range_a: &Range<T>, range_b: &Range<T>) -> Range<T> {
    Range::new(
        max(range_a.min(), range_b.min()),
        min(range_a.max(), range_b.max()),
    )
}

/// Growing a range so that it encloses another value.
pub trait Expand<Rhs> {
    /// The smallest range enclosing both `self` and `rhs`.
    fn expand(&self, rhs: &Rhs) -> Self;
}

/// Tests whether a range encloses another value.
pub trait Contains<Rhs> {
    /// Whether `containee` lies within `self`, bounds included.
    fn contains(&self, containee: &Rhs) -> bool;
}

impl<T: Elementwise> Expand<Range<T>> for Range<T> {
    fn expand(&self, rhs: &Range<T>) -> Self {
        Range::new(min(self.min(), rhs.min()), max(self.max(), rhs.max()))
    }
}

impl<T: Elementwise> Contains<Range<T>> for Range<T> {
    fn contains(&self, containee: &Range<T>) -> bool {
        contains_point(self, containee.min()) && contains_point(self, containee.max())
    }
}

fn expand_point<T: Elementwise>(range: &Range<T>, point: T) -> Range<T> {
    Range::new(min(range.min(), point), max(range.max(), point))
}

fn contains_point<T: Elementwise>(range: &Range<T>, point: T) -> bool {
    range.min().all(point, |min, point| min <= point)
        && point.all(range.max(), |point, max| point <= max)
}

impl<E: Element, const N: usize> Expand<Vector<E, N>> for Range<Vector<E, N>> {
    fn expand(&self, rhs: &Vector<E, N>) -> Self {
        expand_point(self, *rhs)
    }
}

impl<E: Element, const N: usize> Contains<Vector<E, N>> for Range<Vector<E, N>> {
    fn contains(&self, containee: &Vector<E, N>) -> bool {
        contains_point(self, *containee)
    }
}

macro_rules! scalar_range_ops {
    ($($elem:ty),*) => {
        $(
            impl Expand<$elem> for Range<$elem> {
                fn expand(&self, rhs: &$elem) -> Self {
                    expand_point(self, *rhs)
                }
            }

            impl Contains<$elem> for Range<$elem> {
                fn contains(&self, containee: &$elem) -> bool {
                    contains_point(self, *containee)
                }
            }
        )*
    };
}

scalar_range_ops!(f32, f64, i32, i64);

/// Expands `range` to enclose `rhs`, which is either a value or another range.
pub fn expand<T, Rhs>(range: &Range<T>, rhs: &Rhs) -> Range<T>
where
    Range<T>: Expand<Rhs>,
{
    range.expand(rhs)
}

/// Whether `container` encloses `containee`, which is either a value or another range.
pub fn contains<T, Rhs>(container: &Range<T>, containee: &Rhs) -> bool
where
    Range<T>: Contains<Rhs>,
{
    container.contains(containee)
}

/// The axis along which the box is the longest, the first one on ties.
pub fn longest_axis<E: Element, const N: usize>(range: &Range<Vector<E, N>>) -> usize {
    let extent = range.max() - range.min();

    let mut longest = 0;
    for axis in 1..N {
        if extent[axis] > extent[longest] {
            longest = axis;
        }
    }
    longest
}
