use core::fmt::Debug;

/// A scalar or a fixed-size aggregate of scalars on which operations apply per element.
///
/// Scalars, vectors, matrices and ranges all implement this trait, which lets every
/// element-wise function be written once.
pub trait Elementwise: Copy + PartialEq + Debug {
    /// The scalar type of each element.
    type Elem: Copy + PartialOrd + Debug;

    /// Creates a value with every element set to `elem`.
    fn splat(elem: Self::Elem) -> Self;

    /// Applies `func` to every element.
    fn map<F: FnMut(Self::Elem) -> Self::Elem>(self, func: F) -> Self;

    /// Applies `func` to every pair of corresponding elements.
    fn zip_map<F: FnMut(Self::Elem, Self::Elem) -> Self::Elem>(self, other: Self, func: F)
        -> Self;

    /// Reduces the elements, in storage order.
    fn fold<A, F: FnMut(A, Self::Elem) -> A>(self, init: A, func: F) -> A;

    /// Whether `func` holds for every pair of corresponding elements.
    ///
    /// Stops at the first pair for which it does not.
    fn all<F: FnMut(Self::Elem, Self::Elem) -> bool>(self, other: Self, func: F) -> bool;

    /// Whether any of the element values is a NaN.
    #[allow(clippy::eq_op)]
    fn has_nans(self) -> bool {
        !self.all(self, |lhs, rhs| lhs == rhs)
    }
}

impl Elementwise for bool {
    type Elem = bool;

    fn splat(elem: Self::Elem) -> Self {
        elem
    }

    fn map<F: FnMut(Self::Elem) -> Self::Elem>(self, mut func: F) -> Self {
        func(self)
    }

    fn zip_map<F: FnMut(Self::Elem, Self::Elem) -> Self::Elem>(
        self,
        other: Self,
        mut func: F,
    ) -> Self {
        func(self, other)
    }

    fn fold<A, F: FnMut(A, Self::Elem) -> A>(self, init: A, mut func: F) -> A {
        func(init, self)
    }

    fn all<F: FnMut(Self::Elem, Self::Elem) -> bool>(self, other: Self, mut func: F) -> bool {
        func(self, other)
    }
}
