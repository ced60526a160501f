use core::fmt::{Debug, Display};
use core::ops::Neg;

use num_traits::{Float, Num, NumCast, ToPrimitive};
use rand::{Rng, RngCore};

use crate::types::{ClassName, Elementwise};

/// Scalar element stored in every vector, matrix and range.
pub trait Element:
    Num
    + NumCast
    + ToPrimitive
    + ElementConversion
    + ElementRandom
    + Elementwise<Elem = Self>
    + Neg<Output = Self>
    + Copy
    + PartialOrd
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + 'static
{
    /// Suffix appended to class names, `f` for `Vec3f`.
    const SUFFIX: &'static str;

    /// Name of the scalar range class prefix, `Float` for `FloatRange`.
    const SCALAR_NAME: &'static str;

    /// The lowest representable value.
    fn lowest() -> Self;

    /// The highest representable value.
    fn highest() -> Self;

    /// `self - rhs`, clamped to the representable values for integers.
    fn saturating_sub(self, rhs: Self) -> Self;

    /// `self * rhs`, clamped to the representable values for integers.
    fn saturating_mul(self, rhs: Self) -> Self;
}

/// Floating point element, required by rounding, lengths, angles and projections.
pub trait FloatElement: Element + Float {}

/// Conversion between element types.
pub trait ElementConversion {
    /// Converts any primitive into this element.
    ///
    /// Values that cannot be represented (NaN or infinity into an integer) convert to zero.
    fn from_elem<E: ToPrimitive>(elem: E) -> Self;

    /// Converts this element into another element type.
    fn elem<E: Element>(self) -> E;
}

/// Uniform sampling of an element between two bounds.
pub trait ElementRandom {
    /// Samples a value between `min` and `max`.
    ///
    /// Floats are sampled in `[min, max)` and integers in `[min, max]`. When the bounds are
    /// empty, `min` is returned.
    fn random_between(min: Self, max: Self, rng: &mut dyn RngCore) -> Self
    where
        Self: Sized;
}

macro_rules! make_element {
    (
        ty $type:ident,
        suffix $suffix:expr,
        scalar $scalar:expr,
        convert $convert:expr,
        random $random:expr,
        saturating $sub:expr, $mul:expr
    ) => {
        impl Element for $type {
            const SUFFIX: &'static str = $suffix;
            const SCALAR_NAME: &'static str = $scalar;

            fn lowest() -> Self {
                $type::MIN
            }

            fn highest() -> Self {
                $type::MAX
            }

            fn saturating_sub(self, rhs: Self) -> Self {
                $sub(self, rhs)
            }

            fn saturating_mul(self, rhs: Self) -> Self {
                $mul(self, rhs)
            }
        }

        impl ClassName for $type {
            fn class_name() -> String {
                $scalar.to_string()
            }
        }

        impl ElementConversion for $type {
            fn from_elem<E: ToPrimitive>(elem: E) -> Self {
                $convert(&elem)
            }

            fn elem<E: Element>(self) -> E {
                E::from_elem(self)
            }
        }

        impl ElementRandom for $type {
            fn random_between(min: Self, max: Self, rng: &mut dyn RngCore) -> Self {
                $random(min, max, rng)
            }
        }

        impl Elementwise for $type {
            type Elem = $type;

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
    };
    (
        float $float:ident,
        suffix $suffix:expr,
        scalar $scalar:expr,
        convert $convert:expr
    ) => {
        make_element!(
            ty $float,
            suffix $suffix,
            scalar $scalar,
            convert $convert,
            random |min: $float, max: $float, rng: &mut dyn RngCore| {
                if min < max {
                    rng.gen_range(min..max)
                } else {
                    min
                }
            },
            saturating |lhs: $float, rhs: $float| lhs - rhs, |lhs: $float, rhs: $float| lhs * rhs
        );

        impl FloatElement for $float {}
    };
    (
        int $int:ident,
        suffix $suffix:expr,
        scalar $scalar:expr,
        convert $convert:expr
    ) => {
        make_element!(
            ty $int,
            suffix $suffix,
            scalar $scalar,
            convert $convert,
            random |min: $int, max: $int, rng: &mut dyn RngCore| {
                if min <= max {
                    rng.gen_range(min..=max)
                } else {
                    min
                }
            },
            saturating $int::saturating_sub, $int::saturating_mul
        );
    };
}

make_element!(
    float f32,
    suffix "f",
    scalar "Float",
    convert |elem: &dyn ToPrimitive| elem.to_f32().unwrap_or(0.0)
);

make_element!(
    float f64,
    suffix "d",
    scalar "Double",
    convert |elem: &dyn ToPrimitive| elem.to_f64().unwrap_or(0.0)
);

make_element!(
    int i32,
    suffix "i",
    scalar "Int",
    convert |elem: &dyn ToPrimitive| elem.to_i32().unwrap_or(0)
);

make_element!(
    int i64,
    suffix "l",
    scalar "Long",
    convert |elem: &dyn ToPrimitive| elem.to_i64().unwrap_or(0)
);
