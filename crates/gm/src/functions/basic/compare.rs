use crate::{Elementwise, Range};

/// The minimum of the two inputs, per element.
///
/// # Arguments
///
/// * `value_a` - The first value to compare.
/// * `value_b` - The second value to compare.
pub fn min<T: Elementwise>(value_a: T, value_b: T) -> T {
    value_a.zip_map(value_b, |a, b| if b < a { b } else { a })
}

/// The maximum of the two inputs, per element.
///
/// # Arguments
///
/// * `value_a` - The first value to compare.
/// * `value_b` - The second value to compare.
pub fn max<T: Elementwise>(value_a: T, value_b: T) -> T {
    value_a.zip_map(value_b, |a, b| if a < b { b } else { a })
}

/// Clamps every element of `value` into the scalar `range`.
pub fn clamp<T: Elementwise>(value: T, range: &Range<T::Elem>) -> T {
    debug_assert!(
        range.min() <= range.max(),
        "Cannot clamp into the empty range {range:?}"
    );

    value.map(|elem| {
        if elem < range.min() {
            range.min()
        } else if elem > range.max() {
            range.max()
        } else {
            elem
        }
    })
}
