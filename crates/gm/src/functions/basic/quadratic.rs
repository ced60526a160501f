use crate::FloatElement;

/// Real roots of an equation, in ascending order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Roots<E> {
    /// The equation has no real root.
    None,
    /// A single (possibly repeated) root.
    One(E),
    /// Two distinct roots, the smaller first.
    Two(E, E),
}

impl<E: Copy> Roots<E> {
    /// Number of roots.
    pub fn count(&self) -> usize {
        match self {
            Roots::None => 0,
            Roots::One(_) => 1,
            Roots::Two(..) => 2,
        }
    }

    /// The smallest root, if any.
    pub fn first(&self) -> Option<E> {
        match *self {
            Roots::None => None,
            Roots::One(root) | Roots::Two(root, _) => Some(root),
        }
    }

    /// Collects the roots into a vector.
    pub fn to_vec(&self) -> Vec<E> {
        match *self {
            Roots::None => Vec::new(),
            Roots::One(root) => vec![root],
            Roots::Two(first, second) => vec![first, second],
        }
    }
}

/// Solves `a * x^2 + b * x + c = 0` for real `x`.
///
/// A zero `a` degrades into the linear equation `b * x + c = 0`.
///
/// # Returns
///
/// The real roots, in ascending order.
pub fn quadratic_roots<E: FloatElement>(a: E, b: E, c: E) -> Roots<E> {
    if a == E::zero() {
        if b == E::zero() {
            return Roots::None;
        }
        return Roots::One(-c / b);
    }

    let discriminant = b * b - E::from_elem(4.0) * a * c;
    if discriminant < E::zero() {
        return Roots::None;
    }
    if discriminant == E::zero() {
        return Roots::One(E::from_elem(-0.5) * b / a);
    }

    // Avoids cancellation between `b` and the square root of the discriminant.
    let root = discriminant.sqrt();
    let q = if b < E::zero() {
        E::from_elem(-0.5) * (b - root)
    } else {
        E::from_elem(-0.5) * (b + root)
    };

    let (first, second) = (q / a, c / q);
    if first <= second {
        Roots::Two(first, second)
    } else {
        Roots::Two(second, first)
    }
}
