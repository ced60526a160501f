use crate::{length, FloatElement, Vector};

/// The point reached after travelling `magnitude` along a ray.
///
/// # Arguments
///
/// * `origin` - Origin of the ray.
/// * `direction` - Normalized direction of the ray.
/// * `magnitude` - Distance travelled along the direction.
pub fn ray_position<E: FloatElement, const N: usize>(
    origin: Vector<E, N>,
    direction: Vector<E, N>,
    magnitude: E,
) -> Vector<E, N> {
    debug_assert!(
        (length(direction) - E::one()).abs() < E::from_elem(1e-4),
        "Ray direction {direction} is not normalized"
    );

    origin + direction * magnitude
}
