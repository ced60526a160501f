use crate::{
    dot_product, length_squared, quadratic_roots, FloatElement, Roots, Vector,
};

/// Intersects a ray with a sphere.
///
/// # Arguments
///
/// * `sphere_origin` - Center of the sphere.
/// * `sphere_radius` - Radius of the sphere.
/// * `ray_origin` - Origin of the ray.
/// * `ray_direction` - Normalized direction of the ray.
///
/// # Returns
///
/// The magnitudes along the ray at which it crosses the sphere, in ascending order.
/// Intersections behind the ray origin are discarded.
pub fn ray_sphere_intersection<E: FloatElement>(
    sphere_origin: Vector<E, 3>,
    sphere_radius: E,
    ray_origin: Vector<E, 3>,
    ray_direction: Vector<E, 3>,
) -> Roots<E> {
    let offset = ray_origin - sphere_origin;
    let a = length_squared(ray_direction);
    let b = E::from_elem(2.0) * dot_product(ray_direction, offset);
    let c = length_squared(offset) - sphere_radius * sphere_radius;

    match quadratic_roots(a, b, c) {
        Roots::Two(first, second) if first >= E::zero() => Roots::Two(first, second),
        Roots::Two(_, root) | Roots::One(root) if root >= E::zero() => Roots::One(root),
        _ => Roots::None,
    }
}
