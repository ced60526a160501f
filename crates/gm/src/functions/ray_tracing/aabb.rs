use crate::{FloatElement, Range, Vector};

/// Intersects a ray with an axis-aligned box, using the slab method.
///
/// Zero direction components are handled through infinite slab distances.
///
/// # Returns
///
/// The magnitudes at which the ray enters and exits the box, or `None` on a miss.
/// The entry magnitude is negative when the ray starts inside the box.
pub fn ray_aabb_intersection<E: FloatElement, const N: usize>(
    ray_origin: Vector<E, N>,
    ray_direction: Vector<E, N>,
    aabb: &Range<Vector<E, N>>,
) -> Option<Range<E>> {
    let mut enter = E::neg_infinity();
    let mut exit = E::infinity();

    for axis in 0..N {
        let inverse_direction = E::one() / ray_direction[axis];
        let mut near = (aabb.min()[axis] - ray_origin[axis]) * inverse_direction;
        let mut far = (aabb.max()[axis] - ray_origin[axis]) * inverse_direction;
        if near > far {
            core::mem::swap(&mut near, &mut far);
        }

        // NaN slabs, from origins lying on a slab plane, leave the interval untouched.
        enter = enter.max(near);
        exit = exit.min(far);
        if enter > exit {
            return None;
        }
    }

    if exit < E::zero() {
        return None;
    }
    Some(Range::new(enter, exit))
}
