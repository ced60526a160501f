use crate::{
    cross_product, dot_product, normalize, radians, FloatElement, Matrix,
    Vector,
};

/// Builds the transform of a camera at `position` looking toward the point `look`.
///
/// The camera looks down its negative Z axis, with `up` roughly along its positive Y axis,
/// in a right handed coordinate system.
///
/// # Returns
///
/// The world to camera matrix.
pub fn look_at<E: FloatElement>(
    position: Vector<E, 3>,
    look: Vector<E, 3>,
    up: Vector<E, 3>,
) -> Matrix<E, 4> {
    let forward = normalize(look - position);
    let right = normalize(cross_product(forward, normalize(up)));
    let up = cross_product(right, forward);

    let zero = E::zero();
    let dot = |axis: Vector<E, 3>| dot_product(axis, position);
    Matrix::from_rows([
        [right.x(), right.y(), right.z(), -dot(right)],
        [up.x(), up.y(), up.z(), -dot(up)],
        [-forward.x(), -forward.y(), -forward.z(), dot(forward)],
        [zero, zero, zero, E::one()],
    ])
}

/// Maps the box bounded by the given planes onto the `[-1, 1]` cube.
///
/// The near and far planes are distances along the negative Z axis.
pub fn orthographic_projection<E: FloatElement>(
    left: E,
    right: E,
    bottom: E,
    top: E,
    near: E,
    far: E,
) -> Matrix<E, 4> {
    let two = E::from_elem(2.0);
    let zero = E::zero();
    Matrix::from_rows([
        [two / (right - left), zero, zero, -(right + left) / (right - left)],
        [zero, two / (top - bottom), zero, -(top + bottom) / (top - bottom)],
        [zero, zero, -two / (far - near), -(far + near) / (far - near)],
        [zero, zero, zero, E::one()],
    ])
}

/// Maps the frustum bounded by the given planes onto the `[-1, 1]` cube.
///
/// `left`, `right`, `bottom` and `top` bound the near plane. The near and far planes are
/// positive distances along the negative Z axis.
pub fn perspective_projection<E: FloatElement>(
    left: E,
    right: E,
    bottom: E,
    top: E,
    near: E,
    far: E,
) -> Matrix<E, 4> {
    debug_assert!(near > E::zero(), "Near plane must lie in front of the camera");

    let two = E::from_elem(2.0);
    let zero = E::zero();
    Matrix::from_rows([
        [two * near / (right - left), zero, (right + left) / (right - left), zero],
        [zero, two * near / (top - bottom), (top + bottom) / (top - bottom), zero],
        [zero, zero, -(far + near) / (far - near), -two * far * near / (far - near)],
        [zero, zero, -E::one(), zero],
    ])
}

/// Symmetric perspective projection from a vertical field of view.
///
/// # Arguments
///
/// * `vertical_fov` - Vertical field of view, in degrees.
/// * `aspect_ratio` - Width over height of the image.
/// * `near` - Distance to the near plane.
/// * `far` - Distance to the far plane.
pub fn perspective_projection_fov<E: FloatElement>(
    vertical_fov: E,
    aspect_ratio: E,
    near: E,
    far: E,
) -> Matrix<E, 4> {
    let top = near * (radians(vertical_fov) / E::from_elem(2.0)).tan();
    let right = top * aspect_ratio;
    perspective_projection(-right, right, -top, top, near, far)
}

/// Maps normalized device coordinates onto the pixels of a viewport.
///
/// X and Y in `[-1, 1]` map onto `[offset, offset + dimensions]`. Depth maps from `[-1, 1]`
/// onto `[0, 1]`.
pub fn viewport_transform<E: FloatElement>(
    dimensions: Vector<E, 2>,
    offset: Vector<E, 2>,
) -> Matrix<E, 4> {
    let half = E::from_elem(0.5);
    let half_width = dimensions.x() * half;
    let half_height = dimensions.y() * half;
    let zero = E::zero();
    Matrix::from_rows([
        [half_width, zero, zero, offset.x() + half_width],
        [zero, half_height, zero, offset.y() + half_height],
        [zero, zero, half, half],
        [zero, zero, zero, E::one()],
    ])
}
