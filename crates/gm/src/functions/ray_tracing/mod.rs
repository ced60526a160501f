mod aabb;
mod position;
mod sphere;

pub use aabb::*;
pub use position::*;
pub use sphere::*;
