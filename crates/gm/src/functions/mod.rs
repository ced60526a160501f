/// Rounding, comparison, interpolation, random numbers and range functions.
pub mod basic;

/// Vector products and lengths, matrix operations, transforms and projections.
pub mod linear_algebra;

/// Positions along rays and ray-primitive intersection tests.
pub mod ray_tracing;

pub use basic::*;
pub use linear_algebra::*;
pub use ray_tracing::*;
