#![warn(missing_docs)]

//! # GraphicsMath
//!
//! Small, fixed-size math for renderers: vectors, square matrices and min/max ranges over
//! float and integer elements, along with the basic, linear algebra and ray tracing
//! functions operating on them.
//!
//! Every function that makes sense element-wise is generic over [Elementwise], so a single
//! `min` covers scalars, vectors and matrices alike.
//!
//! ```
//! use gm::{cross_product, normalize, Vec3f};
//!
//! let normal = normalize(cross_product(Vec3f::new(1.0, 0.0, 0.0), Vec3f::new(0.0, 1.0, 0.0)));
//! assert_eq!(normal, Vec3f::new(0.0, 0.0, 1.0));
//! ```

#[macro_use]
extern crate derive_new;

mod element;

/// Value types: vectors, matrices and ranges.
pub mod types;

/// Free functions operating on the value types.
pub mod functions;

pub use element::*;
pub use functions::*;
pub use types::*;
