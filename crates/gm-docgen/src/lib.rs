#![warn(missing_docs)]

//! # GraphicsMath Docgen
//!
//! Catalogs the public API of the `gm` crate and writes the search tables of its
//! generated documentation.

#[macro_use]
extern crate derive_new;

mod catalog;
mod config;
mod generate;

pub use catalog::*;
pub use config::*;
pub use generate::*;
