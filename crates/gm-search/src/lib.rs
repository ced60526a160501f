#![warn(missing_docs)]

//! # GraphicsMath Search
//!
//! Lookup tables backing the search box of the generated documentation.
//!
//! Every table maps a lowercase key to the documented entities sharing it, each with its
//! anchor into the HTML pages. Tables are split into one script per leading key character
//! and announced through a manifest listing the populated sections.

#[macro_use]
extern crate derive_new;

mod entry;
mod error;
mod html;
mod index;
mod key;
mod manifest;
mod script;

pub use entry::*;
pub use error::*;
pub use html::*;
pub use index::*;
pub use key::*;
pub use manifest::*;
pub use script::*;
