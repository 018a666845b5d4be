//! Content Model - Ordered list of user-added text blocks and images
//!
//! This crate provides the in-memory content store: a mutable ordered
//! sequence of tagged items addressed purely by position. Insertion order
//! is the display and export order; there is no stable item identity.

mod item;
mod list;

pub use item::*;
pub use list::*;
