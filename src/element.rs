//! Element tree representation of a lowered document
//!
//! The element tree is the presentation-shaped structure the block tree is
//! lowered into: tag-named elements with property sets and text children.
//! Lowering mirrors each block node's annotation into the corresponding
//! element, where the promoter pass corrects the one structural mismatch
//! lowering introduces (code inside a preformatted wrapper).

pub mod node;

pub use node::{Element, ElementChild, ElementTree};
