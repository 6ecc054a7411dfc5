//! Block tree representation of a parsed document
//!
//! The block tree is the semantic document structure produced by the
//! document parser: headings, paragraphs, lists, tables, code fences, and
//! the inline runs inside them. It is the representation the annotation
//! extractor operates on, before any lowering towards the element tree.
//!
//! Annotation markers appear in this tree as [`NodeKind::InlineExpr`] nodes
//! whose value is still wrapped in one pair of braces (the parser strips the
//! outer pair of the `{{ ... }}` source form).

pub mod node;

pub use node::{Node, NodeKind};
