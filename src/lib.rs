//! # marginalia
//!
//! Annotation carrying and injection passes for the marginalia document
//! compiler.
//!
//! Authors decorate document nodes with expression annotations
//! (`{{ foo: 'bar' }}` after an inline element, a dedicated trailing table
//! row, or a brace-wrapped code fence meta string). The compiler lowers a
//! document through three tree representations - the block tree, the element
//! tree, and the render program's expression tree - and this crate moves the
//! annotation payload across those stages until it is spliced into the
//! generated construction calls as an overriding property spread.
//!
//! ## Passes
//!
//! - [`passes::extract`] - resolve markers in the block tree and record the
//!   raw annotation text on their target nodes
//! - [`passes::promote`] - relocate code-element annotations onto the
//!   enclosing preformatted block element
//! - [`passes::inject`] - parse each carried payload and splice it into the
//!   matching construction call as a trailing spread entry
//!
//! The [`pipeline`] module bundles the three passes and keeps a running
//! report of how many annotations each stage handled.

pub mod block;
pub mod element;
pub mod formats;
pub mod passes;
pub mod pipeline;
pub mod program;
pub mod testing;

/// Reserved property key under which annotation text travels through the
/// element tree lowering and into construction-call property sets.
pub const ANNOTATION_KEY: &str = "annotation";

pub use pipeline::{AnnotationPipeline, PassReport, PipelineError};
