//! Annotation propagation passes
//!
//! Three passes, one per tree representation, executed in the order the
//! compiler lowers the document:
//!
//! 1. [`extract`] - resolve markers in the block tree, record raw payload
//!    text on the target nodes, and remove the markers
//! 2. [`promote`] - in the element tree, lift code-element annotations onto
//!    the preformatted wrapper that lowering introduced around them
//! 3. [`inject`] - in the render program, parse each payload and splice it
//!    into its construction call as a trailing property spread
//!
//! There is no feedback between stages; each pass is a plain function over
//! a `&mut` tree. Only injection can fail (a payload that does not parse as
//! an expression), and that failure is fatal to the compile.

pub mod extract;
pub mod inject;
pub mod promote;

pub use extract::extract;
pub use inject::inject;
pub use promote::promote;
