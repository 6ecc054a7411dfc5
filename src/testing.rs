//! Test support for the annotation passes
//!
//! The passes sit between stages of an external compiler: the document
//! parser hands them a block tree, lowering hands them an element tree, and
//! code generation hands them a render program. Tests need all three, so
//! this module ships succinct fixture factories, lookup assertions, and a
//! deliberately small stand-in for the lowering and code-generation steps
//! the real compiler performs between the passes.

pub mod assertions;
pub mod factories;
pub mod lowering;
