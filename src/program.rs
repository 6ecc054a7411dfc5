//! Expression tree of the generated render program
//!
//! The last lowering stage turns the element tree into a render program:
//! nested construction calls that build the document's output at runtime.
//! This module defines that program's expression tree, the closed set of
//! recognized construction callees, and the expression grammar used to
//! parse annotation payloads at injection time.
//!
//! The grammar lives here and nowhere earlier: annotation text is carried
//! verbatim from the block tree so that the exact source expression reaches
//! the program stage, and only this stage needs a parser for it.

pub mod ast;
pub mod lexer;
pub mod parser;

pub use ast::{BinaryOp, ConstructorKind, Expr, ObjectEntry, Program, PropertyKey, UnaryOp};
pub use lexer::Token;
pub use parser::{parse_annotation, parse_expression, ExpressionError};
