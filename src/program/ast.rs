//! Expression tree definitions for the render program

use serde::Serialize;

/// A render program: the top-level expressions produced by code generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program {
    pub body: Vec<Expr>,
}

impl Program {
    pub fn new(body: Vec<Expr>) -> Self {
        Program { body }
    }
}

/// An expression node.
///
/// Number literals keep their raw source text; the passes never evaluate or
/// re-render numbers, so there is no reason to lose the author's spelling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    Ident(String),
    Str(String),
    Number(String),
    Bool(bool),
    Null,
    Array(Vec<Expr>),
    Object(Vec<ObjectEntry>),
    Member {
        object: Box<Expr>,
        property: String,
    },
    Index {
        object: Box<Expr>,
        index: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        arguments: Vec<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Conditional {
        test: Box<Expr>,
        consequent: Box<Expr>,
        alternate: Box<Expr>,
    },
}

/// One entry of an object literal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ObjectEntry {
    Property { key: PropertyKey, value: Expr },
    Shorthand(String),
    Spread(Expr),
}

/// Key position of an object property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PropertyKey {
    Ident(String),
    Str(String),
    Num(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnaryOp {
    Neg,
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Eq,
    NotEq,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,
}

/// The code-generation modes of the element compiler, identified by the
/// construction-call callee each mode emits. A closed set so the injector's
/// matching logic never grows ad hoc string comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConstructorKind {
    /// Standard runtime, single child.
    Single,
    /// Standard runtime, multiple children.
    Multi,
    /// Development runtime.
    Dev,
}

impl ConstructorKind {
    pub const ALL: [ConstructorKind; 3] = [
        ConstructorKind::Single,
        ConstructorKind::Multi,
        ConstructorKind::Dev,
    ];

    pub fn callee_name(&self) -> &'static str {
        match self {
            ConstructorKind::Single => "_jsx",
            ConstructorKind::Multi => "_jsxs",
            ConstructorKind::Dev => "_jsxDEV",
        }
    }

    pub fn from_callee_name(name: &str) -> Option<ConstructorKind> {
        ConstructorKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.callee_name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_kind_round_trip() {
        for kind in ConstructorKind::ALL {
            assert_eq!(
                ConstructorKind::from_callee_name(kind.callee_name()),
                Some(kind)
            );
        }
        assert_eq!(ConstructorKind::from_callee_name("_jsxRuntime"), None);
    }
}
