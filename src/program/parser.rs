//! Expression grammar parser
//!
//! Parses annotation payloads into [`Expr`] trees. The grammar accepts any
//! expression producing a spreadable value, not just object literals:
//! literals, identifiers, object and array literals (with spread entries and
//! trailing commas), member/index/call postfix chains, unary and binary
//! operators, and the conditional operator.
//!
//! Built as a chumsky parser over the logos token stream, with byte spans
//! carried through for error reporting.

use chumsky::{prelude::*, stream::Stream};
use std::fmt;
use std::ops::Range;

use crate::program::ast::{BinaryOp, Expr, ObjectEntry, PropertyKey, UnaryOp};
use crate::program::lexer::{self, Token};

/// Failure to read an annotation payload as an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionError {
    Lex { span: Range<usize> },
    Parse { span: Range<usize>, message: String },
}

impl fmt::Display for ExpressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionError::Lex { span } => {
                write!(
                    f,
                    "unrecognized character in expression at bytes {}..{}",
                    span.start, span.end
                )
            }
            ExpressionError::Parse { span, message } => {
                write!(
                    f,
                    "invalid expression at bytes {}..{}: {}",
                    span.start, span.end, message
                )
            }
        }
    }
}

impl std::error::Error for ExpressionError {}

/// Postfix operations folded onto an atom, innermost first.
enum Postfix {
    Member(String),
    Index(Expr),
    Call(Vec<Expr>),
}

fn expr_parser() -> impl Parser<Token, Expr, Error = Simple<Token>> {
    recursive(|expr| {
        let ident = select! { Token::Ident(name) => name };

        let literal = select! {
            Token::Str(value) => Expr::Str(value),
            Token::Number(raw) => Expr::Number(raw),
            Token::True => Expr::Bool(true),
            Token::False => Expr::Bool(false),
            Token::Null => Expr::Null,
        };

        let key = select! {
            Token::Ident(name) => PropertyKey::Ident(name),
            Token::Str(value) => PropertyKey::Str(value),
            Token::Number(raw) => PropertyKey::Num(raw),
        };

        let property = key
            .then_ignore(just(Token::Colon))
            .then(expr.clone())
            .map(|(key, value)| ObjectEntry::Property { key, value });

        let spread_entry = just(Token::Ellipsis)
            .ignore_then(expr.clone())
            .map(ObjectEntry::Spread);

        let shorthand = select! { Token::Ident(name) => ObjectEntry::Shorthand(name) };

        let object = spread_entry
            .or(property)
            .or(shorthand)
            .separated_by(just(Token::Comma))
            .allow_trailing()
            .delimited_by(just(Token::LBrace), just(Token::RBrace))
            .map(Expr::Object);

        let array = expr
            .clone()
            .separated_by(just(Token::Comma))
            .allow_trailing()
            .delimited_by(just(Token::LBracket), just(Token::RBracket))
            .map(Expr::Array);

        let paren = expr
            .clone()
            .delimited_by(just(Token::LParen), just(Token::RParen));

        let atom = literal
            .or(object)
            .or(array)
            .or(paren)
            .or(ident.clone().map(Expr::Ident));

        let member = just(Token::Dot).ignore_then(ident).map(Postfix::Member);
        let index = expr
            .clone()
            .delimited_by(just(Token::LBracket), just(Token::RBracket))
            .map(Postfix::Index);
        let call = expr
            .clone()
            .separated_by(just(Token::Comma))
            .allow_trailing()
            .delimited_by(just(Token::LParen), just(Token::RParen))
            .map(Postfix::Call);

        let postfix = atom
            .then(member.or(index).or(call).repeated())
            .foldl(|object, op| match op {
                Postfix::Member(property) => Expr::Member {
                    object: Box::new(object),
                    property,
                },
                Postfix::Index(index) => Expr::Index {
                    object: Box::new(object),
                    index: Box::new(index),
                },
                Postfix::Call(arguments) => Expr::Call {
                    callee: Box::new(object),
                    arguments,
                },
            });

        let unary = just(Token::Minus)
            .to(UnaryOp::Neg)
            .or(just(Token::Bang).to(UnaryOp::Not))
            .repeated()
            .then(postfix)
            .foldr(|op, operand| Expr::Unary {
                op,
                operand: Box::new(operand),
            });

        let product = unary
            .clone()
            .then(
                just(Token::Star)
                    .to(BinaryOp::Mul)
                    .or(just(Token::Slash).to(BinaryOp::Div))
                    .or(just(Token::Percent).to(BinaryOp::Rem))
                    .then(unary)
                    .repeated(),
            )
            .foldl(|left, (op, right)| Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            });

        let sum = product
            .clone()
            .then(
                just(Token::Plus)
                    .to(BinaryOp::Add)
                    .or(just(Token::Minus).to(BinaryOp::Sub))
                    .then(product)
                    .repeated(),
            )
            .foldl(|left, (op, right)| Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            });

        let comparison = sum
            .clone()
            .then(
                just(Token::Le)
                    .to(BinaryOp::Le)
                    .or(just(Token::Ge).to(BinaryOp::Ge))
                    .or(just(Token::Lt).to(BinaryOp::Lt))
                    .or(just(Token::Gt).to(BinaryOp::Gt))
                    .then(sum)
                    .repeated(),
            )
            .foldl(|left, (op, right)| Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            });

        let equality = comparison
            .clone()
            .then(
                just(Token::EqEq)
                    .to(BinaryOp::Eq)
                    .or(just(Token::NotEq).to(BinaryOp::NotEq))
                    .then(comparison)
                    .repeated(),
            )
            .foldl(|left, (op, right)| Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            });

        let logic_and = equality
            .clone()
            .then(
                just(Token::AndAnd)
                    .to(BinaryOp::And)
                    .then(equality)
                    .repeated(),
            )
            .foldl(|left, (op, right)| Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            });

        let logic_or = logic_and
            .clone()
            .then(
                just(Token::OrOr)
                    .to(BinaryOp::Or)
                    .then(logic_and)
                    .repeated(),
            )
            .foldl(|left, (op, right)| Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            });

        logic_or
            .then(
                just(Token::Question)
                    .ignore_then(expr.clone())
                    .then_ignore(just(Token::Colon))
                    .then(expr)
                    .or_not(),
            )
            .map(|(test, branches)| match branches {
                Some((consequent, alternate)) => Expr::Conditional {
                    test: Box::new(test),
                    consequent: Box::new(consequent),
                    alternate: Box::new(alternate),
                },
                None => test,
            })
    })
}

/// Parse a complete expression source string.
pub fn parse_expression(source: &str) -> Result<Expr, ExpressionError> {
    let tokens = lexer::tokenize(source).map_err(|span| ExpressionError::Lex { span })?;
    let end_of_input = source.len()..source.len() + 1;
    let stream = Stream::from_iter(end_of_input, tokens.into_iter());
    expr_parser()
        .then_ignore(end())
        .parse(stream)
        .map_err(first_parse_error)
}

/// Parse annotation text the way the injector consumes it: wrapped in
/// parentheses, so the payload is always read in expression position.
pub fn parse_annotation(text: &str) -> Result<Expr, ExpressionError> {
    parse_expression(&format!("({})", text.trim()))
}

fn first_parse_error(errors: Vec<Simple<Token>>) -> ExpressionError {
    match errors.into_iter().next() {
        Some(error) => ExpressionError::Parse {
            span: error.span(),
            message: error.to_string(),
        },
        None => ExpressionError::Parse {
            span: 0..0,
            message: "unknown parse error".to_string(),
        },
    }
}
