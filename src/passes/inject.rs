//! Render-program annotation injector
//!
//! The last pass. Code generation has turned each annotated element into a
//! construction call whose property-set literal carries the raw payload
//! under the reserved key. For every such call this pass parses the payload
//! (wrapped in parentheses, with the full expression grammar) and replaces
//! the carrier entry with a spread appended after all literal entries, so
//! the annotation's fields override same-named generated defaults.
//!
//! A payload that does not parse is a fatal compile error. Property sets
//! without the reserved entry are left exactly as generated.

use crate::program::ast::{ConstructorKind, Expr, ObjectEntry, Program, PropertyKey};
use crate::program::parser::{parse_annotation, ExpressionError};
use crate::ANNOTATION_KEY;

/// Splice every carried annotation into its construction call.
///
/// Returns the number of spread entries injected.
pub fn inject(program: &mut Program) -> Result<usize, ExpressionError> {
    let mut injected = 0;
    for expr in &mut program.body {
        visit(expr, &mut injected)?;
    }
    Ok(injected)
}

fn visit(expr: &mut Expr, injected: &mut usize) -> Result<(), ExpressionError> {
    if let Expr::Call { callee, arguments } = expr {
        if is_constructor(callee) {
            if let Some(Expr::Object(entries)) = arguments.get_mut(1) {
                splice_annotation(entries, injected)?;
            }
        }
    }

    match expr {
        Expr::Array(items) => {
            for item in items {
                visit(item, injected)?;
            }
        }
        Expr::Object(entries) => {
            for entry in entries {
                match entry {
                    ObjectEntry::Property { value, .. } => visit(value, injected)?,
                    ObjectEntry::Spread(inner) => visit(inner, injected)?,
                    ObjectEntry::Shorthand(_) => {}
                }
            }
        }
        Expr::Member { object, .. } => visit(object, injected)?,
        Expr::Index { object, index } => {
            visit(object, injected)?;
            visit(index, injected)?;
        }
        Expr::Call { callee, arguments } => {
            visit(callee, injected)?;
            for argument in arguments {
                visit(argument, injected)?;
            }
        }
        Expr::Unary { operand, .. } => visit(operand, injected)?,
        Expr::Binary { left, right, .. } => {
            visit(left, injected)?;
            visit(right, injected)?;
        }
        Expr::Conditional {
            test,
            consequent,
            alternate,
        } => {
            visit(test, injected)?;
            visit(consequent, injected)?;
            visit(alternate, injected)?;
        }
        Expr::Ident(_) | Expr::Str(_) | Expr::Number(_) | Expr::Bool(_) | Expr::Null => {}
    }
    Ok(())
}

fn is_constructor(callee: &Expr) -> bool {
    matches!(callee, Expr::Ident(name) if ConstructorKind::from_callee_name(name).is_some())
}

/// The carrier entry: an identifier-keyed property under the reserved key
/// whose value is a string literal. Anything else is not a match.
fn is_annotation_entry(entry: &ObjectEntry) -> bool {
    matches!(
        entry,
        ObjectEntry::Property {
            key: PropertyKey::Ident(key),
            value: Expr::Str(_),
        } if key == ANNOTATION_KEY
    )
}

fn splice_annotation(
    entries: &mut Vec<ObjectEntry>,
    injected: &mut usize,
) -> Result<(), ExpressionError> {
    let position = match entries.iter().position(is_annotation_entry) {
        Some(position) => position,
        None => return Ok(()),
    };
    let text = match entries.remove(position) {
        ObjectEntry::Property {
            value: Expr::Str(text),
            ..
        } => text,
        // is_annotation_entry only matches string-valued properties
        _ => return Ok(()),
    };
    let parsed = parse_annotation(&text)?;
    entries.push(ObjectEntry::Spread(parsed));
    *injected += 1;
    Ok(())
}
