//! Lookup helpers for asserting on tree shapes

use crate::block::Node;
use crate::program::ast::{ConstructorKind, Expr, ObjectEntry};

/// Depth-first search for the first block node with the given kind label.
pub fn find_kind<'a>(node: &'a Node, kind_name: &str) -> Option<&'a Node> {
    if node.kind_name() == kind_name {
        return Some(node);
    }
    node.children
        .iter()
        .find_map(|child| find_kind(child, kind_name))
}

/// Count markers remaining anywhere under a block node.
pub fn count_markers(node: &Node) -> usize {
    let own = usize::from(node.is_marker());
    own + node.children.iter().map(count_markers).sum::<usize>()
}

/// Depth-first search for the first construction call whose component
/// argument is a member access naming `component` (e.g. `_components.h1`).
pub fn find_construction_call<'a>(expr: &'a Expr, component: &str) -> Option<&'a Expr> {
    if let Expr::Call { callee, arguments } = expr {
        let recognized = matches!(
            callee.as_ref(),
            Expr::Ident(name) if ConstructorKind::from_callee_name(name).is_some()
        );
        if recognized {
            if let Some(Expr::Member { property, .. }) = arguments.first() {
                if property == component {
                    return Some(expr);
                }
            }
        }
    }
    subexpressions(expr)
        .into_iter()
        .find_map(|child| find_construction_call(child, component))
}

/// The property-set literal of a construction call.
pub fn property_set(call: &Expr) -> Option<&Vec<ObjectEntry>> {
    match call {
        Expr::Call { arguments, .. } => match arguments.get(1) {
            Some(Expr::Object(entries)) => Some(entries),
            _ => None,
        },
        _ => None,
    }
}

fn subexpressions(expr: &Expr) -> Vec<&Expr> {
    match expr {
        Expr::Array(items) => items.iter().collect(),
        Expr::Object(entries) => entries
            .iter()
            .filter_map(|entry| match entry {
                ObjectEntry::Property { value, .. } => Some(value),
                ObjectEntry::Spread(inner) => Some(inner),
                ObjectEntry::Shorthand(_) => None,
            })
            .collect(),
        Expr::Member { object, .. } => vec![object],
        Expr::Index { object, index } => vec![object, index],
        Expr::Call { callee, arguments } => {
            let mut children: Vec<&Expr> = vec![callee];
            children.extend(arguments.iter());
            children
        }
        Expr::Unary { operand, .. } => vec![operand],
        Expr::Binary { left, right, .. } => vec![left, right],
        Expr::Conditional {
            test,
            consequent,
            alternate,
        } => vec![test, consequent, alternate],
        Expr::Ident(_) | Expr::Str(_) | Expr::Number(_) | Expr::Bool(_) | Expr::Null => Vec::new(),
    }
}
