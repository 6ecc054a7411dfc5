//! Stand-in lowering and code generation for end-to-end tests
//!
//! The real document compiler lowers the annotated block tree into an
//! element tree, then generates the render program, calling one annotation
//! pass at each boundary. Integration tests need those boundaries, so this
//! module implements a small, fixed lowering: just enough of the real
//! shapes (preformatted wrappers around code, language class names,
//! children properties, the three constructor callees) to exercise every
//! path through the passes. It is test support, not a document compiler.

use crate::block::{Node, NodeKind};
use crate::element::{Element, ElementChild, ElementTree};
use crate::pipeline::{AnnotationPipeline, PassReport, PipelineError};
use crate::program::ast::{ConstructorKind, Expr, ObjectEntry, Program, PropertyKey};
use crate::ANNOTATION_KEY;

/// Which runtime the generated program targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeMode {
    Standard,
    Development,
}

/// Run the full pipeline over a block tree: extract, lower, promote,
/// generate, inject. Returns the finished program and the pass report.
pub fn compile(mut root: Node, mode: RuntimeMode) -> Result<(Program, PassReport), PipelineError> {
    let mut pipeline = AnnotationPipeline::new();
    pipeline.extract(&mut root);
    let mut elements = lower_to_elements(&root);
    pipeline.promote(&mut elements);
    let mut program = generate_program(&elements, mode);
    pipeline.inject(&mut program)?;
    Ok((program, pipeline.report()))
}

/// Lower a block tree into an element tree, mirroring each node's
/// annotation onto the element it becomes.
pub fn lower_to_elements(root: &Node) -> ElementTree {
    ElementTree::new(lower_children(root))
}

fn lower_children(node: &Node) -> Vec<ElementChild> {
    node.children.iter().flat_map(lower_node).collect()
}

fn lower_node(node: &Node) -> Vec<ElementChild> {
    match &node.kind {
        NodeKind::Root => lower_children(node),
        NodeKind::Text { value } => vec![ElementChild::Text(value.clone())],
        // Expressions that survived extraction render as plain text here
        NodeKind::InlineExpr { value } => vec![ElementChild::Text(value.clone())],
        NodeKind::Code { lang, value, .. } => {
            let mut code = Element::with_children(
                "code",
                vec![ElementChild::Text(format!("{}\n", value))],
            );
            if let Some(lang) = lang {
                code.set_property("className", format!("language-{}", lang));
            }
            // The logical code block's annotation surfaces on the nested
            // code element; the promoter lifts it onto the wrapper.
            code.annotation = node.annotation.clone();
            let pre = Element::with_children("pre", vec![ElementChild::Element(code)]);
            vec![ElementChild::Element(pre)]
        }
        NodeKind::InlineCode { value } => {
            let mut code =
                Element::with_children("code", vec![ElementChild::Text(value.clone())]);
            code.annotation = node.annotation.clone();
            vec![ElementChild::Element(code)]
        }
        NodeKind::Image { url, alt, .. } => {
            let mut img = Element::new("img");
            img.set_property("src", url.clone());
            img.set_property("alt", alt.clone());
            img.annotation = node.annotation.clone();
            vec![ElementChild::Element(img)]
        }
        NodeKind::Link { url, .. } => {
            let mut a = Element::with_children("a", lower_children(node));
            a.set_property("href", url.clone());
            a.annotation = node.annotation.clone();
            vec![ElementChild::Element(a)]
        }
        kind => {
            let tag = match kind {
                NodeKind::Paragraph => "p",
                NodeKind::Heading { depth } => heading_tag(*depth),
                NodeKind::Emphasis => "em",
                NodeKind::Strong => "strong",
                NodeKind::Delete => "del",
                NodeKind::List { ordered: true } => "ol",
                NodeKind::List { ordered: false } => "ul",
                NodeKind::ListItem => "li",
                NodeKind::Blockquote => "blockquote",
                NodeKind::Table => "table",
                NodeKind::TableRow => "tr",
                NodeKind::TableCell => "td",
                NodeKind::ThematicBreak => "hr",
                _ => "div",
            };
            let mut element = Element::with_children(tag, lower_children(node));
            element.annotation = node.annotation.clone();
            vec![ElementChild::Element(element)]
        }
    }
}

fn heading_tag(depth: u8) -> &'static str {
    match depth {
        1 => "h1",
        2 => "h2",
        3 => "h3",
        4 => "h4",
        5 => "h5",
        _ => "h6",
    }
}

/// Generate the render program for a lowered tree: a fragment construction
/// call wrapping one construction call per element.
pub fn generate_program(tree: &ElementTree, mode: RuntimeMode) -> Program {
    let children: Vec<Expr> = tree.children.iter().map(|c| child_to_expr(c, mode)).collect();
    let kind = constructor_for(children.len(), mode);
    let entries = vec![children_entry(children)];
    Program::new(vec![Expr::Call {
        callee: Box::new(Expr::Ident(kind.callee_name().to_string())),
        arguments: vec![Expr::Ident("_Fragment".to_string()), Expr::Object(entries)],
    }])
}

fn child_to_expr(child: &ElementChild, mode: RuntimeMode) -> Expr {
    match child {
        ElementChild::Text(value) => Expr::Str(value.clone()),
        ElementChild::Element(element) => element_to_expr(element, mode),
    }
}

fn element_to_expr(element: &Element, mode: RuntimeMode) -> Expr {
    let mut entries: Vec<ObjectEntry> = element
        .properties
        .iter()
        .map(|(name, value)| ObjectEntry::Property {
            key: PropertyKey::Ident(name.clone()),
            value: Expr::Str(value.clone()),
        })
        .collect();

    let children: Vec<Expr> = element
        .children
        .iter()
        .map(|c| child_to_expr(c, mode))
        .collect();
    let kind = constructor_for(children.len(), mode);
    if !children.is_empty() {
        entries.push(children_entry(children));
    }

    if let Some(annotation) = &element.annotation {
        entries.push(ObjectEntry::Property {
            key: PropertyKey::Ident(ANNOTATION_KEY.to_string()),
            value: Expr::Str(annotation.clone()),
        });
    }

    Expr::Call {
        callee: Box::new(Expr::Ident(kind.callee_name().to_string())),
        arguments: vec![
            Expr::Member {
                object: Box::new(Expr::Ident("_components".to_string())),
                property: element.tag.clone(),
            },
            Expr::Object(entries),
        ],
    }
}

fn children_entry(mut children: Vec<Expr>) -> ObjectEntry {
    let value = if children.len() == 1 {
        children.remove(0)
    } else {
        Expr::Array(children)
    };
    ObjectEntry::Property {
        key: PropertyKey::Ident("children".to_string()),
        value,
    }
}

fn constructor_for(child_count: usize, mode: RuntimeMode) -> ConstructorKind {
    match mode {
        RuntimeMode::Development => ConstructorKind::Dev,
        RuntimeMode::Standard if child_count > 1 => ConstructorKind::Multi,
        RuntimeMode::Standard => ConstructorKind::Single,
    }
}
