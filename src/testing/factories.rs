//! Fixture factories for building block trees succinctly

use crate::block::{Node, NodeKind};

pub fn root(children: Vec<Node>) -> Node {
    Node::with_children(NodeKind::Root, children)
}

pub fn paragraph(children: Vec<Node>) -> Node {
    Node::with_children(NodeKind::Paragraph, children)
}

pub fn heading(depth: u8, children: Vec<Node>) -> Node {
    Node::with_children(NodeKind::Heading { depth }, children)
}

pub fn text(value: &str) -> Node {
    Node::new(NodeKind::Text {
        value: value.to_string(),
    })
}

/// An inline expression node. Pass the value exactly as the parser leaves
/// it: for the `{{ ... }}` marker form that is the text with one brace pair
/// still attached, e.g. `marker("{ foo: 'bar' }")`.
pub fn marker(value: &str) -> Node {
    inline_expr(value)
}

pub fn inline_expr(value: &str) -> Node {
    Node::new(NodeKind::InlineExpr {
        value: value.to_string(),
    })
}

pub fn emphasis(children: Vec<Node>) -> Node {
    Node::with_children(NodeKind::Emphasis, children)
}

pub fn strong(children: Vec<Node>) -> Node {
    Node::with_children(NodeKind::Strong, children)
}

pub fn delete(children: Vec<Node>) -> Node {
    Node::with_children(NodeKind::Delete, children)
}

pub fn inline_code(value: &str) -> Node {
    Node::new(NodeKind::InlineCode {
        value: value.to_string(),
    })
}

pub fn code(lang: Option<&str>, meta: Option<&str>, value: &str) -> Node {
    Node::new(NodeKind::Code {
        lang: lang.map(str::to_string),
        meta: meta.map(str::to_string),
        value: value.to_string(),
    })
}

pub fn link(url: &str, children: Vec<Node>) -> Node {
    Node::with_children(
        NodeKind::Link {
            url: url.to_string(),
            title: None,
        },
        children,
    )
}

pub fn image(url: &str, alt: &str) -> Node {
    Node::new(NodeKind::Image {
        url: url.to_string(),
        alt: alt.to_string(),
        title: None,
    })
}

pub fn list(ordered: bool, items: Vec<Node>) -> Node {
    Node::with_children(NodeKind::List { ordered }, items)
}

pub fn list_item(children: Vec<Node>) -> Node {
    Node::with_children(NodeKind::ListItem, children)
}

pub fn blockquote(children: Vec<Node>) -> Node {
    Node::with_children(NodeKind::Blockquote, children)
}

pub fn table(rows: Vec<Node>) -> Node {
    Node::with_children(NodeKind::Table, rows)
}

pub fn row(cells: Vec<Node>) -> Node {
    Node::with_children(NodeKind::TableRow, cells)
}

pub fn cell(children: Vec<Node>) -> Node {
    Node::with_children(NodeKind::TableCell, children)
}

pub fn thematic_break() -> Node {
    Node::new(NodeKind::ThematicBreak)
}
