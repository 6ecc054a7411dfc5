//! Block tree node definitions
//!
//! A [`Node`] is one unit of the block tree: a kind tag, an ordered child
//! sequence (left empty on leaves), and an optional annotation. The
//! annotation is a typed field rather than an entry in an open metadata bag,
//! so a node can never carry two payloads under colliding keys.

use serde::Serialize;

/// A single node of the block tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub kind: NodeKind,
    pub children: Vec<Node>,
    /// Raw annotation text resolved against this node, if any.
    pub annotation: Option<String>,
}

/// The block/inline vocabulary the annotation passes understand.
///
/// Value-carrying variants keep the exact source text; the extractor never
/// re-serializes what it moves around.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum NodeKind {
    Root,
    Paragraph,
    Heading {
        depth: u8,
    },
    Text {
        value: String,
    },
    Emphasis,
    Strong,
    Delete,
    InlineCode {
        value: String,
    },
    /// An inline expression node. When the value is itself brace-wrapped
    /// (the `{{ ... }}` source form) the node is an annotation marker.
    InlineExpr {
        value: String,
    },
    Code {
        lang: Option<String>,
        meta: Option<String>,
        value: String,
    },
    Link {
        url: String,
        title: Option<String>,
    },
    Image {
        url: String,
        alt: String,
        title: Option<String>,
    },
    List {
        ordered: bool,
    },
    ListItem,
    Blockquote,
    Table,
    TableRow,
    TableCell,
    ThematicBreak,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Node {
            kind,
            children: Vec::new(),
            annotation: None,
        }
    }

    pub fn with_children(kind: NodeKind, children: Vec<Node>) -> Self {
        Node {
            kind,
            children,
            annotation: None,
        }
    }

    /// Record annotation text on this node, replacing any earlier payload.
    /// A node carries at most one annotation; the last resolution wins.
    pub fn set_annotation(&mut self, text: String) {
        self.annotation = Some(text);
    }

    /// Whether this node is an annotation marker: an inline expression whose
    /// value is still wrapped in braces (the double-braced source form).
    pub fn is_marker(&self) -> bool {
        matches!(
            &self.kind,
            NodeKind::InlineExpr { value } if value.starts_with('{') && value.ends_with('}')
        )
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, NodeKind::Text { .. })
    }

    /// Stable kind label, used by tree rendering and diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            NodeKind::Root => "Root",
            NodeKind::Paragraph => "Paragraph",
            NodeKind::Heading { .. } => "Heading",
            NodeKind::Text { .. } => "Text",
            NodeKind::Emphasis => "Emphasis",
            NodeKind::Strong => "Strong",
            NodeKind::Delete => "Delete",
            NodeKind::InlineCode { .. } => "InlineCode",
            NodeKind::InlineExpr { .. } => "InlineExpr",
            NodeKind::Code { .. } => "Code",
            NodeKind::Link { .. } => "Link",
            NodeKind::Image { .. } => "Image",
            NodeKind::List { .. } => "List",
            NodeKind::ListItem => "ListItem",
            NodeKind::Blockquote => "Blockquote",
            NodeKind::Table => "Table",
            NodeKind::TableRow => "TableRow",
            NodeKind::TableCell => "TableCell",
            NodeKind::ThematicBreak => "ThematicBreak",
        }
    }
}
