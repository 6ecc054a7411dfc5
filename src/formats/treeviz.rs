//! Treeviz formatter for block trees
//!
//! One line per node, structure encoded as two-space indentation. Each line
//! carries the node kind, a truncated payload summary where the kind has
//! one, and the annotation text as an `@`-prefixed suffix once resolved.
//!
//! Example:
//!
//!   Root
//!     Heading depth=1 @{ foo: 'bar' }
//!       Text "Hello"

use crate::block::{Node, NodeKind};

const MAX_PAYLOAD_CHARS: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(root: &Node) -> String {
    let mut out = String::new();
    render(root, 0, &mut out);
    out
}

fn render(node: &Node, depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(&label(node));
    if let Some(annotation) = &node.annotation {
        out.push_str(" @");
        out.push_str(&truncate(annotation, MAX_PAYLOAD_CHARS));
    }
    out.push('\n');
    for child in &node.children {
        render(child, depth + 1, out);
    }
}

fn label(node: &Node) -> String {
    match &node.kind {
        NodeKind::Heading { depth } => format!("Heading depth={}", depth),
        NodeKind::Text { value } => {
            format!("Text {:?}", truncate(value, MAX_PAYLOAD_CHARS))
        }
        NodeKind::InlineCode { value } => {
            format!("InlineCode {:?}", truncate(value, MAX_PAYLOAD_CHARS))
        }
        NodeKind::InlineExpr { value } => {
            format!("InlineExpr {:?}", truncate(value, MAX_PAYLOAD_CHARS))
        }
        NodeKind::Code { lang, .. } => match lang {
            Some(lang) => format!("Code lang={}", lang),
            None => "Code".to_string(),
        },
        NodeKind::Link { url, .. } => format!("Link url={}", url),
        NodeKind::Image { url, .. } => format!("Image url={}", url),
        NodeKind::List { ordered: true } => "List ordered".to_string(),
        NodeKind::List { ordered: false } => "List".to_string(),
        _ => node.kind_name().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passes::extract;
    use crate::testing::factories::*;

    #[test]
    fn test_annotated_heading_rendering() {
        let mut tree = root(vec![heading(
            1,
            vec![text("Hello "), marker("{ foo: 'bar' }")],
        )]);
        extract(&mut tree);

        insta::assert_snapshot!(to_treeviz_str(&tree), @r###"
        Root
          Heading depth=1 @{ foo: 'bar' }
            Text "Hello"
        "###);
    }

    #[test]
    fn test_payload_truncation() {
        let long = "x".repeat(40);
        let tree = root(vec![paragraph(vec![text(&long)])]);
        let rendered = to_treeviz_str(&tree);
        assert!(rendered.contains("..."));
        assert!(!rendered.contains(&long));
    }
}
