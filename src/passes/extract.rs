//! Block-tree annotation extractor
//!
//! Walks the block tree depth-first, resolves every annotation marker to
//! its attachment target, records the raw payload text on the target, and
//! removes the marker from the tree. The walk is parent-aware by
//! construction: each node scans its own child sequence, so no node needs a
//! back-pointer, and the one promotion rule that crosses a level (the
//! sole-paragraph list item) is signalled upward through the walk's return
//! value.
//!
//! Attachment rules, in priority order per node:
//!
//! - a code fence whose whole meta string is a brace-wrapped group claims
//!   the inner text as its own annotation and clears the meta string
//! - a table row holding exactly one cell with exactly one inline
//!   expression annotates the enclosing table and is removed from it
//! - otherwise a marker annotates the child before it: the parent node
//!   itself when that child is a trailing text run (promoted to the list
//!   item when the parent is the sole paragraph of one), or the preceding
//!   inline element directly
//!
//! A marker with no preceding sibling is not an error; it stays in the tree
//! as ordinary content.
//!
//! After a removal the scan does not advance, so the sibling that slides
//! into the freed slot is examined next and never skipped. Consecutive
//! markers against one target therefore all resolve, the last payload
//! winning.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::block::{Node, NodeKind};

/// Whole meta string of the form `{ ... }` with an inner brace group, e.g.
/// the meta half of ```` ```php {{ foo: 'bar' }} ````.
static CODE_META_ANNOTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\{\s*\{.*?\}\s*\}$").expect("static pattern"));

/// Resolve and remove all annotation markers under `root`.
///
/// Returns the number of markers consumed across all three attachment
/// paths (inline markers, code meta strings, dedicated table rows).
pub fn extract(root: &mut Node) -> usize {
    let mut consumed = 0;
    visit(root, false, &mut consumed);
    consumed
}

/// Visit one node. `sole_paragraph_of_item` is set by the parent frame when
/// this node is a paragraph standing as the only child of a list item; a
/// trailing-marker annotation then belongs to the list item and is returned
/// to the caller instead of being recorded here.
fn visit(node: &mut Node, sole_paragraph_of_item: bool, consumed: &mut usize) -> Option<String> {
    if let NodeKind::Code { meta, .. } = &mut node.kind {
        if let Some(meta_text) = meta {
            if CODE_META_ANNOTATION.is_match(meta_text) {
                let inner = meta_text[1..meta_text.len() - 1].to_string();
                node.annotation = Some(inner);
                *meta = None;
                *consumed += 1;
            }
        }
        return None;
    }

    if matches!(node.kind, NodeKind::Table) {
        *consumed += take_row_annotations(node);
    }

    // Rows hold cells, never inline content; each cell scans its own
    // children in its own frame.
    let promoted = if matches!(node.kind, NodeKind::TableRow) {
        None
    } else {
        scan_markers(node, sole_paragraph_of_item, consumed)
    };

    for index in 0..node.children.len() {
        let sole_paragraph = matches!(node.kind, NodeKind::ListItem)
            && node.children.len() == 1
            && matches!(node.children[index].kind, NodeKind::Paragraph);
        if let Some(text) = visit(&mut node.children[index], sole_paragraph, consumed) {
            node.annotation = Some(text);
        }
    }

    promoted
}

/// Left-to-right scan of `node`'s children for inline markers.
fn scan_markers(
    node: &mut Node,
    sole_paragraph_of_item: bool,
    consumed: &mut usize,
) -> Option<String> {
    let mut promoted = None;
    let mut index = 0;
    while index < node.children.len() {
        let value = match &node.children[index].kind {
            NodeKind::InlineExpr { value }
                if value.starts_with('{') && value.ends_with('}') =>
            {
                value.clone()
            }
            _ => {
                index += 1;
                continue;
            }
        };

        // No predecessor: the marker stays as ordinary content.
        if index == 0 {
            index += 1;
            continue;
        }

        let last = index == node.children.len() - 1;
        let prev_is_text = node.children[index - 1].is_text();
        node.children.remove(index);
        *consumed += 1;

        if prev_is_text && last {
            trim_text_end(&mut node.children[index - 1]);
            if sole_paragraph_of_item {
                promoted = Some(value);
            } else {
                node.set_annotation(value);
            }
        } else {
            node.children[index - 1].set_annotation(value);
        }
        // The next sibling slid into the removed slot; do not advance.
    }
    promoted
}

fn trim_text_end(node: &mut Node) {
    if let NodeKind::Text { value } = &mut node.kind {
        value.truncate(value.trim_end().len());
    }
}

/// Remove dedicated annotation rows from a table, recording their payloads
/// on the table itself.
fn take_row_annotations(table: &mut Node) -> usize {
    let mut removed = 0;
    let mut index = 0;
    while index < table.children.len() {
        match annotation_row_value(&table.children[index]) {
            Some(value) => {
                table.set_annotation(value);
                table.children.remove(index);
                removed += 1;
            }
            None => index += 1,
        }
    }
    removed
}

/// A dedicated annotation row: exactly one cell, holding exactly one inline
/// expression. The dedicated-row form does not require the double-braced
/// spelling.
fn annotation_row_value(row: &Node) -> Option<String> {
    if !matches!(row.kind, NodeKind::TableRow) || row.children.len() != 1 {
        return None;
    }
    let cell = &row.children[0];
    if !matches!(cell.kind, NodeKind::TableCell) || cell.children.len() != 1 {
        return None;
    }
    match &cell.children[0].kind {
        NodeKind::InlineExpr { value } => Some(value.clone()),
        _ => None,
    }
}
