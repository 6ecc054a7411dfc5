//! Element-tree annotation promoter
//!
//! Lowering renders a logical code block as a code element nested inside a
//! preformatted wrapper, so the annotation the extractor resolved against
//! the code block surfaces on the inner element. This pass lifts it onto
//! the wrapper, where it decorates the rendered block. Every other
//! annotation passes through untouched.

use crate::element::{Element, ElementChild, ElementTree};

/// Relocate code-element annotations onto their enclosing preformatted
/// parent. Returns the number of annotations moved.
pub fn promote(tree: &mut ElementTree) -> usize {
    let mut moved = 0;
    for child in &mut tree.children {
        if let ElementChild::Element(element) = child {
            visit(element, &mut moved);
        }
    }
    moved
}

fn visit(element: &mut Element, moved: &mut usize) {
    if element.tag == "pre" {
        let mut lifted = None;
        for child in &mut element.children {
            if let ElementChild::Element(code) = child {
                if code.tag == "code" && code.annotation.is_some() {
                    lifted = code.annotation.take();
                    *moved += 1;
                }
            }
        }
        if lifted.is_some() {
            element.annotation = lifted;
        }
    }

    for child in &mut element.children {
        if let ElementChild::Element(nested) = child {
            visit(nested, moved);
        }
    }
}
