//! Stateless layout and tree queries.

use alloc::vec::Vec;

use crate::{Document, NodeId, Selector};

/// Position of `node` among its parent's children; `0` when detached.
pub fn sibling_index(doc: &Document, node: NodeId) -> usize {
    let Some(parent) = doc.parent(node) else {
        return 0;
    };
    doc.children(parent)
        .iter()
        .position(|&c| c == node)
        .unwrap_or(0)
}

/// Whether `node` currently has a parent.
pub fn is_attached(doc: &Document, node: NodeId) -> bool {
    doc.parent(node).is_some()
}

/// Whether `node` is a strict descendant of `ancestor`.
pub fn contains(doc: &Document, ancestor: NodeId, node: NodeId) -> bool {
    node != ancestor && doc.is_inclusive_ancestor(ancestor, node)
}

/// The height the element occupies in the block flow.
pub fn rendered_height(doc: &Document, node: NodeId) -> u32 {
    if doc.is_hidden(node) {
        return 0;
    }
    if let Some(h) = doc.style_height(node).or_else(|| doc.height(node)) {
        return h;
    }
    doc.children(node)
        .iter()
        .fold(0u32, |acc, &c| acc.saturating_add(rendered_height(doc, c)))
}

/// Distance from the page top to the element's top edge.
pub fn offset_top(doc: &Document, node: NodeId) -> i64 {
    let Some(parent) = doc.parent(node) else {
        return 0;
    };
    let mut top = offset_top(doc, parent);
    for &sibling in doc.children(parent) {
        if sibling == node {
            break;
        }
        top += i64::from(rendered_height(doc, sibling));
    }
    top
}

/// Distance from the page's left edge to the element's left edge.
pub fn offset_left(doc: &Document, node: NodeId) -> i64 {
    let mut left = 0i64;
    let mut cur = Some(node);
    while let Some(n) = cur {
        left += i64::from(doc.indent(n));
        cur = doc.parent(n);
    }
    left
}

/// Keeps the nodes that match `selector`; all of them when there is no selector.
pub fn filter(doc: &Document, nodes: &[NodeId], selector: Option<&Selector>) -> Vec<NodeId> {
    match selector {
        None => nodes.to_vec(),
        Some(sel) => nodes
            .iter()
            .copied()
            .filter(|&n| sel.matches(doc, n))
            .collect(),
    }
}

/// Descendants of `roots` (excluding the roots) matching `selector`, in document order.
pub fn find(doc: &Document, roots: &[NodeId], selector: &Selector) -> Vec<NodeId> {
    let mut out = Vec::new();
    let mut stack: Vec<NodeId> = Vec::new();
    for &root in roots {
        stack.extend(doc.children(root).iter().rev().copied());
        while let Some(n) = stack.pop() {
            if selector.matches(doc, n) && !out.contains(&n) {
                out.push(n);
            }
            stack.extend(doc.children(n).iter().rev().copied());
        }
    }
    out
}
