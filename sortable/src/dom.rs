use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::NodeId;

#[derive(Clone, Debug, Default)]
struct Node {
    tag: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    hidden: bool,
    style_height: Option<u32>,
    height: Option<u32>,
    indent: i32,
}

/// A minimal element tree the host mirrors its UI into.
///
/// The engine only needs what the drag protocol observes: parent/child order, tag names,
/// classes and attributes for selector matching, and enough layout to answer "how tall is this
/// element" and "where is its top edge on the page".
///
/// Layout is a plain vertical block flow:
/// - an element's rendered height is its inline style height, else its intrinsic height (set
///   by the host), else the sum of its children's rendered heights;
/// - `display: none` elements render with height 0;
/// - an element's page top is its parent's page top plus the rendered heights of its preceding
///   siblings. Root elements start at 0.
///
/// Nodes are never freed. A [`NodeId`] from another document is a logic error and panics on
/// access, just like an out-of-bounds slice index.
#[derive(Clone, Debug, Default)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    /// Creates a detached element. Tag names are stored lowercase.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            tag: tag.to_ascii_lowercase(),
            ..Node::default()
        });
        id
    }

    /// Creates an element with an intrinsic height and appends it to `parent`.
    pub fn append_element(&mut self, parent: NodeId, tag: &str, height: u32) -> NodeId {
        let id = self.create_element(tag);
        self.set_height(id, Some(height));
        self.append_child(parent, id);
        id
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn tag(&self, id: NodeId) -> &str {
        &self.node(id).tag
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        let siblings = self.children(parent);
        let pos = siblings.iter().position(|&c| c == id)?;
        siblings.get(pos + 1).copied()
    }

    /// Whether `node` is `ancestor` or lives somewhere below it.
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cur = Some(node);
        while let Some(n) = cur {
            if n == ancestor {
                return true;
            }
            cur = self.parent(n);
        }
        false
    }

    /// Removes `id` from its parent. Returns `false` if it was already detached.
    pub fn detach(&mut self, id: NodeId) -> bool {
        let Some(parent) = self.node_mut(id).parent.take() else {
            return false;
        };
        self.node_mut(parent).children.retain(|&c| c != id);
        true
    }

    fn insert_at(&mut self, parent: NodeId, index: usize, id: NodeId) -> bool {
        // Inserting a node into its own subtree would create a cycle.
        if self.is_inclusive_ancestor(id, parent) {
            return false;
        }
        self.detach(id);
        let children = &mut self.node_mut(parent).children;
        let index = index.min(children.len());
        children.insert(index, id);
        self.node_mut(id).parent = Some(parent);
        true
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        let end = self.children(parent).len();
        self.insert_at(parent, end, child)
    }

    /// Moves `id` to directly before `reference`. No-op when `reference` is detached.
    pub fn insert_before(&mut self, reference: NodeId, id: NodeId) -> bool {
        if reference == id {
            return self.parent(id).is_some();
        }
        let Some(parent) = self.parent(reference) else {
            return false;
        };
        if self.is_inclusive_ancestor(id, parent) {
            return false;
        }
        self.detach(id);
        let Some(pos) = self.children(parent).iter().position(|&c| c == reference) else {
            return false;
        };
        self.insert_at(parent, pos, id)
    }

    /// Moves `id` to directly after `reference`. No-op when `reference` is detached.
    pub fn insert_after(&mut self, reference: NodeId, id: NodeId) -> bool {
        if reference == id {
            return self.parent(id).is_some();
        }
        let Some(parent) = self.parent(reference) else {
            return false;
        };
        if self.is_inclusive_ancestor(id, parent) {
            return false;
        }
        self.detach(id);
        let Some(pos) = self.children(parent).iter().position(|&c| c == reference) else {
            return false;
        };
        self.insert_at(parent, pos + 1, id)
    }

    pub fn classes(&self, id: NodeId) -> &[String] {
        &self.node(id).classes
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.node(id).classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if class.is_empty() || self.has_class(id, class) {
            return;
        }
        self.node_mut(id).classes.push(class.to_string());
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        self.node_mut(id).classes.retain(|c| c != class);
    }

    /// Returns an attribute value. `class` is tracked separately, see [`Self::classes`].
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id).attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if name.eq_ignore_ascii_case("class") {
            let node = self.node_mut(id);
            node.classes = value.split_ascii_whitespace().map(ToString::to_string).collect();
            return;
        }
        self.node_mut(id)
            .attributes
            .insert(name.to_ascii_lowercase(), value.to_string());
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) {
        self.node_mut(id).attributes.remove(name);
    }

    /// Inline `display: none`.
    pub fn is_hidden(&self, id: NodeId) -> bool {
        self.node(id).hidden
    }

    pub fn set_hidden(&mut self, id: NodeId, hidden: bool) {
        self.node_mut(id).hidden = hidden;
    }

    /// Inline `height` style, which overrides the intrinsic height.
    pub fn style_height(&self, id: NodeId) -> Option<u32> {
        self.node(id).style_height
    }

    pub fn set_style_height(&mut self, id: NodeId, height: Option<u32>) {
        self.node_mut(id).style_height = height;
    }

    /// Intrinsic (content) height reported by the host's layout.
    pub fn height(&self, id: NodeId) -> Option<u32> {
        self.node(id).height
    }

    pub fn set_height(&mut self, id: NodeId, height: Option<u32>) {
        self.node_mut(id).height = height;
    }

    /// Horizontal offset of this element relative to its parent.
    pub fn indent(&self, id: NodeId) -> i32 {
        self.node(id).indent
    }

    pub fn set_indent(&mut self, id: NodeId, indent: i32) {
        self.node_mut(id).indent = indent;
    }
}
