use html5ever::tendril::TendrilSink as _;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{ParseOpts, parse_document};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::error::MarkupError;
use crate::{Document, NodeId};

impl Document {
    /// Builds a detached element subtree from an HTML fragment and returns its first element.
    ///
    /// The fragment is parsed as body content by a full HTML5 parser, so entities are decoded
    /// and broken markup is repaired the way a browser's `innerHTML` would. Only elements and
    /// their attributes are copied; text and comments are dropped.
    pub fn parse_element(&mut self, markup: &str) -> Result<NodeId, MarkupError> {
        let opts = ParseOpts {
            tree_builder: TreeBuilderOpts {
                exact_errors: false,
                scripting_enabled: false,
                ..TreeBuilderOpts::default()
            },
            ..ParseOpts::default()
        };
        let dom = parse_document(RcDom::default(), opts).one(markup);

        let body = find_element(&dom.document, "body").ok_or(MarkupError::NoElement)?;
        let first = body
            .children
            .borrow()
            .iter()
            .find(|c| matches!(c.data, NodeData::Element { .. }))
            .cloned()
            .ok_or(MarkupError::NoElement)?;
        self.import(&first).ok_or(MarkupError::NoElement)
    }

    fn import(&mut self, handle: &Handle) -> Option<NodeId> {
        let NodeData::Element { name, attrs, .. } = &handle.data else {
            return None;
        };
        let id = self.create_element(&name.local);
        for attr in attrs.borrow().iter() {
            self.set_attribute(id, &attr.name.local, &attr.value);
        }
        for child in handle.children.borrow().iter() {
            if let Some(child) = self.import(child) {
                self.append_child(id, child);
            }
        }
        Some(id)
    }
}

/// Depth-first search for the first element named `tag`.
fn find_element(handle: &Handle, tag: &str) -> Option<Handle> {
    if let NodeData::Element { name, .. } = &handle.data {
        if &*name.local == tag {
            return Some(handle.clone());
        }
    }
    handle
        .children
        .borrow()
        .iter()
        .find_map(|child| find_element(child, tag))
}
