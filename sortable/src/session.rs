use alloc::vec::Vec;

use crate::geometry;
use crate::{ContainerId, Document, NodeId};

/// Where the engine is in the drag lifecycle.
///
/// A drop commits the item and runs the closing `dragend` within the same dispatch, so between
/// dispatches the engine is either idle or mid-drag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// State of the single in-flight drag, captured on `dragstart`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragSession {
    pub(crate) item: NodeId,
    pub(crate) container: ContainerId,
    pub(crate) start_parent: Option<NodeId>,
    pub(crate) start_index: usize,
    pub(crate) height: u32,
    pub(crate) origin_items: Vec<NodeId>,
}

impl DragSession {
    pub(crate) fn capture(
        doc: &Document,
        item: NodeId,
        container: ContainerId,
        origin_items: Vec<NodeId>,
    ) -> Self {
        Self {
            item,
            container,
            start_parent: doc.parent(item),
            start_index: geometry::sibling_index(doc, item),
            height: geometry::rendered_height(doc, item),
            origin_items,
        }
    }

    /// The dragged element.
    pub fn item(&self) -> NodeId {
        self.item
    }

    /// The container whose item handlers started this drag.
    pub fn container(&self) -> ContainerId {
        self.container
    }

    pub fn start_parent(&self) -> Option<NodeId> {
        self.start_parent
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Rendered height of the item when the drag started.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Position of the item among its container's items before the drag.
    pub fn old_index(&self) -> Option<usize> {
        self.origin_items.iter().position(|&n| n == self.item)
    }

    /// Whether the item now sits somewhere other than where the drag started.
    pub fn has_moved(&self, doc: &Document) -> bool {
        geometry::sibling_index(doc, self.item) != self.start_index
            || doc.parent(self.item) != self.start_parent
    }
}
