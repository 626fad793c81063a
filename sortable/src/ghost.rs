use crate::geometry;
use crate::{DataTransfer, Document, DropEffect, NodeId, Point};

/// The drag preview handed to the native data transfer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ghost {
    pub node: NodeId,
    /// Cursor offset inside `node`.
    pub x: i32,
    pub y: i32,
}

impl Ghost {
    /// Uses the dragged item itself as the preview, keeping the cursor where it grabbed the item.
    pub fn for_item(doc: &Document, item: NodeId, page: Point) -> Self {
        let x = i64::from(page.x) - geometry::offset_left(doc, item);
        let y = i64::from(page.y) - geometry::offset_top(doc, item);
        Self {
            node: item,
            x: clamp_i32(x),
            y: clamp_i32(y),
        }
    }

    /// A host-supplied preview pinned at its top-left corner.
    pub fn fixed(node: NodeId) -> Self {
        Self { node, x: 0, y: 0 }
    }

    /// Native drag-and-drop needs `effectAllowed` and some data set for the drag to start.
    pub fn attach(self, transfer: &mut DataTransfer) {
        transfer.effect_allowed = Some(DropEffect::Move);
        transfer.set_data("text", "");
        transfer.set_drag_image(self.node, self.x, self.y);
    }
}

fn clamp_i32(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
