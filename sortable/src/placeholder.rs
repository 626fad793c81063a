use crate::geometry;
use crate::sortable::Flow;
use crate::{ContainerId, DragEvent, DropEffect, NodeId, Sortable};

/// Whether a placeholder move over a taller target should be suppressed.
///
/// When the target is taller than the dragged item by `d` pixels, the pointer must travel `d`
/// pixels past the target's near edge before the placeholder jumps to the other side. Without
/// this, the placeholder flips back and forth while the pointer sits near the boundary.
pub fn in_dead_zone(
    placeholder_index: usize,
    target_index: usize,
    target_top: i64,
    target_height: u32,
    dragging_height: u32,
    pointer_y: i64,
) -> bool {
    if target_height <= dragging_height {
        return false;
    }
    let dead_zone = i64::from(target_height - dragging_height);
    if placeholder_index < target_index && pointer_y < target_top + dead_zone {
        return true;
    }
    placeholder_index > target_index
        && pointer_y > target_top + i64::from(target_height) - dead_zone
}

impl Sortable {
    /// `dragover`/`dragenter` on a bound item: move the owning container's placeholder next to
    /// the hovered item.
    pub(crate) fn on_item_drag_over(
        &mut self,
        c: ContainerId,
        target: NodeId,
        event: &mut DragEvent,
    ) -> Flow {
        let Some(session) = &self.session else {
            return Flow::Continue;
        };
        let (dragging, dragging_height) = (session.item, session.height);
        let Some(container) = self.registry.get(c) else {
            return Flow::Continue;
        };
        let Some(current_parent) = self.doc.parent(dragging) else {
            return Flow::Continue;
        };
        if !self.registry.is_connected(container.element, current_parent) {
            return Flow::Continue;
        }
        event.prevent_default();
        event.stop_propagation();
        event.data_transfer.drop_effect = DropEffect::Move;

        let placeholder = container.placeholder;
        let target_height = geometry::rendered_height(&self.doc, target);
        let placeholder_index = geometry::sibling_index(&self.doc, placeholder);
        let target_index = geometry::sibling_index(&self.doc, target);

        if container.options.force_placeholder_size {
            self.doc.set_style_height(placeholder, Some(dragging_height));
        }

        if container.options.dead_zone
            && in_dead_zone(
                placeholder_index,
                target_index,
                geometry::offset_top(&self.doc, target),
                target_height,
                dragging_height,
                i64::from(event.page.y),
            )
        {
            strace!(target = target.index(), y = event.page.y, "inside dead zone");
            return Flow::Stop;
        }

        self.doc.set_hidden(dragging, true);
        if placeholder_index < target_index {
            self.doc.insert_after(target, placeholder);
        } else {
            self.doc.insert_before(target, placeholder);
        }
        self.registry
            .detach_placeholders(&mut self.doc, Some(placeholder));
        strace!(
            placeholder = placeholder.index(),
            target = target.index(),
            "placeholder moved"
        );
        Flow::Stop
    }

    /// `dragover`/`dragenter` on a bound container. Only an empty container takes the
    /// placeholder; hovering the gaps of a non-empty list leaves it where it is.
    pub(crate) fn on_container_drag_over(
        &mut self,
        c: ContainerId,
        node: NodeId,
        event: &mut DragEvent,
    ) -> Flow {
        let Some(session) = &self.session else {
            return Flow::Continue;
        };
        let dragging = session.item;
        let Some(container) = self.registry.get(c) else {
            return Flow::Continue;
        };
        let Some(current_parent) = self.doc.parent(dragging) else {
            return Flow::Continue;
        };
        if !self.registry.is_connected(container.element, current_parent) {
            return Flow::Continue;
        }
        event.prevent_default();
        event.stop_propagation();
        event.data_transfer.drop_effect = DropEffect::Move;

        if !self.registry.is_placeholder(node)
            && self.registry.current_items(&self.doc, node).is_empty()
        {
            let placeholder = container.placeholder;
            self.registry.detach_placeholders(&mut self.doc, None);
            self.doc.append_child(node, placeholder);
            sdebug!(
                container = c.index(),
                placeholder = placeholder.index(),
                "placeholder moved into empty container"
            );
        }
        Flow::Stop
    }
}
