use crate::sortable::Flow;
use crate::{ContainerId, DragEvent, Sortable};

impl Sortable {
    /// `drop` on a container or a placeholder: commit the dragged item at the attached
    /// placeholder and finish the drag.
    pub(crate) fn on_drop(&mut self, c: ContainerId, event: &mut DragEvent) -> Flow {
        let Some(session) = &self.session else {
            return Flow::Continue;
        };
        let (dragging, origin) = (session.item, session.container);
        let Some(container) = self.registry.get(c) else {
            return Flow::Continue;
        };
        let Some(current_parent) = self.doc.parent(dragging) else {
            return Flow::Continue;
        };
        if !self.registry.is_connected(container.element, current_parent) {
            strace!(container = c.index(), "drop on unconnected container ignored");
            return Flow::Continue;
        }
        event.stop_propagation();

        match self.registry.attached_placeholder(&self.doc) {
            Some(placeholder) => {
                self.doc.insert_after(placeholder, dragging);
                sdebug!(
                    item = dragging.index(),
                    placeholder = placeholder.index(),
                    "drop committed"
                );
            }
            None => {
                swarn!(item = dragging.index(), "drop without a placeholder; item stays put");
            }
        }

        // Synthesized, non-bubbling `dragend` on the dragged item.
        let binding = self.registry.item_binding(dragging).unwrap_or(origin);
        self.finish_drag(binding);

        event.prevent_default();
        Flow::Stop
    }
}
