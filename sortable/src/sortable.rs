use alloc::string::ToString;
use alloc::vec::Vec;

use crate::error::SortableError;
use crate::events::{Emitter, SortEventDetail, SortStart, SortStop, SortUpdate};
use crate::geometry;
use crate::ghost::Ghost;
use crate::options::PlaceholderSource;
use crate::registry::{Container, Registry};
use crate::session::{DragPhase, DragSession};
use crate::{ContainerId, Document, DragEvent, DragEventKind, NodeId, SortEvent, SortableOptions};

/// Result of one handler: `Stop` is the "return false" of a DOM handler (the event is consumed).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Stop,
}

/// A headless drag-and-drop reordering engine.
///
/// This type is intentionally UI-agnostic:
/// - It owns a [`Document`] that mirrors the host's element tree.
/// - The host forwards native drag events through [`Sortable::dispatch`] and applies the
///   resulting tree changes (placeholder moves, the committed drop) to its real UI.
/// - Notifications (`sortstart`, `sortstop`, `sortupdate`) are returned from `dispatch`.
///
/// Only one drag can be in flight at a time; native drag-and-drop has a single pointer, so no
/// locking is involved.
#[derive(Clone, Debug, Default)]
pub struct Sortable {
    pub(crate) doc: Document,
    pub(crate) registry: Registry,
    pub(crate) session: Option<DragSession>,
    pub(crate) emitter: Emitter,
}

impl Sortable {
    pub fn new(doc: Document) -> Self {
        Self {
            doc,
            ..Self::default()
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Mutable access for hosts that mirror external tree changes.
    ///
    /// Item lists are re-evaluated on the next (re)initialization, not on mutation.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    pub fn into_document(self) -> Document {
        self.doc
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn container(&self, element: NodeId) -> Option<&Container> {
        self.registry
            .container_of(element)
            .and_then(|id| self.registry.get(id))
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn phase(&self) -> DragPhase {
        if self.session.is_some() {
            DragPhase::Dragging
        } else {
            DragPhase::Idle
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    fn check_node(&self, node: NodeId) -> Result<(), SortableError> {
        if self.doc.contains_node(node) {
            Ok(())
        } else {
            Err(SortableError::UnknownNode(node))
        }
    }

    fn require(&self, element: NodeId) -> Result<ContainerId, SortableError> {
        self.check_node(element)?;
        self.registry
            .container_of(element)
            .ok_or(SortableError::NotInitialized(element))
    }

    /// Makes `element` a sortable container, or rebinds it if it already is one.
    ///
    /// On re-initialization the stored options win over `options`, the placeholder is reused,
    /// and handlers are bound exactly once to the current item set.
    pub fn init(
        &mut self,
        element: NodeId,
        options: SortableOptions,
    ) -> Result<ContainerId, SortableError> {
        self.check_node(element)?;
        let id = match self.registry.container_of(element) {
            Some(id) => {
                self.reload(id);
                id
            }
            None => {
                let placeholder = self.create_placeholder(element, &options)?;
                let items = geometry::filter(
                    &self.doc,
                    self.doc.children(element),
                    options.items.as_ref(),
                );
                let id = self.registry.insert(element, options, placeholder);
                let tag = id.index().to_string();
                self.doc.set_attribute(element, "data-sortable-id", &tag);
                for &item in &items {
                    self.doc.set_attribute(item, "data-item-sortable-id", &tag);
                }
                id
            }
        };

        let Some(container) = self.registry.get(id) else {
            return Ok(id);
        };
        let placeholder = container.placeholder;
        let placeholder_class = container.options.placeholder_class.clone();
        self.doc.add_class(placeholder, &placeholder_class);

        let items = self.registry.current_items(&self.doc, element);
        self.set_enabled(id, true);
        for &item in &items {
            self.doc.set_attribute(item, "role", "option");
            self.doc.set_attribute(item, "aria-grabbed", "false");
        }
        self.registry.bind_items(id, &items);
        if let Some(container) = self.registry.get_mut(id) {
            sdebug!(
                container = id.index(),
                items = items.len(),
                "Sortable::init"
            );
            container.items = items;
            container.bound = true;
        }
        Ok(id)
    }

    /// Unbinds handlers from the container and its current items.
    fn reload(&mut self, id: ContainerId) {
        let Some(container) = self.registry.get(id) else {
            return;
        };
        let items = self.registry.current_items(&self.doc, container.element);
        self.registry.unbind_items(&items);
        if let Some(container) = self.registry.get_mut(id) {
            container.bound = false;
        }
        strace!(container = id.index(), "Sortable::reload");
    }

    fn create_placeholder(
        &mut self,
        element: NodeId,
        options: &SortableOptions,
    ) -> Result<NodeId, SortableError> {
        match &options.placeholder {
            Some(PlaceholderSource::Element(node)) => {
                self.check_node(*node)?;
                Ok(*node)
            }
            Some(PlaceholderSource::Markup(markup)) => self.parse_markup(markup),
            None => {
                let tag = match self.doc.tag(element) {
                    "ul" | "ol" => "li",
                    _ => "div",
                };
                Ok(self.doc.create_element(tag))
            }
        }
    }

    #[cfg(feature = "std")]
    fn parse_markup(&mut self, markup: &str) -> Result<NodeId, SortableError> {
        Ok(self.doc.parse_element(markup)?)
    }

    #[cfg(not(feature = "std"))]
    fn parse_markup(&mut self, _markup: &str) -> Result<NodeId, SortableError> {
        Err(crate::error::MarkupError::RequiresStd.into())
    }

    fn handles(&self, id: ContainerId) -> Vec<NodeId> {
        let Some(container) = self.registry.get(id) else {
            return Vec::new();
        };
        let items = self.registry.current_items(&self.doc, container.element);
        match &container.options.handle {
            Some(handle) => geometry::find(&self.doc, &items, handle),
            None => items,
        }
    }

    fn set_enabled(&mut self, id: ContainerId, enabled: bool) {
        let handles = self.handles(id);
        let Some(container) = self.registry.get_mut(id) else {
            return;
        };
        container.enabled = enabled;
        let element = container.element;
        let (effect, draggable) = if enabled {
            ("move", "true")
        } else {
            ("none", "false")
        };
        self.doc.set_attribute(element, "aria-dropeffect", effect);
        for handle in handles {
            self.doc.set_attribute(handle, "draggable", draggable);
        }
    }

    pub fn enable(&mut self, element: NodeId) -> Result<(), SortableError> {
        let id = self.require(element)?;
        self.set_enabled(id, true);
        Ok(())
    }

    /// Stops new drags from starting in this container. Drops into it are still accepted.
    pub fn disable(&mut self, element: NodeId) -> Result<(), SortableError> {
        let id = self.require(element)?;
        self.set_enabled(id, false);
        Ok(())
    }

    /// Tears the container down: handlers, derived attributes, registry entry and placeholder.
    pub fn destroy(&mut self, element: NodeId) -> Result<(), SortableError> {
        let id = self.require(element)?;
        if self.session.as_ref().is_some_and(|s| s.container == id) {
            self.cancel_drag();
        }
        let handles = self.handles(id);
        let items = self.registry.current_items(&self.doc, element);
        let Some(container) = self.registry.remove(id) else {
            return Ok(());
        };
        self.registry.unbind_items(&items);
        self.doc.remove_attribute(element, "aria-dropeffect");
        self.doc.remove_attribute(element, "data-sortable-id");
        for &item in &items {
            for attr in ["aria-grabbed", "draggable", "role", "data-item-sortable-id"] {
                self.doc.remove_attribute(item, attr);
            }
        }
        for handle in handles {
            self.doc.remove_attribute(handle, "draggable");
        }
        self.doc.detach(container.placeholder);
        sdebug!(container = id.index(), "Sortable::destroy");
        Ok(())
    }

    /// Drops the active session without notifications.
    fn cancel_drag(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        swarn!(item = session.item.index(), "drag cancelled");
        if let Some(container) = self.registry.get(session.container) {
            self.doc
                .remove_class(session.item, &container.options.dragging_class);
        }
        self.doc.set_attribute(session.item, "aria-grabbed", "false");
        self.doc.set_hidden(session.item, false);
        self.registry.detach_placeholders(&mut self.doc, None);
    }

    /// Delivers a native event and returns the notifications it produced.
    ///
    /// The event bubbles from its target through the target's ancestors (as captured before
    /// any handler runs), stopping at the first handler that consumes it.
    pub fn dispatch(&mut self, event: &mut DragEvent) -> Vec<SortEvent> {
        if !self.doc.contains_node(event.target) {
            swarn!(target = event.target.index(), "event target is not in the document");
            return Vec::new();
        }
        strace!(
            kind = event.kind.name(),
            target = event.target.index(),
            y = event.page.y,
            "dispatch"
        );

        if event.kind == DragEventKind::DragStart && !self.is_draggable(event.target) {
            strace!(target = event.target.index(), "dragstart on non-draggable element");
            return Vec::new();
        }

        let mut path = Vec::new();
        let mut cur = Some(event.target);
        while let Some(node) = cur {
            path.push(node);
            if !event.kind.bubbles() {
                break;
            }
            cur = self.doc.parent(node);
        }

        for node in path {
            if self.run_handlers(node, event) == Flow::Stop || event.propagation_stopped {
                break;
            }
        }
        self.emitter.take()
    }

    /// The nearest element carrying a `draggable` attribute decides whether a drag can start.
    fn is_draggable(&self, target: NodeId) -> bool {
        let mut cur = Some(target);
        while let Some(node) = cur {
            if let Some(value) = self.doc.attribute(node, "draggable") {
                return value == "true";
            }
            cur = self.doc.parent(node);
        }
        false
    }

    fn run_handlers(&mut self, node: NodeId, event: &mut DragEvent) -> Flow {
        match event.kind {
            DragEventKind::DragStart => match self.registry.item_binding(node) {
                Some(c) => self.on_drag_start(c, node, event),
                None => Flow::Continue,
            },
            DragEventKind::DragEnd => match self.registry.item_binding(node) {
                Some(c) => self.finish_drag(c),
                None => Flow::Continue,
            },
            DragEventKind::DragOver | DragEventKind::DragEnter => {
                if let Some(c) = self.registry.item_binding(node) {
                    if self.on_item_drag_over(c, node, event) == Flow::Stop {
                        return Flow::Stop;
                    }
                }
                match self.registry.container_binding(node) {
                    Some(c) => self.on_container_drag_over(c, node, event),
                    None => Flow::Continue,
                }
            }
            DragEventKind::Drop => {
                if let Some(c) = self.registry.container_binding(node) {
                    if self.on_drop(c, event) == Flow::Stop {
                        return Flow::Stop;
                    }
                }
                match self.registry.placeholder_binding(node) {
                    Some(c) => self.on_drop(c, event),
                    None => Flow::Continue,
                }
            }
            DragEventKind::MouseEnter | DragEventKind::MouseLeave => {
                if let Some(c) = self.registry.item_binding(node) {
                    self.on_hover(c, node, event.kind == DragEventKind::MouseEnter);
                }
                Flow::Continue
            }
        }
    }

    fn on_hover(&mut self, c: ContainerId, item: NodeId, entered: bool) {
        let Some(class) = self
            .registry
            .get(c)
            .and_then(|container| container.options.hover_class.class())
        else {
            return;
        };
        if entered {
            self.doc.add_class(item, class);
        } else {
            self.doc.remove_class(item, class);
        }
    }

    fn on_drag_start(&mut self, c: ContainerId, item: NodeId, event: &mut DragEvent) -> Flow {
        event.stop_propagation();
        if self.session.is_some() {
            swarn!(
                item = item.index(),
                "dragstart while another drag is active; ignored"
            );
            return Flow::Stop;
        }
        let Some(container) = self.registry.get(c) else {
            return Flow::Continue;
        };

        let ghost = match container.options.drag_image {
            Some(image) => {
                swarn!("the drag_image option is deprecated and will be removed");
                Ghost::fixed(image)
            }
            None => Ghost::for_item(&self.doc, item, event.page),
        };
        ghost.attach(&mut event.data_transfer);

        self.doc.add_class(item, &container.options.dragging_class);
        self.doc.set_attribute(item, "aria-grabbed", "true");

        let session = DragSession::capture(&self.doc, item, c, container.items.clone());
        sdebug!(
            item = item.index(),
            container = c.index(),
            index = session.start_index,
            height = session.height,
            "drag started"
        );
        if let Some(parent) = session.start_parent {
            self.emitter.emit(
                parent,
                SortEventDetail::Start(SortStart {
                    item,
                    placeholder: container.placeholder,
                    start_parent: session.start_parent,
                }),
            );
        }
        self.session = Some(session);
        Flow::Stop
    }

    /// The `dragend` handler; the only way a drag session ends.
    pub(crate) fn finish_drag(&mut self, c: ContainerId) -> Flow {
        let Some(session) = self.session.take() else {
            return Flow::Continue;
        };
        let item = session.item;
        let dragging_class = self
            .registry
            .get(c)
            .or_else(|| self.registry.get(session.container))
            .map(|container| container.options.dragging_class.as_str());
        if let Some(class) = dragging_class {
            self.doc.remove_class(item, class);
        }
        self.doc.set_attribute(item, "aria-grabbed", "false");
        self.doc.set_hidden(item, false);
        self.registry.detach_placeholders(&mut self.doc, None);

        let Some(end_parent) = self.doc.parent(item) else {
            swarn!(item = item.index(), "dragged item left the document");
            return Flow::Continue;
        };
        self.emitter.emit(
            end_parent,
            SortEventDetail::Stop(SortStop {
                item,
                start_parent: session.start_parent,
            }),
        );

        if session.has_moved(&self.doc) {
            let index = self
                .registry
                .current_items(&self.doc, end_parent)
                .iter()
                .position(|&n| n == item);
            let update = SortUpdate {
                item,
                index,
                old_index: session.old_index(),
                element_index: geometry::sibling_index(&self.doc, item),
                old_element_index: session.start_index,
                start_parent: session.start_parent,
                end_parent: Some(end_parent),
            };
            self.emitter
                .emit(end_parent, SortEventDetail::Update(update));
        }
        sdebug!(item = item.index(), "drag finished");
        Flow::Continue
    }
}
