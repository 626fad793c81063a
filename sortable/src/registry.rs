use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::geometry;
use crate::{ContainerId, Document, NodeId, SortableOptions};

/// Per-container record kept in the [`Registry`].
#[derive(Clone, Debug)]
pub struct Container {
    pub(crate) element: NodeId,
    pub(crate) options: SortableOptions,
    pub(crate) items: Vec<NodeId>,
    pub(crate) placeholder: NodeId,
    pub(crate) bound: bool,
    pub(crate) enabled: bool,
}

impl Container {
    pub fn element(&self) -> NodeId {
        self.element
    }

    pub fn options(&self) -> &SortableOptions {
        &self.options
    }

    /// Items as of the last (re)initialization.
    pub fn items(&self) -> &[NodeId] {
        &self.items
    }

    pub fn placeholder(&self) -> NodeId {
        self.placeholder
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// The table of initialized containers, the shared placeholder list, and the event bindings.
///
/// Bindings model which handlers are attached to which element: an item is bound to exactly
/// one container (the last one that initialized it), a container is bound to itself, and each
/// placeholder is bound to the container that owns it.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    containers: BTreeMap<ContainerId, Container>,
    by_element: BTreeMap<NodeId, ContainerId>,
    placeholders: Vec<NodeId>,
    item_bindings: BTreeMap<NodeId, ContainerId>,
    placeholder_bindings: BTreeMap<NodeId, ContainerId>,
    next_id: usize,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    pub fn get(&self, id: ContainerId) -> Option<&Container> {
        self.containers.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: ContainerId) -> Option<&mut Container> {
        self.containers.get_mut(&id)
    }

    pub fn container_of(&self, element: NodeId) -> Option<ContainerId> {
        self.by_element.get(&element).copied()
    }

    pub fn containers(&self) -> impl Iterator<Item = (ContainerId, &Container)> {
        self.containers.iter().map(|(&id, c)| (id, c))
    }

    /// Every registered placeholder, in registration order.
    pub fn placeholders(&self) -> &[NodeId] {
        &self.placeholders
    }

    pub(crate) fn insert(
        &mut self,
        element: NodeId,
        options: SortableOptions,
        placeholder: NodeId,
    ) -> ContainerId {
        let id = ContainerId(self.next_id);
        self.next_id += 1;
        self.containers.insert(
            id,
            Container {
                element,
                options,
                items: Vec::new(),
                placeholder,
                bound: false,
                enabled: false,
            },
        );
        self.by_element.insert(element, id);
        self.placeholders.push(placeholder);
        self.placeholder_bindings.insert(placeholder, id);
        id
    }

    pub(crate) fn remove(&mut self, id: ContainerId) -> Option<Container> {
        let container = self.containers.remove(&id)?;
        self.by_element.remove(&container.element);
        self.placeholders.retain(|&p| p != container.placeholder);
        self.placeholder_bindings.remove(&container.placeholder);
        self.item_bindings.retain(|_, owner| *owner != id);
        Some(container)
    }

    pub(crate) fn bind_items(&mut self, id: ContainerId, items: &[NodeId]) {
        for &item in items {
            self.item_bindings.insert(item, id);
        }
    }

    pub(crate) fn unbind_items(&mut self, items: &[NodeId]) {
        for item in items {
            self.item_bindings.remove(item);
        }
    }

    /// The container whose item handlers are attached to `node`.
    pub fn item_binding(&self, node: NodeId) -> Option<ContainerId> {
        self.item_bindings.get(&node).copied()
    }

    /// The container whose container handlers are attached to `node`.
    pub fn container_binding(&self, node: NodeId) -> Option<ContainerId> {
        let id = self.container_of(node)?;
        self.containers.get(&id).filter(|c| c.bound).map(|_| id)
    }

    /// The container owning the placeholder `node`.
    pub fn placeholder_binding(&self, node: NodeId) -> Option<ContainerId> {
        self.placeholder_bindings.get(&node).copied()
    }

    pub fn is_placeholder(&self, node: NodeId) -> bool {
        self.placeholder_bindings.contains_key(&node)
    }

    /// Whether items may move from the list `from` into the list `to`.
    ///
    /// A container is connected to itself; two containers are connected when `from` declares a
    /// connection tag and `to` declares the same one.
    pub fn is_connected(&self, from: NodeId, to: NodeId) -> bool {
        if from == to {
            return true;
        }
        let tag_of = |element: NodeId| {
            self.container_of(element)
                .and_then(|id| self.containers.get(&id))
                .and_then(|c| c.options.connection_tag())
        };
        match tag_of(from) {
            Some(tag) => tag_of(to) == Some(tag),
            None => false,
        }
    }

    /// Current configured items of a container element, evaluated against the live tree.
    pub fn current_items(&self, doc: &Document, element: NodeId) -> Vec<NodeId> {
        let selector = self
            .container_of(element)
            .and_then(|id| self.containers.get(&id))
            .and_then(|c| c.options.items.as_ref());
        geometry::filter(doc, doc.children(element), selector)
    }

    /// The first placeholder that has a parent.
    pub fn attached_placeholder(&self, doc: &Document) -> Option<NodeId> {
        self.placeholders
            .iter()
            .copied()
            .find(|&p| geometry::is_attached(doc, p))
    }

    /// Detaches every placeholder except `keep`.
    pub(crate) fn detach_placeholders(&self, doc: &mut Document, keep: Option<NodeId>) {
        for &p in &self.placeholders {
            if Some(p) != keep {
                doc.detach(p);
            }
        }
    }
}
