use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use sortable::{
    Command, ContainerId, Document, DragEvent, NodeId, SortEvent, SortEventKind, Sortable,
    SortableError, SortableOptions,
};

use crate::Gesture;

/// A sort notification callback, shareable across threads with the controller.
pub type Listener = Arc<dyn Fn(&SortEvent) + Send + Sync>;

/// Handle returned by [`Controller::on`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListenerId(u64);

#[derive(Clone)]
struct Subscription {
    id: ListenerId,
    element: NodeId,
    kind: SortEventKind,
    listener: Listener,
}

/// A framework-neutral controller that wraps a `sortable::Sortable` and delivers its
/// notifications to subscribed listeners.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `init` / `run` to configure containers
/// - `handle` for every native drag event the UI reports
///
/// Sort events bubble like DOM events: a listener registered on an element hears events
/// targeted at that element or at any of its descendants.
#[derive(Clone)]
pub struct Controller {
    s: Sortable,
    subscriptions: Vec<Subscription>,
    next_id: u64,
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("sortable", &self.s)
            .field("listeners", &self.subscriptions.len())
            .finish()
    }
}

impl Controller {
    pub fn new(doc: Document) -> Self {
        Self::from_sortable(Sortable::new(doc))
    }

    pub fn from_sortable(s: Sortable) -> Self {
        Self {
            s,
            subscriptions: Vec::new(),
            next_id: 0,
        }
    }

    pub fn sortable(&self) -> &Sortable {
        &self.s
    }

    pub fn sortable_mut(&mut self) -> &mut Sortable {
        &mut self.s
    }

    pub fn into_sortable(self) -> Sortable {
        self.s
    }

    pub fn document(&self) -> &Document {
        self.s.document()
    }

    pub fn init(
        &mut self,
        element: NodeId,
        options: SortableOptions,
    ) -> Result<ContainerId, SortableError> {
        self.s.init(element, options)
    }

    pub fn run(&mut self, targets: &[NodeId], command: Command) -> Result<(), SortableError> {
        self.s.run(targets, command)
    }

    /// Subscribes `listener` to `kind` events on `element` and its descendants.
    pub fn on(
        &mut self,
        element: NodeId,
        kind: SortEventKind,
        listener: impl Fn(&SortEvent) + Send + Sync + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription {
            id,
            element,
            kind,
            listener: Arc::new(listener),
        });
        id
    }

    /// Removes a subscription. Returns `false` if it was already gone.
    pub fn off(&mut self, id: ListenerId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        self.subscriptions.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Forwards a native event to the engine and notifies listeners of what it produced.
    ///
    /// The event is updated in place (`default_prevented`, `data_transfer`, ...) so the adapter
    /// can mirror those flags onto the real UI event.
    pub fn handle(&mut self, event: &mut DragEvent) -> Vec<SortEvent> {
        let events = self.s.dispatch(event);
        for event in &events {
            self.notify(event);
        }
        events
    }

    /// Replays a scripted gesture through [`Controller::handle`].
    pub fn play(&mut self, gesture: &Gesture) -> Vec<SortEvent> {
        let mut out = Vec::new();
        for mut event in gesture.events() {
            out.extend(self.handle(&mut event));
        }
        out
    }

    fn notify(&self, event: &SortEvent) {
        let doc = self.s.document();
        let kind = event.kind();
        let mut cur = Some(event.target);
        while let Some(node) = cur {
            for sub in &self.subscriptions {
                if sub.element == node && sub.kind == kind {
                    (sub.listener)(event);
                }
            }
            cur = doc.parent(node);
        }
    }
}
