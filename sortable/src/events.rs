use alloc::vec::Vec;

use crate::NodeId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortEventKind {
    Start,
    Stop,
    Update,
}

impl SortEventKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Start => "sortstart",
            Self::Stop => "sortstop",
            Self::Update => "sortupdate",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortStart {
    pub item: NodeId,
    pub placeholder: NodeId,
    pub start_parent: Option<NodeId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortStop {
    pub item: NodeId,
    pub start_parent: Option<NodeId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortUpdate {
    pub item: NodeId,
    /// Position among the destination container's configured items.
    pub index: Option<usize>,
    /// Position among the origin container's items as they were before the drag.
    pub old_index: Option<usize>,
    /// Raw sibling index after the drop.
    pub element_index: usize,
    /// Raw sibling index before the drag.
    pub old_element_index: usize,
    pub start_parent: Option<NodeId>,
    pub end_parent: Option<NodeId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortEventDetail {
    Start(SortStart),
    Stop(SortStop),
    Update(SortUpdate),
}

/// A notification dispatched on a container element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortEvent {
    /// The container the event was dispatched on.
    pub target: NodeId,
    pub detail: SortEventDetail,
}

impl SortEvent {
    pub fn kind(&self) -> SortEventKind {
        match self.detail {
            SortEventDetail::Start(_) => SortEventKind::Start,
            SortEventDetail::Stop(_) => SortEventKind::Stop,
            SortEventDetail::Update(_) => SortEventKind::Update,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn as_update(&self) -> Option<&SortUpdate> {
        match &self.detail {
            SortEventDetail::Update(u) => Some(u),
            _ => None,
        }
    }
}

/// Collects notifications raised while a native event is being handled.
#[derive(Clone, Debug, Default)]
pub(crate) struct Emitter {
    queue: Vec<SortEvent>,
}

impl Emitter {
    pub(crate) fn emit(&mut self, target: NodeId, detail: SortEventDetail) {
        let event = SortEvent { target, detail };
        sdebug!(name = event.name(), target = target.index(), "emit");
        self.queue.push(event);
    }

    pub(crate) fn take(&mut self) -> Vec<SortEvent> {
        core::mem::take(&mut self.queue)
    }
}
