use alloc::vec::Vec;

use sortable::{DragEvent, DragEventKind, NodeId, Point};

/// One native event of a scripted drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GestureStep {
    pub kind: DragEventKind,
    pub target: NodeId,
    pub page: Point,
}

/// A scripted pointer drag, for tests, demos and recorded-input replay.
///
/// Produces the sequence a browser delivers: `dragstart` on the item, any number of
/// `dragenter`/`dragover`, an optional `drop`, and always a closing `dragend` on the item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gesture {
    item: NodeId,
    steps: Vec<GestureStep>,
}

impl Gesture {
    pub fn start(item: NodeId, page: Point) -> Self {
        Self {
            item,
            steps: alloc::vec![GestureStep {
                kind: DragEventKind::DragStart,
                target: item,
                page,
            }],
        }
    }

    fn push(mut self, kind: DragEventKind, target: NodeId, page: Point) -> Self {
        self.steps.push(GestureStep { kind, target, page });
        self
    }

    pub fn enter(self, target: NodeId, page: Point) -> Self {
        self.push(DragEventKind::DragEnter, target, page)
    }

    pub fn over(self, target: NodeId, page: Point) -> Self {
        self.push(DragEventKind::DragOver, target, page)
    }

    /// `dragenter` followed by `dragover`, as delivered when the pointer crosses into `target`.
    pub fn hover(self, target: NodeId, page: Point) -> Self {
        self.enter(target, page).over(target, page)
    }

    pub fn drop(self, target: NodeId, page: Point) -> Self {
        self.push(DragEventKind::Drop, target, page)
    }

    pub fn item(&self) -> NodeId {
        self.item
    }

    /// Scripted steps, without the trailing `dragend`.
    pub fn steps(&self) -> &[GestureStep] {
        &self.steps
    }

    /// Every event to deliver, in order, ending with `dragend`.
    pub fn events(&self) -> impl Iterator<Item = DragEvent> + '_ {
        self.steps
            .iter()
            .map(|s| DragEvent::new(s.kind, s.target, s.page))
            .chain(core::iter::once(DragEvent::drag_end(self.item)))
    }
}
