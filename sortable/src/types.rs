use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// Identity of an element inside a [`crate::Document`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Stable identifier assigned to a container on its first initialization.
///
/// This is the value written to the `data-sortable-id` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerId(pub(crate) usize);

impl ContainerId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A pointer position in page coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DropEffect {
    #[default]
    None,
    Copy,
    Link,
    Move,
}

/// The image shown under the cursor while dragging.
///
/// `x`/`y` is the cursor offset inside `node`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragImage {
    pub node: NodeId,
    pub x: i32,
    pub y: i32,
}

/// Mirror of the native drag data store attached to every drag event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataTransfer {
    /// `None` means "uninitialized" (the browser default).
    pub effect_allowed: Option<DropEffect>,
    pub drop_effect: DropEffect,
    pub drag_image: Option<DragImage>,
    data: BTreeMap<String, String>,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_data(&mut self, format: &str, data: &str) {
        self.data.insert(format.to_string(), data.to_string());
    }

    pub fn get_data(&self, format: &str) -> Option<&str> {
        self.data.get(format).map(String::as_str)
    }

    pub fn set_drag_image(&mut self, node: NodeId, x: i32, y: i32) {
        self.drag_image = Some(DragImage { node, x, y });
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragEventKind {
    DragStart,
    DragEnter,
    DragOver,
    Drop,
    DragEnd,
    MouseEnter,
    MouseLeave,
}

impl DragEventKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::DragStart => "dragstart",
            Self::DragEnter => "dragenter",
            Self::DragOver => "dragover",
            Self::Drop => "drop",
            Self::DragEnd => "dragend",
            Self::MouseEnter => "mouseenter",
            Self::MouseLeave => "mouseleave",
        }
    }

    /// `mouseenter`/`mouseleave` are delivered to the target only.
    pub fn bubbles(self) -> bool {
        !matches!(self, Self::MouseEnter | Self::MouseLeave)
    }
}

/// A native event delivered by the host.
///
/// After [`crate::Sortable::dispatch`] returns, `default_prevented` and
/// `propagation_stopped` tell the host what the handlers decided, and
/// `data_transfer` carries any effect/ghost changes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragEvent {
    pub kind: DragEventKind,
    pub target: NodeId,
    pub page: Point,
    pub data_transfer: DataTransfer,
    pub default_prevented: bool,
    pub propagation_stopped: bool,
}

impl DragEvent {
    pub fn new(kind: DragEventKind, target: NodeId, page: Point) -> Self {
        Self {
            kind,
            target,
            page,
            data_transfer: DataTransfer::new(),
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    pub fn drag_start(target: NodeId, page: Point) -> Self {
        Self::new(DragEventKind::DragStart, target, page)
    }

    pub fn drag_over(target: NodeId, page: Point) -> Self {
        Self::new(DragEventKind::DragOver, target, page)
    }

    pub fn drag_enter(target: NodeId, page: Point) -> Self {
        Self::new(DragEventKind::DragEnter, target, page)
    }

    pub fn drop(target: NodeId, page: Point) -> Self {
        Self::new(DragEventKind::Drop, target, page)
    }

    pub fn drag_end(target: NodeId) -> Self {
        Self::new(DragEventKind::DragEnd, target, Point::default())
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}
