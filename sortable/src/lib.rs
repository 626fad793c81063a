//! A headless drag-and-drop list reordering engine.
//!
//! This crate turns lists of sibling elements into reorderable lists driven by the native
//! drag-and-drop event sequence
//! (`dragstart` → `dragover`/`dragenter`* → `drop`? → `dragend`).
//! It tracks a placeholder that shows where the dragged item would land, commits the move on
//! drop, and reports `sortstart` / `sortstop` / `sortupdate` notifications, including moves
//! across connected lists.
//!
//! It is UI-agnostic. A host layer is expected to:
//! - mirror its element tree into a [`Document`] (tags, classes, attributes, heights)
//! - forward native drag events through [`Sortable::dispatch`]
//! - apply the resulting tree changes and act on the returned [`SortEvent`]s
//!
//! For listener registration and scripted gestures, see the `sortable-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod command;
mod dom;
mod error;
mod events;
pub mod geometry;
mod ghost;
#[cfg(feature = "std")]
mod markup;
mod options;
mod placeholder;
mod registry;
mod resolve;
mod selector;
mod session;
mod sortable;
mod types;


pub use command::Command;
pub use dom::Document;
pub use error::{MarkupError, SelectorError, SortableError};
pub use events::{SortEvent, SortEventDetail, SortEventKind, SortStart, SortStop, SortUpdate};
pub use ghost::Ghost;
pub use options::{
    DEFAULT_DRAGGING_CLASS, DEFAULT_HOVER_CLASS, DEFAULT_PLACEHOLDER_CLASS, HoverClass,
    PlaceholderSource, SortableOptions,
};
pub use placeholder::in_dead_zone;
pub use registry::{Container, Registry};
pub use selector::Selector;
pub use session::{DragPhase, DragSession};
pub use sortable::Sortable;
pub use types::{
    ContainerId, DataTransfer, DragEvent, DragEventKind, DragImage, DropEffect, NodeId, Point,
};
