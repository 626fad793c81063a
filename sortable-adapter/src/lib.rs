//! Adapter utilities for the `sortable` crate.
//!
//! The `sortable` crate is UI-agnostic and returns its notifications from `dispatch`. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A controller that fans `sortstart`/`sortstop`/`sortupdate` out to subscribed listeners
//! - Scripted drag gestures for tests, demos and input replay
//!
//! This crate is intentionally framework-agnostic (no web-sys/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod gesture;

#[cfg(test)]
mod tests;

pub use controller::{Controller, Listener, ListenerId};
pub use gesture::{Gesture, GestureStep};
