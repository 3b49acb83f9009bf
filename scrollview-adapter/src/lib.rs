//! Host-binding utilities for the `scrollview` crate.
//!
//! The `scrollview` crate is UI-agnostic and focuses on the core state. This crate provides
//! the small, framework-neutral pieces a host binding needs:
//!
//! - [`ScrollElement`]: a minimal handle to a layout-participating element
//! - [`ResizeWatch`]: the injected resize-observation capability (with a no-op fallback for
//!   environments without one)
//! - [`ScrollbarController`]: wires elements and watcher to the engine, issues scroll
//!   requests, and resolves deferred scroll-to completions from `tick(now_ms)`
//!
//! This crate is intentionally framework-agnostic (no DOM/ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod element;
mod observer;

#[cfg(test)]
mod tests;

pub use controller::{ScrollToTicket, ScrollbarController};
pub use element::ScrollElement;
pub use observer::{NoopResizeWatch, ResizeWatch};
