//! A headless scroll-container engine.
//!
//! For host-binding utilities (element handles, resize watching, deferred scroll-to
//! completion), see the `scrollview-adapter` crate.
//!
//! This crate focuses on the state a styled native scroll container needs: per-axis
//! overflow detection, de-duplicated change notification, CSS class/attribute
//! projection, and scrollbar theming.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - viewport client box and content scroll box sizes
//! - scroll offsets
//! - a re-detection trigger on element resize (or manual `update` calls)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod classes;
mod options;
mod scrollview;
mod state;
mod theme;
mod types;


pub use classes::{
    CONTENT_CLASS, HORIZONTAL_SCROLLABLE_CLASS, VERTICAL_SCROLLABLE_CLASS, VIEWPORT_CLASS,
    ViewportClasses,
};
pub use options::{OnUpdateCallback, ScrollViewOptions};
pub use scrollview::ScrollView;
pub use state::ScrollabilityState;
pub use theme::{STYLESHEET, ScrollbarTheme};
pub use types::{Orientation, ScrollBehavior, ScrollToOptions, ScrollToRequest, Size, UpdateEvent};
