use alloc::string::String;
use alloc::vec::Vec;

use crate::ScrollabilityState;

/// Base CSS class carried by the viewport wrapper element.
pub const VIEWPORT_CLASS: &str = "scrollview-viewport";
/// Base CSS class carried by the content wrapper element.
pub const CONTENT_CLASS: &str = "scrollview-content";
/// Added to the viewport when content overflows vertically.
pub const VERTICAL_SCROLLABLE_CLASS: &str = "vertical-scrollable";
/// Added to the viewport when content overflows horizontally.
pub const HORIZONTAL_SCROLLABLE_CLASS: &str = "horizontal-scrollable";

/// The viewport element's class list, projected from scrollability state.
///
/// A pure projection: recompute after every state change and diff/apply in the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportClasses {
    pub vertical_scrollable: bool,
    pub horizontal_scrollable: bool,
}

impl ViewportClasses {
    pub fn from_state(state: ScrollabilityState) -> Self {
        Self {
            vertical_scrollable: state.vertical,
            horizontal_scrollable: state.horizontal,
        }
    }

    /// Emits the class list (base class first) without allocations.
    pub fn for_each_class(&self, mut f: impl FnMut(&'static str)) {
        f(VIEWPORT_CLASS);
        if self.vertical_scrollable {
            f(VERTICAL_SCROLLABLE_CLASS);
        }
        if self.horizontal_scrollable {
            f(HORIZONTAL_SCROLLABLE_CLASS);
        }
    }

    /// Collects the class list into `out` (clears `out` first).
    pub fn collect_classes(&self, out: &mut Vec<&'static str>) {
        out.clear();
        self.for_each_class(|class| out.push(class));
    }

    /// Renders the space-separated `class` attribute value.
    pub fn class_attr(&self) -> String {
        let mut out = String::new();
        self.for_each_class(|class| {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(class);
        });
        out
    }
}
