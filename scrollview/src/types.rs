/// Scrolling orientation of the container.
///
/// Purely a presentational hint: it selects the overflow-axis CSS rules and is reflected
/// verbatim as the host `orientation` attribute. Overflow detection always evaluates both
/// axes regardless of orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Vertical,
    Horizontal,
    Auto,
}

impl Orientation {
    /// The attribute value reflected on the host element.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
            Self::Auto => "auto",
        }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::Vertical
    }
}

/// Requested scroll animation behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

impl Default for ScrollBehavior {
    fn default() -> Self {
        Self::Smooth
    }
}

/// A box size.
///
/// Used for both viewport client boxes and content scroll boxes. The engine is
/// unit-agnostic (CSS pixels, terminal cells, ...).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Snapshot emitted to the consumer when the detected scrollability changes.
///
/// Created fresh per emission; both fields reflect the state at that instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpdateEvent {
    pub vertically_scrollable: bool,
    pub horizontally_scrollable: bool,
}

/// Consumer-facing scroll-to options.
///
/// Unset fields fall back to defaults on [`Self::resolve`]: `top = 0`, `left = 0`,
/// `behavior = Smooth`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollToOptions {
    pub top: Option<u64>,
    pub left: Option<u64>,
    pub behavior: Option<ScrollBehavior>,
}

impl ScrollToOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_top(mut self, top: u64) -> Self {
        self.top = Some(top);
        self
    }

    pub fn with_left(mut self, left: u64) -> Self {
        self.left = Some(left);
        self
    }

    pub fn with_behavior(mut self, behavior: ScrollBehavior) -> Self {
        self.behavior = Some(behavior);
        self
    }

    /// Applies the defaults, producing the request issued to the platform element.
    pub fn resolve(self) -> ScrollToRequest {
        ScrollToRequest {
            top: self.top.unwrap_or(0),
            left: self.left.unwrap_or(0),
            behavior: self.behavior.unwrap_or_default(),
        }
    }
}

/// A fully-resolved scroll request, as issued to the platform element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollToRequest {
    pub top: u64,
    pub left: u64,
    pub behavior: ScrollBehavior,
}
