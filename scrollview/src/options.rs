use alloc::sync::Arc;

use crate::{Orientation, Size, UpdateEvent};

/// A callback fired when the detected scrollability pair changes.
///
/// This is the engine's sole outward signal; it never fires for a detection pass that
/// leaves both booleans unchanged.
pub type OnUpdateCallback = Arc<dyn Fn(UpdateEvent) + Send + Sync>;

/// Configuration for [`crate::ScrollView`].
///
/// Cheap to clone: the callback is stored in an `Arc` so hosts can update a field and call
/// `ScrollView::set_options` without reallocating closures.
pub struct ScrollViewOptions {
    /// Presentational orientation hint.
    ///
    /// Drives the overflow-axis CSS rules and the host `orientation` attribute only; it
    /// does not gate overflow detection.
    pub orientation: Orientation,

    /// Viewport client box to seed the engine with, when known before attach.
    pub initial_viewport: Option<Size>,
    /// Content scroll box to seed the engine with, when known before attach.
    pub initial_content: Option<Size>,

    /// Fired after a detection pass that changed the scrollability pair.
    pub on_update: Option<OnUpdateCallback>,

    /// Approximate settle time for smooth scroll-to completions.
    ///
    /// Deferred completion does not observe the native animation: smooth requests resolve
    /// after this fixed delay, instant requests after none.
    pub smooth_settle_ms: u64,
}

impl ScrollViewOptions {
    pub fn new() -> Self {
        Self {
            orientation: Orientation::Vertical,
            initial_viewport: None,
            initial_content: None,
            on_update: None,
            smooth_settle_ms: 300,
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_initial_viewport(mut self, initial_viewport: Option<Size>) -> Self {
        self.initial_viewport = initial_viewport;
        self
    }

    pub fn with_initial_content(mut self, initial_content: Option<Size>) -> Self {
        self.initial_content = initial_content;
        self
    }

    pub fn with_on_update(
        mut self,
        on_update: Option<impl Fn(UpdateEvent) + Send + Sync + 'static>,
    ) -> Self {
        self.on_update = on_update.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_smooth_settle_ms(mut self, smooth_settle_ms: u64) -> Self {
        self.smooth_settle_ms = smooth_settle_ms;
        self
    }
}

impl Default for ScrollViewOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ScrollViewOptions {
    fn clone(&self) -> Self {
        Self {
            orientation: self.orientation,
            initial_viewport: self.initial_viewport,
            initial_content: self.initial_content,
            on_update: self.on_update.clone(),
            smooth_settle_ms: self.smooth_settle_ms,
        }
    }
}

impl core::fmt::Debug for ScrollViewOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollViewOptions")
            .field("orientation", &self.orientation)
            .field("initial_viewport", &self.initial_viewport)
            .field("initial_content", &self.initial_content)
            .field("smooth_settle_ms", &self.smooth_settle_ms)
            .finish_non_exhaustive()
    }
}
