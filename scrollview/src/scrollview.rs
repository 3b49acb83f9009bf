use alloc::sync::Arc;

use crate::{
    Orientation, ScrollBehavior, ScrollToOptions, ScrollToRequest, ScrollViewOptions,
    ScrollabilityState, Size, UpdateEvent, ViewportClasses,
};

/// A headless scroll-container engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your host drives it by feeding box sizes (from a resize observer or layout pass) and
///   scroll offsets.
/// - Rendering is exposed as pure projections ([`Self::viewport_classes`],
///   [`Orientation::as_str`]).
///
/// Detection compares the content scroll box against the viewport client box per axis with
/// a strict `>`: equal dimensions are not scrollable. A pass over unchanged state emits
/// nothing; the `on_update` callback fires exactly when the pair transitions.
///
/// For element handles, resize watching and deferred scroll-to completion, see the
/// `scrollview-adapter` crate.
#[derive(Clone, Debug)]
pub struct ScrollView {
    options: ScrollViewOptions,
    viewport: Option<Size>,
    content: Option<Size>,
    scrollable: ScrollabilityState,
    scroll_top: u64,
    scroll_left: u64,
}

impl ScrollView {
    /// Creates a new engine from options.
    ///
    /// `options.initial_viewport` / `options.initial_content` seed the box sizes, but the
    /// scrollability pair always starts `false`/`false`; the first detection pass runs on
    /// [`Self::attach`] or [`Self::update`].
    pub fn new(options: ScrollViewOptions) -> Self {
        svdebug!(
            orientation = options.orientation.as_str(),
            smooth_settle_ms = options.smooth_settle_ms,
            "ScrollView::new"
        );
        Self {
            viewport: options.initial_viewport,
            content: options.initial_content,
            scrollable: ScrollabilityState::default(),
            scroll_top: 0,
            scroll_left: 0,
            options,
        }
    }

    pub fn options(&self) -> &ScrollViewOptions {
        &self.options
    }

    /// Replaces the options.
    ///
    /// Orientation and the callback take effect immediately; the `initial_*` boxes are only
    /// read at construction. The detected state is left untouched (options cannot change
    /// what overflows).
    pub fn set_options(&mut self, options: ScrollViewOptions) {
        svdebug!(
            orientation = options.orientation.as_str(),
            smooth_settle_ms = options.smooth_settle_ms,
            "ScrollView::set_options"
        );
        self.options = options;
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut ScrollViewOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_update(
        &mut self,
        on_update: Option<impl Fn(UpdateEvent) + Send + Sync + 'static>,
    ) {
        self.options.on_update = on_update.map(|f| Arc::new(f) as _);
    }

    pub fn orientation(&self) -> Orientation {
        self.options.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.options.orientation = orientation;
    }

    /// Marks the container as mounted, seeds both boxes, and runs the initial detection
    /// pass.
    ///
    /// This is the "after view ready" lifecycle entry point.
    pub fn attach(&mut self, viewport: Size, content: Size) {
        self.viewport = Some(viewport);
        self.content = Some(content);
        self.check();
    }

    /// Marks the container as unmounted.
    ///
    /// Box sizes become unknown and the offset accessors fall back to 0. Detection passes
    /// while detached are silent no-ops.
    pub fn detach(&mut self) {
        self.viewport = None;
        self.content = None;
    }

    pub fn is_attached(&self) -> bool {
        self.viewport.is_some() && self.content.is_some()
    }

    pub fn viewport_size(&self) -> Option<Size> {
        self.viewport
    }

    pub fn content_size(&self) -> Option<Size> {
        self.content
    }

    pub fn set_viewport_size(&mut self, size: Size) {
        if self.viewport == Some(size) {
            return;
        }
        self.viewport = Some(size);
        self.check();
    }

    pub fn set_content_size(&mut self, size: Size) {
        if self.content == Some(size) {
            return;
        }
        self.content = Some(size);
        self.check();
    }

    /// Applies a resize of both boxes in one coalesced detection pass.
    ///
    /// This is the recommended entry point for resize-observer callbacks, which typically
    /// report viewport and content changes together.
    pub fn apply_resize(&mut self, viewport: Size, content: Size) {
        svtrace!(
            viewport_w = viewport.width,
            viewport_h = viewport.height,
            content_w = content.width,
            content_h = content.height,
            "apply_resize"
        );
        self.viewport = Some(viewport);
        self.content = Some(content);
        self.check();
    }

    /// Manually re-runs the detection pass, bypassing any watcher.
    pub fn update(&mut self) {
        self.check();
    }

    pub fn scrollability(&self) -> ScrollabilityState {
        self.scrollable
    }

    pub fn is_vertically_scrollable(&self) -> bool {
        self.scrollable.vertical
    }

    pub fn is_horizontally_scrollable(&self) -> bool {
        self.scrollable.horizontal
    }

    /// Mirrors the host-reported scroll offsets.
    ///
    /// Offsets are plain state: changing them never fires `on_update`.
    pub fn set_scroll_offsets(&mut self, top: u64, left: u64) {
        self.scroll_top = top;
        self.scroll_left = left;
    }

    /// Current vertical scroll offset, 0 while detached.
    pub fn scroll_top(&self) -> u64 {
        if self.is_attached() { self.scroll_top } else { 0 }
    }

    /// Current horizontal scroll offset, 0 while detached.
    pub fn scroll_left(&self) -> u64 {
        if self.is_attached() { self.scroll_left } else { 0 }
    }

    /// Resolves consumer scroll-to options into the request issued to the platform.
    pub fn resolve_scroll_to(&self, options: ScrollToOptions) -> ScrollToRequest {
        options.resolve()
    }

    /// Fixed delay approximating a scroll-to completion for `behavior`.
    pub fn settle_delay_ms(&self, behavior: ScrollBehavior) -> u64 {
        match behavior {
            ScrollBehavior::Instant => 0,
            ScrollBehavior::Smooth => self.options.smooth_settle_ms,
        }
    }

    /// The viewport element's class list, projected from the current state.
    pub fn viewport_classes(&self) -> ViewportClasses {
        ViewportClasses::from_state(self.scrollable)
    }

    /// The detection pass: recompute both axes, compare against the stored pair, and emit
    /// one event on transition. A no-op while either box is unknown.
    fn check(&mut self) {
        let (Some(viewport), Some(content)) = (self.viewport, self.content) else {
            return;
        };

        let next = ScrollabilityState {
            vertical: content.height > viewport.height,
            horizontal: content.width > viewport.width,
        };

        if next == self.scrollable {
            return;
        }

        self.scrollable = next;
        svtrace!(
            vertical = next.vertical,
            horizontal = next.horizontal,
            "scrollability changed"
        );
        if let Some(cb) = &self.options.on_update {
            cb(next.to_event());
        }
    }
}
