use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;

use scrollview::{ScrollToOptions, ScrollView, ScrollViewOptions, UpdateEvent};

use crate::{ResizeWatch, ScrollElement};

/// Identifies one pending scroll-to completion.
///
/// Tickets resolve independently: starting a second scroll-to while one is pending does
/// not cancel the first, and every ticket resolves exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollToTicket(u64);

#[derive(Clone, Copy, Debug)]
struct PendingScrollTo {
    ticket: ScrollToTicket,
    resolve_at_ms: u64,
}

/// A framework-neutral controller that wraps a [`scrollview::ScrollView`] and binds it to
/// host element handles.
///
/// The controller holds no platform objects beyond the injected handles. Hosts drive it by
/// calling:
/// - [`Self::attach`] once the viewport/content elements exist, [`Self::dispose`] on
///   teardown
/// - [`Self::on_resize`] from the resize-observation callback
/// - [`Self::tick`] each frame/timer tick, to resolve deferred scroll-to completions
pub struct ScrollbarController {
    view: ScrollView,
    viewport: Option<Arc<dyn ScrollElement + Send + Sync>>,
    content: Option<Arc<dyn ScrollElement + Send + Sync>>,
    watch: Option<Box<dyn ResizeWatch + Send>>,
    pending: Vec<PendingScrollTo>,
    next_ticket: u64,
}

impl ScrollbarController {
    pub fn new(options: ScrollViewOptions) -> Self {
        Self::from_view(ScrollView::new(options))
    }

    pub fn from_view(view: ScrollView) -> Self {
        Self {
            view,
            viewport: None,
            content: None,
            watch: None,
            pending: Vec::new(),
            next_ticket: 0,
        }
    }

    pub fn view(&self) -> &ScrollView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ScrollView {
        &mut self.view
    }

    pub fn into_view(self) -> ScrollView {
        self.view
    }

    /// Binds the element handles once the host's view exists, installs the resize watcher
    /// over both elements, and runs the initial detection pass.
    ///
    /// Pass `None` for `watch` when the host environment has no resize-observation
    /// facility; detection then only happens on [`Self::update`] / [`Self::on_resize`].
    pub fn attach(
        &mut self,
        viewport: Arc<dyn ScrollElement + Send + Sync>,
        content: Arc<dyn ScrollElement + Send + Sync>,
        watch: Option<Box<dyn ResizeWatch + Send>>,
    ) {
        self.dispose_watch();
        if let Some(mut watch) = watch {
            watch.observe(Arc::clone(&viewport));
            watch.observe(Arc::clone(&content));
            self.watch = Some(watch);
        }
        self.viewport = Some(viewport);
        self.content = Some(content);
        self.sync_from_elements();
    }

    /// Tears the binding down.
    ///
    /// Idempotent: safe to call repeatedly, and when no watcher was ever installed.
    /// Pending scroll-to completions are kept; they still resolve from [`Self::tick`].
    pub fn dispose(&mut self) {
        self.dispose_watch();
        self.viewport = None;
        self.content = None;
        self.view.detach();
    }

    fn dispose_watch(&mut self) {
        if let Some(mut watch) = self.watch.take() {
            watch.disconnect();
        }
    }

    pub fn is_attached(&self) -> bool {
        self.viewport.is_some() && self.content.is_some()
    }

    pub fn is_watching(&self) -> bool {
        self.watch.is_some()
    }

    /// Call this from the resize-observation callback: re-reads both boxes and re-runs
    /// detection. A no-op while unattached.
    pub fn on_resize(&mut self) {
        self.sync_from_elements();
    }

    /// Manually triggers a re-check, bypassing the watcher.
    pub fn update(&mut self) {
        self.sync_from_elements();
        self.view.update();
    }

    fn sync_from_elements(&mut self) {
        let (Some(viewport), Some(content)) = (&self.viewport, &self.content) else {
            return;
        };
        self.view
            .set_scroll_offsets(viewport.scroll_top(), viewport.scroll_left());
        self.view
            .apply_resize(viewport.client_size(), content.scroll_size());
    }

    /// Issues a scroll request against the viewport element and returns a completion
    /// ticket.
    ///
    /// Completion is approximated by a fixed delay — none for `Instant`, the configured
    /// settle delay otherwise — rather than by observing the native animation. Without a
    /// viewport element no request is issued, but the ticket still resolves on schedule.
    pub fn scroll_to(&mut self, options: ScrollToOptions, now_ms: u64) -> ScrollToTicket {
        let request = self.view.resolve_scroll_to(options);
        if let Some(viewport) = &self.viewport {
            viewport.scroll_to(request);
        }

        let delay_ms = self.view.settle_delay_ms(request.behavior);
        let ticket = ScrollToTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending.push(PendingScrollTo {
            ticket,
            resolve_at_ms: now_ms.saturating_add(delay_ms),
        });
        ticket
    }

    /// Resolves pending scroll-to completions whose deadline has passed.
    ///
    /// Completed tickets are reported in issue order. There is no cancellation: every
    /// ticket resolves exactly once, even if another scroll-to started meanwhile.
    pub fn tick(&mut self, now_ms: u64, mut on_complete: impl FnMut(ScrollToTicket)) {
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].resolve_at_ms <= now_ms {
                let done = self.pending.remove(i);
                on_complete(done.ticket);
            } else {
                i += 1;
            }
        }
    }

    /// Whether any scroll-to completion is still pending.
    pub fn is_settling(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn pending_completions(&self) -> usize {
        self.pending.len()
    }

    /// The bound viewport element, if attached.
    pub fn viewport_element(&self) -> Option<Arc<dyn ScrollElement + Send + Sync>> {
        self.viewport.clone()
    }

    /// Current vertical scroll offset read through the viewport handle, 0 while
    /// unattached.
    pub fn scroll_top(&self) -> u64 {
        self.viewport.as_ref().map_or(0, |e| e.scroll_top())
    }

    /// Current horizontal scroll offset read through the viewport handle, 0 while
    /// unattached.
    pub fn scroll_left(&self) -> u64 {
        self.viewport.as_ref().map_or(0, |e| e.scroll_left())
    }

    pub fn set_on_update(
        &mut self,
        on_update: Option<impl Fn(UpdateEvent) + Send + Sync + 'static>,
    ) {
        self.view.set_on_update(on_update);
    }
}

impl core::fmt::Debug for ScrollbarController {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollbarController")
            .field("view", &self.view)
            .field("attached", &self.is_attached())
            .field("watching", &self.is_watching())
            .field("pending", &self.pending.len())
            .finish_non_exhaustive()
    }
}
