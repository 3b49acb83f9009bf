use crate::*;

use std::boxed::Box;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::vec::Vec;

use scrollview::{
    ScrollBehavior, ScrollToOptions, ScrollToRequest, ScrollViewOptions, Size, UpdateEvent,
};

#[derive(Debug, Default)]
struct FakeElement {
    client: Mutex<Size>,
    scroll: Mutex<Size>,
    top: Mutex<u64>,
    left: Mutex<u64>,
    requests: Mutex<Vec<ScrollToRequest>>,
}

impl FakeElement {
    fn new(client: Size, scroll: Size) -> Arc<Self> {
        Arc::new(Self {
            client: Mutex::new(client),
            scroll: Mutex::new(scroll),
            ..Self::default()
        })
    }

    fn resize_scroll_box(&self, scroll: Size) {
        *self.scroll.lock().unwrap() = scroll;
    }

    fn requests(&self) -> Vec<ScrollToRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl ScrollElement for FakeElement {
    fn client_size(&self) -> Size {
        *self.client.lock().unwrap()
    }

    fn scroll_size(&self) -> Size {
        *self.scroll.lock().unwrap()
    }

    fn scroll_top(&self) -> u64 {
        *self.top.lock().unwrap()
    }

    fn scroll_left(&self) -> u64 {
        *self.left.lock().unwrap()
    }

    fn scroll_to(&self, request: ScrollToRequest) {
        self.requests.lock().unwrap().push(request);
        *self.top.lock().unwrap() = request.top;
        *self.left.lock().unwrap() = request.left;
    }
}

#[derive(Default)]
struct RecordingWatch {
    observed: Arc<AtomicUsize>,
    disconnected: Arc<AtomicUsize>,
}

impl ResizeWatch for RecordingWatch {
    fn observe(&mut self, _target: Arc<dyn ScrollElement + Send + Sync>) {
        self.observed.fetch_add(1, Ordering::SeqCst);
    }

    fn disconnect(&mut self) {
        self.disconnected.fetch_add(1, Ordering::SeqCst);
    }
}

fn collecting_controller(
    viewport: Size,
    content: Size,
) -> (
    ScrollbarController,
    Arc<FakeElement>,
    Arc<FakeElement>,
    Arc<Mutex<Vec<UpdateEvent>>>,
) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let mut c = ScrollbarController::new(ScrollViewOptions::new().with_on_update(Some(
        move |event| {
            sink.lock().unwrap().push(event);
        },
    )));
    let viewport = FakeElement::new(viewport, viewport);
    let content = FakeElement::new(content, content);
    c.attach(viewport.clone(), content.clone(), None);
    (c, viewport, content, events)
}

#[test]
fn attach_runs_the_initial_detection_pass() {
    let (c, _viewport, _content, events) =
        collecting_controller(Size::new(200, 200), Size::new(200, 500));
    assert!(c.view().is_vertically_scrollable());
    assert!(!c.view().is_horizontally_scrollable());
    assert_eq!(events.lock().unwrap().len(), 1);
}

#[test]
fn resize_callbacks_drive_deduplicated_events() {
    let (mut c, _viewport, content, events) =
        collecting_controller(Size::new(200, 200), Size::new(100, 100));
    assert!(events.lock().unwrap().is_empty());

    content.resize_scroll_box(Size::new(100, 900));
    c.on_resize();
    content.resize_scroll_box(Size::new(100, 950));
    c.on_resize();
    content.resize_scroll_box(Size::new(100, 50));
    c.on_resize();

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 2);
    assert!(events[0].vertically_scrollable);
    assert!(!events[1].vertically_scrollable);
}

#[test]
fn manual_update_bypasses_the_watcher() {
    let (mut c, _viewport, content, events) =
        collecting_controller(Size::new(200, 200), Size::new(100, 100));

    content.resize_scroll_box(Size::new(900, 100));
    c.update();

    assert!(c.view().is_horizontally_scrollable());
    assert_eq!(events.lock().unwrap().len(), 1);
}

#[test]
fn scroll_to_issues_the_resolved_request() {
    let (mut c, viewport, _content, _events) =
        collecting_controller(Size::new(200, 200), Size::new(500, 500));

    c.scroll_to(
        ScrollToOptions::new()
            .with_top(100)
            .with_left(50)
            .with_behavior(ScrollBehavior::Smooth),
        0,
    );

    assert_eq!(
        viewport.requests(),
        [ScrollToRequest {
            top: 100,
            left: 50,
            behavior: ScrollBehavior::Smooth,
        }]
    );
}

#[test]
fn scroll_to_defaults_missing_fields() {
    let (mut c, viewport, _content, _events) =
        collecting_controller(Size::new(200, 200), Size::new(500, 500));

    c.scroll_to(ScrollToOptions::new().with_top(150), 0);
    c.scroll_to(
        ScrollToOptions::new()
            .with_left(75)
            .with_behavior(ScrollBehavior::Instant),
        0,
    );

    let requests = viewport.requests();
    assert_eq!(
        requests[0],
        ScrollToRequest {
            top: 150,
            left: 0,
            behavior: ScrollBehavior::Smooth,
        }
    );
    assert_eq!(
        requests[1],
        ScrollToRequest {
            top: 0,
            left: 75,
            behavior: ScrollBehavior::Instant,
        }
    );
}

#[test]
fn scroll_to_without_elements_still_resolves() {
    let mut c = ScrollbarController::new(ScrollViewOptions::new());
    let ticket = c.scroll_to(ScrollToOptions::new().with_top(100), 0);

    assert!(c.is_settling());
    let mut done = Vec::new();
    c.tick(300, |t| done.push(t));
    assert_eq!(done, [ticket]);
    assert!(!c.is_settling());
}

#[test]
fn instant_completions_resolve_immediately() {
    let (mut c, _viewport, _content, _events) =
        collecting_controller(Size::new(200, 200), Size::new(500, 500));

    let ticket = c.scroll_to(
        ScrollToOptions::new().with_behavior(ScrollBehavior::Instant),
        1000,
    );
    let mut done = Vec::new();
    c.tick(1000, |t| done.push(t));
    assert_eq!(done, [ticket]);
}

#[test]
fn smooth_completions_resolve_after_the_settle_delay() {
    let (mut c, _viewport, _content, _events) =
        collecting_controller(Size::new(200, 200), Size::new(500, 500));

    let ticket = c.scroll_to(ScrollToOptions::new().with_top(100), 1000);

    let mut done = Vec::new();
    c.tick(1299, |t| done.push(t));
    assert!(done.is_empty());
    assert_eq!(c.pending_completions(), 1);

    c.tick(1300, |t| done.push(t));
    assert_eq!(done, [ticket]);
}

#[test]
fn overlapping_scroll_tos_resolve_independently() {
    let (mut c, _viewport, _content, _events) =
        collecting_controller(Size::new(200, 200), Size::new(500, 500));

    let first = c.scroll_to(ScrollToOptions::new().with_top(100), 0);
    let second = c.scroll_to(ScrollToOptions::new().with_top(400), 100);
    assert_eq!(c.pending_completions(), 2);

    let mut done = Vec::new();
    c.tick(300, |t| done.push(t));
    assert_eq!(done, [first]);

    c.tick(400, |t| done.push(t));
    assert_eq!(done, [first, second]);
}

#[test]
fn configured_settle_delay_is_honored() {
    let mut c = ScrollbarController::new(ScrollViewOptions::new().with_smooth_settle_ms(120));
    let ticket = c.scroll_to(ScrollToOptions::new(), 0);

    let mut done = Vec::new();
    c.tick(119, |t| done.push(t));
    assert!(done.is_empty());
    c.tick(120, |t| done.push(t));
    assert_eq!(done, [ticket]);
}

#[test]
fn watcher_observes_both_elements_and_disconnects_once() {
    let watch = RecordingWatch::default();
    let observed = Arc::clone(&watch.observed);
    let disconnected = Arc::clone(&watch.disconnected);

    let mut c = ScrollbarController::new(ScrollViewOptions::new());
    c.attach(
        FakeElement::new(Size::new(100, 100), Size::new(100, 100)),
        FakeElement::new(Size::new(100, 300), Size::new(100, 300)),
        Some(Box::new(watch)),
    );
    assert!(c.is_watching());
    assert_eq!(observed.load(Ordering::SeqCst), 2);

    c.dispose();
    c.dispose();
    assert!(!c.is_watching());
    assert_eq!(disconnected.load(Ordering::SeqCst), 1);
}

#[test]
fn dispose_without_a_watcher_is_a_noop() {
    let mut c = ScrollbarController::new(ScrollViewOptions::new());
    c.dispose();
    c.dispose();
    assert!(!c.is_attached());

    let (mut c, _viewport, _content, _events) =
        collecting_controller(Size::new(200, 200), Size::new(500, 500));
    c.dispose();
    c.dispose();
    assert!(!c.is_attached());
    assert_eq!(c.scroll_top(), 0);
}

#[test]
fn noop_watch_degrades_silently() {
    let mut c = ScrollbarController::new(ScrollViewOptions::new());
    c.attach(
        FakeElement::new(Size::new(200, 200), Size::new(200, 200)),
        FakeElement::new(Size::new(200, 600), Size::new(200, 600)),
        Some(Box::new(NoopResizeWatch)),
    );

    // No notifications will ever arrive from the no-op facility; manual update still works.
    c.update();
    assert!(c.view().is_vertically_scrollable());

    c.dispose();
}

#[test]
fn scroll_offsets_read_through_the_viewport_handle() {
    let (mut c, viewport, _content, _events) =
        collecting_controller(Size::new(200, 200), Size::new(500, 500));

    c.scroll_to(
        ScrollToOptions::new()
            .with_top(123)
            .with_left(45)
            .with_behavior(ScrollBehavior::Instant),
        0,
    );
    assert_eq!(c.scroll_top(), 123);
    assert_eq!(c.scroll_left(), 45);

    // The exposed handle is the same element the request went to.
    let handle = c.viewport_element().unwrap();
    assert_eq!(handle.scroll_top(), 123);
    assert_eq!(handle.scroll_left(), 45);
    assert_eq!(viewport.requests().len(), 1);
}

#[test]
fn reattach_replaces_the_previous_watcher() {
    let first = RecordingWatch::default();
    let first_disconnected = Arc::clone(&first.disconnected);

    let mut c = ScrollbarController::new(ScrollViewOptions::new());
    let viewport = FakeElement::new(Size::new(100, 100), Size::new(100, 100));
    let content = FakeElement::new(Size::new(100, 100), Size::new(100, 100));

    c.attach(viewport.clone(), content.clone(), Some(Box::new(first)));
    c.attach(
        viewport,
        content,
        Some(Box::new(RecordingWatch::default())),
    );

    assert_eq!(first_disconnected.load(Ordering::SeqCst), 1);
    assert!(c.is_watching());
}
