// Example: a simulated host driving the controller without any real UI.
//
// A host binding would:
// - wrap its platform elements in `ScrollElement` handles
// - attach them (plus a resize watcher, if the platform has one)
// - call on_resize() from the watcher callback, tick(now_ms) from its frame loop
// - apply the projected classes/attributes after each update event
use std::sync::{Arc, Mutex};

use scrollview::{ScrollToOptions, ScrollToRequest, ScrollViewOptions, Size};
use scrollview_adapter::{ScrollElement, ScrollbarController};

#[derive(Debug, Default)]
struct SimElement {
    client: Mutex<Size>,
    scroll: Mutex<Size>,
    top: Mutex<u64>,
    left: Mutex<u64>,
}

impl ScrollElement for SimElement {
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
        println!("native scrollTo: {request:?}");
        *self.top.lock().unwrap() = request.top;
        *self.left.lock().unwrap() = request.left;
    }
}

fn main() {
    let viewport = Arc::new(SimElement {
        client: Mutex::new(Size::new(200, 200)),
        scroll: Mutex::new(Size::new(200, 200)),
        ..SimElement::default()
    });
    let content = Arc::new(SimElement {
        client: Mutex::new(Size::new(200, 200)),
        scroll: Mutex::new(Size::new(200, 150)),
        ..SimElement::default()
    });

    let mut c = ScrollbarController::new(ScrollViewOptions::new().with_on_update(Some(
        |event| {
            println!("afterUpdate: {event:?}");
        },
    )));
    c.attach(viewport.clone(), content.clone(), None);
    println!("classes={:?}", c.view().viewport_classes().class_attr());

    // Content grows past the viewport (as a resize observer would report).
    *content.scroll.lock().unwrap() = Size::new(200, 1200);
    c.on_resize();
    println!("classes={:?}", c.view().viewport_classes().class_attr());

    // Smooth scroll-to with a deferred completion.
    let ticket = c.scroll_to(ScrollToOptions::new().with_top(600), 0);
    let mut now_ms = 0u64;
    while c.is_settling() {
        now_ms += 100;
        c.tick(now_ms, |done| {
            println!("t={now_ms} settled {done:?} (issued as {ticket:?})");
        });
    }

    c.dispose();
    println!("scroll_top after dispose: {}", c.scroll_top());
}
