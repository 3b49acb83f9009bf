// Example: minimal usage — feed box sizes, observe de-duplicated update events.
use scrollview::{ScrollView, ScrollViewOptions, Size};

fn main() {
    let mut view = ScrollView::new(ScrollViewOptions::new().with_on_update(Some(|event| {
        println!("afterUpdate: {event:?}");
    })));

    // "View ready": seed both boxes and run the first detection pass.
    view.attach(Size::new(200, 200), Size::new(200, 150));
    println!("classes={:?}", view.viewport_classes().class_attr());

    // Content grows past the viewport: one event fires.
    view.apply_resize(Size::new(200, 200), Size::new(200, 900));
    println!("classes={:?}", view.viewport_classes().class_attr());

    // Same outcome again: silent.
    view.apply_resize(Size::new(200, 200), Size::new(200, 1200));

    // Shrinks back: the second (and last) event fires.
    view.apply_resize(Size::new(200, 200), Size::new(200, 100));
    println!(
        "orientation={} scrollable={:?}",
        view.orientation().as_str(),
        view.scrollability()
    );
}
