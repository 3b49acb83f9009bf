use scrollview::{ScrollToRequest, Size};

/// A minimal handle to a layout-participating element.
///
/// Implementations wrap whatever the host platform calls an element (a DOM node, a widget
/// id, a TUI pane) and answer box-geometry queries. All methods are infallible: a handle
/// whose backing element is gone should report zero boxes/offsets and ignore scroll
/// requests, matching the engine's silent-degradation contract.
pub trait ScrollElement {
    /// The visible client box (excluding any native scrollbar gutter).
    fn client_size(&self) -> Size;

    /// The full scrollable content box.
    fn scroll_size(&self) -> Size;

    /// Current vertical scroll offset.
    fn scroll_top(&self) -> u64;

    /// Current horizontal scroll offset.
    fn scroll_left(&self) -> u64;

    /// Issues a native scroll request.
    fn scroll_to(&self, request: ScrollToRequest);
}
