use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt::Write;

/// Static stylesheet for the container.
///
/// Styles native scrollbars via CSS custom properties (see [`ScrollbarTheme`]) for webkit
/// browsers and Firefox, and applies the orientation-specific overflow-axis rules keyed off
/// the host `orientation` attribute. All visual scrollbar rendering stays native.
pub const STYLESHEET: &str = "\
.scrollview-viewport {
  height: 100%;
  width: 100%;
  overflow: auto;
  -webkit-overflow-scrolling: touch;
  overscroll-behavior: contain;
  scrollbar-width: thin;
  scrollbar-color: var(--scrollbar-thumb-color) var(--scrollbar-track-color);
}

.scrollview-viewport::-webkit-scrollbar {
  width: var(--scrollbar-size);
  height: var(--scrollbar-size);
}

.scrollview-viewport::-webkit-scrollbar-track {
  background: var(--scrollbar-track-color);
  border-radius: var(--scrollbar-track-radius);
}

.scrollview-viewport::-webkit-scrollbar-thumb {
  background: var(--scrollbar-thumb-color);
  border-radius: var(--scrollbar-thumb-radius);
  border: var(--scrollbar-thumb-border);
  box-shadow: var(--scrollbar-thumb-shadow);
  transition: background 0.2s ease, box-shadow 0.2s ease, border 0.2s ease;
}

.scrollview-viewport::-webkit-scrollbar-thumb:hover {
  background: var(--scrollbar-thumb-color-hover);
  border: var(--scrollbar-thumb-border-hover);
  box-shadow: var(--scrollbar-thumb-shadow-hover);
}

[orientation='vertical'] .scrollview-viewport {
  overflow-x: hidden;
  overflow-y: auto;
}

[orientation='horizontal'] .scrollview-viewport {
  overflow-x: auto;
  overflow-y: hidden;
}

.scrollview-content {
  min-height: 100%;
  min-width: 100%;
}
";

/// Per-instance CSS custom-property knobs for native scrollbar styling.
///
/// Values are raw CSS and are not validated. `Default` matches the stock look: a thin
/// translucent thumb over a transparent track.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollbarTheme {
    /// Scrollbar thickness (`--scrollbar-size`).
    pub size: Cow<'static, str>,
    pub track_color: Cow<'static, str>,
    pub track_radius: Cow<'static, str>,
    pub thumb_color: Cow<'static, str>,
    pub thumb_color_hover: Cow<'static, str>,
    pub thumb_radius: Cow<'static, str>,
    pub thumb_shadow: Cow<'static, str>,
    pub thumb_shadow_hover: Cow<'static, str>,
    pub thumb_border: Cow<'static, str>,
    pub thumb_border_hover: Cow<'static, str>,
}

impl Default for ScrollbarTheme {
    fn default() -> Self {
        Self {
            size: Cow::Borrowed("7px"),
            track_color: Cow::Borrowed("transparent"),
            track_radius: Cow::Borrowed("4px"),
            thumb_color: Cow::Borrowed("rgba(0, 0, 0, 0.3)"),
            thumb_color_hover: Cow::Borrowed("rgba(0, 0, 0, 0.5)"),
            thumb_radius: Cow::Borrowed("4px"),
            thumb_shadow: Cow::Borrowed("none"),
            thumb_shadow_hover: Cow::Borrowed("none"),
            thumb_border: Cow::Borrowed("none"),
            thumb_border_hover: Cow::Borrowed("none"),
        }
    }
}

impl ScrollbarTheme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, size: impl Into<Cow<'static, str>>) -> Self {
        self.size = size.into();
        self
    }

    pub fn with_track_color(mut self, track_color: impl Into<Cow<'static, str>>) -> Self {
        self.track_color = track_color.into();
        self
    }

    pub fn with_thumb_color(
        mut self,
        thumb_color: impl Into<Cow<'static, str>>,
        thumb_color_hover: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.thumb_color = thumb_color.into();
        self.thumb_color_hover = thumb_color_hover.into();
        self
    }

    pub fn with_radius(
        mut self,
        track_radius: impl Into<Cow<'static, str>>,
        thumb_radius: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.track_radius = track_radius.into();
        self.thumb_radius = thumb_radius.into();
        self
    }

    /// Writes the custom-property declarations for one instance into `out`.
    ///
    /// The host applies these on the container element (inline `style` or a scoped rule);
    /// [`STYLESHEET`] consumes them via `var(...)`.
    pub fn write_declarations(&self, out: &mut String) {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "--scrollbar-size: {};", self.size);
        let _ = writeln!(out, "--scrollbar-track-color: {};", self.track_color);
        let _ = writeln!(out, "--scrollbar-track-radius: {};", self.track_radius);
        let _ = writeln!(out, "--scrollbar-thumb-color: {};", self.thumb_color);
        let _ = writeln!(
            out,
            "--scrollbar-thumb-color-hover: {};",
            self.thumb_color_hover
        );
        let _ = writeln!(out, "--scrollbar-thumb-radius: {};", self.thumb_radius);
        let _ = writeln!(out, "--scrollbar-thumb-shadow: {};", self.thumb_shadow);
        let _ = writeln!(
            out,
            "--scrollbar-thumb-shadow-hover: {};",
            self.thumb_shadow_hover
        );
        let _ = writeln!(out, "--scrollbar-thumb-border: {};", self.thumb_border);
        let _ = writeln!(
            out,
            "--scrollbar-thumb-border-hover: {};",
            self.thumb_border_hover
        );
    }

    /// The custom-property declarations as one string.
    pub fn declarations(&self) -> String {
        let mut out = String::new();
        self.write_declarations(&mut out);
        out
    }
}
