// Example: emit the per-instance custom properties and the static stylesheet.
use scrollview::{STYLESHEET, ScrollbarTheme};

fn main() {
    let theme = ScrollbarTheme::new()
        .with_size("10px")
        .with_thumb_color("rgba(30, 30, 30, 0.4)", "rgba(30, 30, 30, 0.7)");

    println!("/* instance knobs */");
    println!("{}", theme.declarations());
    println!("/* shared rules */");
    println!("{STYLESHEET}");
}
