// File: crates/bargraph-core/src/theme.rs
// Summary: Light/Dark theming for panel text, outlines and canvas background.

use skia_safe as skia;

use crate::palette;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    /// Panel title text.
    pub title: skia::Color,
    /// Value text drawn over the bottom of the bar band.
    pub value_label: skia::Color,
    /// Label text in the bottom band.
    pub label: skia::Color,
    /// Stroke around each bar segment.
    pub segment_outline: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: palette::WHITE,
            title: palette::DARK_GRAY,
            value_label: palette::WHITE,
            label: palette::LIGHT_GRAY,
            segment_outline: palette::WHITE,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            title: skia::Color::from_argb(255, 180, 180, 190),
            value_label: skia::Color::from_argb(255, 18, 18, 20),
            label: skia::Color::from_argb(255, 150, 150, 160),
            segment_outline: skia::Color::from_argb(255, 18, 18, 20),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
