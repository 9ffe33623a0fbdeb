// File: crates/bargraph-core/src/types.rs
// Summary: Shared layout constants (sizes, margins, font sizes).

/// Default panel width in pixels; the owning stack overrides it before rendering.
pub const PANEL_WIDTH: i32 = 100;
/// Default panel height in pixels.
pub const PANEL_HEIGHT: i32 = 80;
/// Default left margin of the bar inside a panel.
pub const PANEL_INDENT: i32 = 10;

/// Default stack (canvas) width in pixels.
pub const STACK_WIDTH: i32 = 100;
/// Default vertical gap between panels.
pub const STACK_SPACING: i32 = 10;
/// Panels are laid out `stack width - STACK_INSET` wide.
pub const STACK_INSET: i32 = 2;

/// Title pixel size; the title baseline sits at this offset from the panel top.
pub const TITLE_HEIGHT: i32 = 24;
/// Gap between the title and the bar band.
pub const TITLE_MARGIN: i32 = 6;
/// Pixel size of value and label text.
pub const LABEL_HEIGHT: i32 = 12;
/// Padding below each label line.
pub const LABEL_MARGIN: i32 = 3;

/// Font families tried in order for panel titles.
pub const TITLE_FAMILIES: &[&str] = &["Futura LT Pro Light", "Futura", "Liberation Sans", "DejaVu Sans", "sans-serif"];
/// Font families tried in order for value and label text.
pub const LABEL_FAMILIES: &[&str] = &["Liberation Sans", "Arial", "Helvetica", "DejaVu Sans", "sans-serif"];
