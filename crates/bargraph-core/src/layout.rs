// File: crates/bargraph-core/src/layout.rs
// Summary: Proportional width arithmetic and band geometry for a single panel.

use crate::geometry::{clamp, RectI32};
use crate::types::{LABEL_HEIGHT, LABEL_MARGIN, TITLE_HEIGHT, TITLE_MARGIN};

/// Horizontal placement of one bar segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    /// Cursor before this segment.
    pub start: i32,
    /// Drawn width, already cut at the panel's right edge.
    pub width: i32,
    /// Cursor after this segment, never past the panel's right edge.
    pub cursor: i32,
}

/// Convert `values` into pixel spans starting at `indent`.
///
/// Each width is `floor(value * (width - indent) / total)`. `total` must be
/// positive; callers validate it. A non-positive total yields zero-width spans.
pub fn segment_spans(values: &[f64], total: f64, width: i32, indent: i32) -> Vec<Span> {
    let avail = (width - indent).max(0) as f64;
    let mut cursor = clamp(indent, 0, width.max(0));
    let mut spans = Vec::with_capacity(values.len());
    for &v in values {
        let w = if total > 0.0 && total.is_finite() {
            (v * avail / total).floor().max(0.0) as i32
        } else {
            0
        };
        let start = cursor;
        let drawn = w.min(width - start).max(0);
        cursor = (start.saturating_add(w)).min(width);
        spans.push(Span { start, width: drawn, cursor });
    }
    spans
}

/// Pixel geometry of one segment inside its panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SegmentLayout {
    pub bar: RectI32,
    /// Right-aligned value text box, ending one pixel left of the cursor.
    pub value_box: RectI32,
    /// Right-aligned label text box, ending at the cursor.
    pub label_box: RectI32,
}

/// Everything a panel needs to draw, in panel-local pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelLayout {
    pub width: i32,
    pub height: i32,
    pub title_baseline: i32,
    pub segments: Vec<SegmentLayout>,
}

impl PanelLayout {
    /// Sum of drawn segment widths.
    pub fn bar_width(&self) -> i32 {
        self.segments.iter().map(|s| s.bar.width()).sum()
    }

    /// Horizontal cursor after the last segment.
    pub fn end_cursor(&self) -> Option<i32> {
        self.segments.last().map(|s| s.label_box.right)
    }
}

pub(crate) fn bar_band(height: i32) -> (i32, i32) {
    let top = TITLE_HEIGHT + TITLE_MARGIN;
    let h = height - TITLE_HEIGHT - LABEL_HEIGHT - TITLE_MARGIN - LABEL_MARGIN;
    (top, h.max(0))
}

pub(crate) fn place(spans: &[Span], height: i32) -> Vec<SegmentLayout> {
    let (bar_top, bar_h) = bar_band(height);
    let line = LABEL_HEIGHT + LABEL_MARGIN;
    let value_top = height - line * 2;
    let label_top = height - line;
    spans
        .iter()
        .map(|s| SegmentLayout {
            bar: RectI32::from_ltwh(s.start, bar_top, s.width, bar_h),
            value_box: RectI32::from_ltwh(0, value_top, (s.cursor - 1).max(0), line),
            label_box: RectI32::from_ltwh(0, label_top, s.cursor, line),
        })
        .collect()
}
