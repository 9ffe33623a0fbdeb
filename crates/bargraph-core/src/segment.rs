// File: crates/bargraph-core/src/segment.rs
// Summary: One colored, labeled, valued slice of a panel's bar.

use skia_safe as skia;

/// Immutable once built; a panel takes ownership when it is added.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    value: f64,
    color: skia::Color,
    label: String,
    value_label: String,
}

impl Segment {
    /// `label` goes in the bottom band; `value_label` is drawn over the bar.
    pub fn new(value: f64, color: skia::Color, label: impl Into<String>, value_label: impl Into<String>) -> Self {
        Self { value, color, label: label.into(), value_label: value_label.into() }
    }

    pub fn value(&self) -> f64 { self.value }
    pub fn color(&self) -> skia::Color { self.color }
    pub fn label(&self) -> &str { &self.label }
    pub fn value_label(&self) -> &str { &self.value_label }

    /// Values must be finite and non-negative for proportional widths to mean anything.
    pub fn has_valid_value(&self) -> bool {
        self.value.is_finite() && self.value >= 0.0
    }
}
