// File: crates/bargraph-core/src/config.rs
// Summary: Plain data description of a graph (panels of segments) and conversion into a Stack.

use skia_safe as skia;

use crate::panel::Panel;
use crate::segment::Segment;
use crate::stack::Stack;
use crate::types::{STACK_SPACING, STACK_WIDTH};

#[derive(Clone, Debug, PartialEq)]
pub struct SegmentConfig {
    pub value: f64,
    pub color: skia::Color,
    pub label: String,
    pub value_label: String,
}

impl SegmentConfig {
    pub fn new(value: f64, color: skia::Color, label: impl Into<String>, value_label: impl Into<String>) -> Self {
        Self { value, color, label: label.into(), value_label: value_label.into() }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PanelConfig {
    pub title: String,
    /// Panel default when unset.
    pub height: Option<i32>,
    pub indent: Option<i32>,
    pub segments: Vec<SegmentConfig>,
}

impl PanelConfig {
    pub fn new(title: impl Into<String>, segments: Vec<SegmentConfig>) -> Self {
        Self { title: title.into(), height: None, indent: None, segments }
    }

    pub fn build(&self) -> Panel {
        let mut panel = Panel::new(self.title.clone());
        if let Some(h) = self.height { panel.set_height(h); }
        if let Some(i) = self.indent { panel.set_indent(i); }
        for s in &self.segments {
            panel.add_segment(Segment::new(s.value, s.color, s.label.clone(), s.value_label.clone()));
        }
        panel
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphConfig {
    pub width: i32,
    pub spacing: i32,
    pub panels: Vec<PanelConfig>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self { width: STACK_WIDTH, spacing: STACK_SPACING, panels: Vec::new() }
    }
}

impl GraphConfig {
    pub fn build(&self) -> Stack {
        let mut stack = Stack::new();
        stack.set_width(self.width);
        stack.set_spacing(self.spacing);
        for p in &self.panels {
            stack.add_panel(p.build());
        }
        stack
    }
}
