// File: crates/bargraph-core/src/panel.rs
// Summary: Panel (one stacked horizontal bar chart): title, segments, layout and drawing.

use skia_safe as skia;
use tracing::debug;

use crate::context::RenderContext;
use crate::error::{BarGraphError, Result};
use crate::layout::{place, segment_spans, PanelLayout};
use crate::segment::Segment;
use crate::types::{PANEL_HEIGHT, PANEL_INDENT, PANEL_WIDTH, TITLE_HEIGHT};

#[derive(Clone, Debug)]
pub struct Panel {
    title: String,
    width: i32,
    height: i32,
    indent: i32,
    segments: Vec<Segment>,
    total: f64,
}

impl Panel {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            width: PANEL_WIDTH,
            height: PANEL_HEIGHT,
            indent: PANEL_INDENT,
            segments: Vec::new(),
            // Seeded at zero so the divisor is exactly the sum of the values.
            total: 0.0,
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) { self.title = title.into(); }
    pub fn set_width(&mut self, width: i32) { self.width = width; }
    pub fn set_height(&mut self, height: i32) { self.height = height; }
    pub fn set_indent(&mut self, indent: i32) { self.indent = indent; }

    pub fn title(&self) -> &str { &self.title }
    pub fn width(&self) -> i32 { self.width }
    pub fn height(&self) -> i32 { self.height }
    pub fn indent(&self) -> i32 { self.indent }
    pub fn segments(&self) -> &[Segment] { &self.segments }

    /// Running total used as the proportional divisor.
    pub fn total(&self) -> f64 { self.total }

    /// Append a segment; order is left-to-right draw order.
    pub fn add_segment(&mut self, segment: Segment) {
        self.total += segment.value();
        self.segments.push(segment);
    }

    pub fn with_segment(mut self, segment: Segment) -> Self {
        self.add_segment(segment);
        self
    }

    /// Reject states where proportional widths are undefined.
    pub fn validate(&self) -> Result<()> {
        if self.width <= self.indent || self.height <= 0 || self.indent < 0 {
            return Err(BarGraphError::InvalidDimensions {
                what: format!("panel '{}'", self.title),
                width: self.width,
                height: self.height,
            });
        }
        if self.segments.is_empty() {
            return Err(BarGraphError::EmptyPanel { title: self.title.clone() });
        }
        if let Some((index, s)) = self.segments.iter().enumerate().find(|(_, s)| !s.has_valid_value()) {
            return Err(BarGraphError::InvalidSegmentValue {
                title: self.title.clone(),
                index,
                value: s.value(),
            });
        }
        if !(self.total > 0.0) || !self.total.is_finite() {
            return Err(BarGraphError::InvalidTotal { title: self.title.clone(), total: self.total });
        }
        Ok(())
    }

    /// Compute segment rectangles and text boxes in panel-local pixels.
    pub fn layout(&self) -> Result<PanelLayout> {
        self.validate()?;
        let values: Vec<f64> = self.segments.iter().map(Segment::value).collect();
        let spans = segment_spans(&values, self.total, self.width, self.indent);
        debug!(
            title = %self.title,
            width = self.width,
            total = self.total,
            end = spans.last().map(|s| s.cursor).unwrap_or(self.indent),
            "panel layout"
        );
        Ok(PanelLayout {
            width: self.width,
            height: self.height,
            title_baseline: TITLE_HEIGHT,
            segments: place(&spans, self.height),
        })
    }

    /// Draw onto `canvas` with the panel's top-left at the current origin.
    pub fn render(&self, canvas: &skia::Canvas, ctx: &RenderContext) -> Result<()> {
        let layout = self.layout()?;
        self.draw(canvas, ctx, &layout);
        Ok(())
    }

    pub(crate) fn draw(&self, canvas: &skia::Canvas, ctx: &RenderContext, layout: &PanelLayout) {
        if ctx.draw_labels {
            ctx.shaper.draw_left(
                canvas,
                &self.title,
                0.0,
                layout.title_baseline as f32,
                ctx.title_size,
                ctx.theme.title,
                &ctx.title_families,
            );
        }

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(false);
        fill.set_style(skia::paint::Style::Fill);

        let mut outline = skia::Paint::default();
        outline.set_anti_alias(false);
        outline.set_style(skia::paint::Style::Stroke);
        outline.set_stroke_width(1.0);
        outline.set_color(ctx.theme.segment_outline);

        for (segment, placed) in self.segments.iter().zip(&layout.segments) {
            if !placed.bar.is_empty() {
                let rect = placed.bar.to_skia();
                fill.set_color(segment.color());
                canvas.draw_rect(rect, &fill);
                // half-pixel inset keeps the hairline on the rect's edge pixels
                canvas.draw_rect(rect.with_inset((0.5, 0.5)), &outline);
            }

            if ctx.draw_labels {
                ctx.shaper.draw_right(
                    canvas,
                    segment.value_label(),
                    placed.value_box,
                    ctx.label_size,
                    ctx.theme.value_label,
                    &ctx.label_families,
                );
                ctx.shaper.draw_right(
                    canvas,
                    segment.label(),
                    placed.label_box,
                    ctx.label_size,
                    ctx.theme.label,
                    &ctx.label_families,
                );
            }
        }
    }
}
