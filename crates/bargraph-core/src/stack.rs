// File: crates/bargraph-core/src/stack.rs
// Summary: Vertical stack of panels composited onto one Skia CPU raster surface.

use skia_safe as skia;
use tracing::debug;

use crate::canvas::Canvas;
use crate::context::RenderContext;
use crate::error::{BarGraphError, Result};
use crate::panel::Panel;
use crate::types::{STACK_INSET, STACK_SPACING, STACK_WIDTH};

#[derive(Clone, Debug)]
pub struct Stack {
    width: i32,
    spacing: i32,
    panels: Vec<Panel>,
}

impl Default for Stack {
    fn default() -> Self { Self::new() }
}

impl Stack {
    pub fn new() -> Self {
        Self { width: STACK_WIDTH, spacing: STACK_SPACING, panels: Vec::new() }
    }

    pub fn set_width(&mut self, width: i32) { self.width = width; }
    pub fn set_spacing(&mut self, spacing: i32) { self.spacing = spacing; }

    pub fn width(&self) -> i32 { self.width }
    pub fn spacing(&self) -> i32 { self.spacing }
    pub fn panels(&self) -> &[Panel] { &self.panels }

    /// Append a panel; order is top-to-bottom.
    pub fn add_panel(&mut self, panel: Panel) {
        self.panels.push(panel);
    }

    /// Sum of panel heights plus spacing between (not after) panels.
    /// `None` when the sum does not fit in an `i32`.
    pub fn total_height(&self) -> Option<i32> {
        let heights = self.panels.iter().try_fold(0i32, |acc, p| acc.checked_add(p.height()))?;
        let gaps = i32::try_from(self.panels.len().saturating_sub(1)).ok()?;
        heights.checked_add(gaps.checked_mul(self.spacing)?)
    }

    /// Render every panel onto a fresh canvas filled with the theme background.
    ///
    /// Panel widths are set to `width - 2` first. All panels are laid out
    /// (and validated) before the surface is allocated, so a bad panel
    /// aborts the render without producing a partial image.
    pub fn render(&mut self, ctx: &RenderContext) -> Result<Canvas> {
        if self.panels.is_empty() {
            return Err(BarGraphError::EmptyStack);
        }
        let height = self.total_height().ok_or(BarGraphError::InvalidDimensions {
            what: "stack (height overflows)".into(),
            width: self.width,
            height: i32::MAX,
        })?;
        if self.width <= STACK_INSET || height <= 0 || self.spacing < 0 {
            return Err(BarGraphError::InvalidDimensions { what: "stack".into(), width: self.width, height });
        }

        for panel in &mut self.panels {
            panel.set_width(self.width - STACK_INSET);
        }
        let layouts = self.panels.iter().map(Panel::layout).collect::<Result<Vec<_>>>()?;

        debug!(width = self.width, height, panels = self.panels.len(), "allocating canvas");
        let mut surface = skia::surfaces::raster_n32_premul((self.width, height))
            .ok_or(BarGraphError::Surface { width: self.width, height })?;
        let canvas = surface.canvas();
        canvas.clear(ctx.theme.background);

        let mut y = 0;
        for (panel, layout) in self.panels.iter().zip(&layouts) {
            canvas.save();
            canvas.translate((0.0, y as f32));
            canvas.clip_rect(
                skia::Rect::from_wh(panel.width() as f32, panel.height() as f32),
                skia::ClipOp::Intersect,
                false,
            );
            panel.draw(canvas, ctx, layout);
            canvas.restore();
            y = y.saturating_add(panel.height()).saturating_add(self.spacing);
        }

        let info = skia::ImageInfo::new(
            (self.width, height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = self.width as usize * 4;
        let mut pixels = vec![0u8; row_bytes * height as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(BarGraphError::ReadPixels);
        }
        Canvas::from_rgba8(self.width as u32, height as u32, &pixels)
    }
}
